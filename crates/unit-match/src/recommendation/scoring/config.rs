use serde::{Deserialize, Serialize};

/// Weights, ratio tiers, and aggregation limits for a recommendation run.
/// The tier ratios are empirically tuned values carried over from the sales
/// team's rubric; no further semantics should be read into them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Awarded when the unit's project is explicitly preferred.
    pub preferred_project_points: u8,
    /// Awarded on a named typology match.
    pub typology_match_points: u8,
    /// Softer credit when the client stated no typology preference.
    pub typology_open_points: u8,
    pub area_in_range_points: u8,
    /// Near-miss credit on either side of the area range.
    pub area_close_points: u8,
    /// Credit for a larger miss that is still worth surfacing.
    pub area_stretch_points: u8,
    pub area_below_close_ratio: f64,
    pub area_below_stretch_ratio: f64,
    pub area_above_close_ratio: f64,
    pub area_above_stretch_ratio: f64,
    pub price_in_range_points: u8,
    /// Below this fraction of the minimum budget the signal weakens from
    /// "fits" to "well under", but stays positive.
    pub price_under_full_ratio: f64,
    pub price_under_points: u8,
    pub price_over_close_ratio: f64,
    pub price_over_close_points: u8,
    pub price_over_stretch_ratio: f64,
    pub price_over_stretch_points: u8,
    /// Candidates scoring below this never appear in results.
    pub minimum_score: u8,
    /// Hard cap on the ranked list length.
    pub max_results: usize,
    /// Upper bound on units scored per run; enumeration stops here.
    pub max_units_scanned: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            preferred_project_points: 30,
            typology_match_points: 30,
            typology_open_points: 15,
            area_in_range_points: 25,
            area_close_points: 20,
            area_stretch_points: 10,
            area_below_close_ratio: 0.85,
            area_below_stretch_ratio: 0.70,
            area_above_close_ratio: 1.15,
            area_above_stretch_ratio: 1.30,
            price_in_range_points: 15,
            price_under_full_ratio: 0.80,
            price_under_points: 10,
            price_over_close_ratio: 1.10,
            price_over_close_points: 10,
            price_over_stretch_ratio: 1.25,
            price_over_stretch_points: 5,
            minimum_score: 30,
            max_results: 15,
            max_units_scanned: 10_000,
        }
    }
}
