use crate::inventory::{format_amount, Unit};
use crate::recommendation::domain::{ClientCriteria, RangeFit};
use crate::recommendation::typology::TypologyMatch;

use super::config::ScoringConfig;
use super::{MatchFactor, ScoreFactor};

/// Walk the four factors in presentation order, collecting one entry per
/// factor and the running point total. Contributions are never negative.
pub(crate) fn score_unit(
    unit: &Unit,
    criteria: &ClientCriteria,
    typology: &TypologyMatch,
    config: &ScoringConfig,
) -> (Vec<ScoreFactor>, u16) {
    let mut factors = Vec::with_capacity(4);
    let mut total: u16 = 0;

    let (points, reason) = if criteria.prefers_project(unit.project_id) {
        (
            config.preferred_project_points,
            Some(format!(
                "Located in preferred project {}",
                unit.project_name
            )),
        )
    } else {
        (0, None)
    };
    factors.push(ScoreFactor {
        factor: MatchFactor::ProjectPreference,
        points,
        reason,
    });
    total += points as u16;

    let (points, reason) = if typology.matched {
        match typology.label {
            Some(label) => (
                config.typology_match_points,
                Some(format!("Matches requested typology: {label}")),
            ),
            // open preference earns the softer credit without a display line
            None => (config.typology_open_points, None),
        }
    } else {
        (0, None)
    };
    factors.push(ScoreFactor {
        factor: MatchFactor::Typology,
        points,
        reason,
    });
    total += points as u16;

    let area_label = format_amount(unit.total_area);
    let (points, reason) = match criteria.area.fit(unit.total_area) {
        RangeFit::Within => (
            config.area_in_range_points,
            Some(format!(
                "Area of {area_label} m2 sits within the requested range"
            )),
        ),
        RangeFit::Below { ratio } if ratio >= config.area_below_close_ratio => (
            config.area_close_points,
            Some(format!(
                "Area of {area_label} m2 is slightly below the requested minimum"
            )),
        ),
        RangeFit::Below { ratio } if ratio >= config.area_below_stretch_ratio => (
            config.area_stretch_points,
            Some(format!(
                "Area of {area_label} m2 is below the requested minimum"
            )),
        ),
        RangeFit::Below { .. } => (0, None),
        RangeFit::Above { ratio } if ratio <= config.area_above_close_ratio => (
            config.area_close_points,
            Some(format!(
                "Area of {area_label} m2 is slightly above the requested maximum"
            )),
        ),
        RangeFit::Above { ratio } if ratio <= config.area_above_stretch_ratio => (
            config.area_stretch_points,
            Some(format!(
                "Area of {area_label} m2 is above the requested maximum"
            )),
        ),
        RangeFit::Above { .. } => (0, None),
    };
    factors.push(ScoreFactor {
        factor: MatchFactor::AreaFit,
        points,
        reason,
    });
    total += points as u16;

    let price_label = format_amount(unit.sale_value);
    let (points, reason) = match criteria.price.fit(unit.sale_value) {
        RangeFit::Within => (
            config.price_in_range_points,
            Some(format!("Price of ${price_label} fits the stated budget")),
        ),
        RangeFit::Below { ratio } if ratio >= config.price_under_full_ratio => (
            config.price_in_range_points,
            Some(format!(
                "Price of ${price_label} comes in under the stated budget"
            )),
        ),
        // far under budget still reads as a mild positive signal
        RangeFit::Below { .. } => (
            config.price_under_points,
            Some(format!(
                "Price of ${price_label} is well under the stated budget"
            )),
        ),
        RangeFit::Above { ratio } if ratio <= config.price_over_close_ratio => (
            config.price_over_close_points,
            Some(format!(
                "Price of ${price_label} is slightly over the stated budget"
            )),
        ),
        RangeFit::Above { ratio } if ratio <= config.price_over_stretch_ratio => (
            config.price_over_stretch_points,
            Some(format!("Price of ${price_label} stretches the stated budget")),
        ),
        RangeFit::Above { .. } => (0, None),
    };
    factors.push(ScoreFactor {
        factor: MatchFactor::PriceFit,
        points,
        reason,
    });
    total += points as u16;

    (factors, total)
}
