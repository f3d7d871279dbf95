use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::recommendation::Recommendation;

/// Fixed line rendered when a run produced no candidates. Distinct from an
/// empty string so the UI can tell "no matches" apart from a failed call.
pub const NO_MATCHES_MESSAGE: &str = "No units matched the requested criteria.";

/// One sentence covering total count, a per-project breakdown in ranking
/// order, and the top pick.
pub fn summary_line(recommendations: &[Recommendation]) -> String {
    let top = match recommendations.first() {
        Some(top) => top,
        None => return NO_MATCHES_MESSAGE.to_string(),
    };

    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for recommendation in recommendations {
        let name = recommendation.unit.project_name.as_str();
        if !counts.contains_key(name) {
            order.push(name);
        }
        *counts.entry(name).or_insert(0) += 1;
    }

    let breakdown = order
        .iter()
        .map(|name| format!("{} in {}", counts[name], name))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Found {} matching unit(s) ({}); top pick: {} unit {} scoring {}/100.",
        recommendations.len(),
        breakdown,
        top.unit.project_name,
        top.unit.unit_number,
        top.result.score
    )
}

/// Aggregates over one project's recommended units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub project_name: String,
    pub units: usize,
    pub avg_score: f64,
    pub avg_price: f64,
    pub avg_area: f64,
}

/// Count and arithmetic means of score, price, and area for each project
/// present in the list, keyed by project id.
pub fn project_statistics(recommendations: &[Recommendation]) -> BTreeMap<u32, ProjectStats> {
    let mut stats: BTreeMap<u32, ProjectStats> = BTreeMap::new();

    for recommendation in recommendations {
        let unit = &recommendation.unit;
        let entry = stats.entry(unit.project_id).or_insert_with(|| ProjectStats {
            project_name: unit.project_name.clone(),
            units: 0,
            avg_score: 0.0,
            avg_price: 0.0,
            avg_area: 0.0,
        });
        entry.units += 1;
        entry.avg_score += recommendation.result.score as f64;
        entry.avg_price += unit.sale_value;
        entry.avg_area += unit.total_area;
    }

    for entry in stats.values_mut() {
        let count = entry.units as f64;
        entry.avg_score /= count;
        entry.avg_price /= count;
        entry.avg_area /= count;
    }

    stats
}
