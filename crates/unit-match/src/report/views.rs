use serde::{Deserialize, Serialize};

use crate::inventory::ProjectCatalog;
use crate::recommendation::Recommendation;

/// Flattened wire form of one recommendation, matching the output contract
/// the UI and outreach tooling consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationView {
    pub project_id: u32,
    pub project_name: String,
    pub unit_number: String,
    pub floor: i32,
    pub match_score: u8,
    pub match_reasons: Vec<String>,
    pub sale_value: f64,
    pub price_per_area: f64,
    pub total_area: f64,
    pub description: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
}

impl Recommendation {
    pub fn to_view(&self) -> RecommendationView {
        RecommendationView {
            project_id: self.unit.project_id,
            project_name: self.unit.project_name.clone(),
            unit_number: self.unit.unit_number.clone(),
            floor: self.unit.floor,
            match_score: self.result.score,
            match_reasons: self.result.reasons.clone(),
            sale_value: self.unit.sale_value,
            price_per_area: self.unit.price_per_area,
            total_area: self.unit.total_area,
            description: self.unit.description.clone(),
            status: self.unit.status.label().to_string(),
            orientation: self.unit.orientation.clone(),
        }
    }
}

/// Listing of one project for selection widgets, with its sellable unit count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub project_id: u32,
    pub project_name: String,
    pub available_units: usize,
}

/// Selection-widget entries for every project in the catalog, in feed order.
pub fn project_entries(catalog: &ProjectCatalog) -> Vec<ProjectEntry> {
    let mut entries: Vec<ProjectEntry> = catalog
        .feeds()
        .iter()
        .map(|feed| ProjectEntry {
            project_id: feed.project_id,
            project_name: feed.project_name.clone(),
            available_units: 0,
        })
        .collect();

    for unit in catalog.available_units() {
        if let Some(entry) = entries
            .iter_mut()
            .find(|entry| entry.project_id == unit.project_id)
        {
            entry.available_units += 1;
        }
    }

    entries
}
