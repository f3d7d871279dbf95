use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::inventory::{ProjectCatalog, Unit, UnitStatus};
use crate::recommendation::domain::{ClientCriteria, CriteriaInput, MatchResult, Recommendation};
use crate::recommendation::typology::match_description;
use crate::recommendation::{recommendation_router, RecommendationService, ScoringEngine};

pub(super) fn catalog() -> ProjectCatalog {
    ProjectCatalog::standard()
}

/// The premium three-bedroom unit the scoring walkthroughs are written
/// around.
pub(super) fn dependencia_unit() -> Unit {
    Unit {
        project_id: 1,
        project_name: "Torre Alvear".to_string(),
        unit_number: "804".to_string(),
        floor: 8,
        description: "3 DORMITORIOS C/DEPENDENCIA".to_string(),
        status: UnitStatus::Available,
        total_area: 210.45,
        sale_value: 1_008_900.0,
        price_per_area: 1_008_900.0 / 210.45,
        orientation: Some("NE".to_string()),
    }
}

pub(super) fn unit_with(total_area: f64, sale_value: f64) -> Unit {
    Unit {
        total_area,
        sale_value,
        price_per_area: sale_value / total_area,
        ..dependencia_unit()
    }
}

/// Three-bedroom search with explicit area and budget windows.
pub(super) fn three_bedroom_criteria() -> ClientCriteria {
    ClientCriteria::from_input(CriteriaInput {
        typology_ids: vec![3],
        area_min: Some(150.0),
        area_max: Some(220.0),
        price_min: Some(800_000.0),
        price_max: Some(1_200_000.0),
        ..CriteriaInput::default()
    })
}

pub(super) fn score_with_defaults(unit: &Unit, criteria: &ClientCriteria) -> MatchResult {
    let engine = ScoringEngine::default();
    let typology = match_description(&unit.description, &criteria.typology_ids);
    engine.score(unit, criteria, &typology)
}

pub(super) fn recommendation(
    project_id: u32,
    project_name: &str,
    unit_number: &str,
    score: u8,
    sale_value: f64,
    total_area: f64,
) -> Recommendation {
    Recommendation {
        unit: Unit {
            project_id,
            project_name: project_name.to_string(),
            unit_number: unit_number.to_string(),
            floor: 3,
            description: "2 DORMITORIOS".to_string(),
            status: UnitStatus::Available,
            total_area,
            sale_value,
            price_per_area: sale_value / total_area,
            orientation: None,
        },
        result: MatchResult {
            score,
            reasons: vec!["Matches requested typology: 2 Bedrooms".to_string()],
        },
    }
}

pub(super) fn default_router() -> axum::Router {
    recommendation_router(Arc::new(RecommendationService::with_defaults()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
