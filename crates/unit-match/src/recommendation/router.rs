use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::report::views::{project_entries, RecommendationView};
use crate::report::{
    outreach_message, project_statistics, summary_line, ProjectStats, DEFAULT_OUTREACH_LIMIT,
};

use super::domain::{ClientCriteria, CriteriaInput};
use super::service::{RecommendationError, RecommendationService};
use super::typology;

/// Router builder exposing the recommendation endpoints.
pub fn recommendation_router(service: Arc<RecommendationService>) -> Router {
    Router::new()
        .route("/api/v1/recommendations", post(recommend_handler))
        .route("/api/v1/projects", get(projects_handler))
        .route("/api/v1/typologies", get(typologies_handler))
        .with_state(service)
}

/// Body of `POST /api/v1/recommendations`: criteria fields inline, plus an
/// optional client name (enables the outreach text) and an optional inline
/// inventory snapshot replacing the serving catalog for this call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(flatten)]
    pub criteria: CriteriaInput,
    #[serde(default)]
    pub inventory: Option<Value>,
}

/// Ranked views plus the derived presentation artifacts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub generated_on: String,
    pub evaluated_units: usize,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outreach_message: Option<String>,
    pub project_stats: BTreeMap<u32, ProjectStats>,
    pub results: Vec<RecommendationView>,
}

pub(crate) async fn recommend_handler(
    State(service): State<Arc<RecommendationService>>,
    axum::Json(request): axum::Json<RecommendationRequest>,
) -> Response {
    let criteria = ClientCriteria::from_input(request.criteria);

    let run = match request.inventory {
        Some(snapshot) => match service.run_snapshot(snapshot, &criteria) {
            Ok(run) => run,
            Err(RecommendationError::Inventory(error)) => {
                let payload = json!({
                    "error": error.to_string(),
                });
                return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
            }
        },
        None => service.run(&criteria),
    };

    let outreach = request
        .client_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| outreach_message(name, &run.recommendations, DEFAULT_OUTREACH_LIMIT));

    let response = RecommendationResponse {
        generated_on: Utc::now().date_naive().to_string(),
        evaluated_units: run.evaluated_units,
        summary: summary_line(&run.recommendations),
        outreach_message: outreach,
        project_stats: project_statistics(&run.recommendations),
        results: run
            .recommendations
            .iter()
            .map(|recommendation| recommendation.to_view())
            .collect(),
    };

    (StatusCode::OK, axum::Json(response)).into_response()
}

pub(crate) async fn projects_handler(
    State(service): State<Arc<RecommendationService>>,
) -> Response {
    let entries = project_entries(service.catalog());
    (StatusCode::OK, axum::Json(entries)).into_response()
}

pub(crate) async fn typologies_handler() -> Response {
    (StatusCode::OK, axum::Json(typology::catalog())).into_response()
}
