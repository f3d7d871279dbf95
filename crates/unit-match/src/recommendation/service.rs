use serde_json::Value;
use tracing::warn;

use crate::inventory::{enumerate_available_units, InventoryImportError, ProjectCatalog};

use super::domain::{ClientCriteria, Recommendation};
use super::scoring::{ScoringConfig, ScoringEngine};
use super::typology::match_description;

/// Outcome of one aggregation pass: how many sellable units were scored and
/// the ranked shortlist.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRun {
    pub evaluated_units: usize,
    pub recommendations: Vec<Recommendation>,
}

/// Rank a catalog snapshot against criteria. Pure: identical snapshot and
/// criteria always produce identical output, and nothing is retained.
pub fn recommend_within(
    catalog: &ProjectCatalog,
    criteria: &ClientCriteria,
    config: &ScoringConfig,
) -> Vec<Recommendation> {
    run_within(catalog, criteria, config).recommendations
}

/// As `recommend_within`, additionally reporting the evaluated-unit count.
pub fn run_within(
    catalog: &ProjectCatalog,
    criteria: &ClientCriteria,
    config: &ScoringConfig,
) -> RecommendationRun {
    let engine = ScoringEngine::new(config.clone());
    let mut candidates = Vec::new();
    let mut evaluated = 0usize;

    'feeds: for feed in catalog.feeds() {
        if criteria.excludes_project(feed.project_id) {
            continue;
        }

        for unit in enumerate_available_units(feed) {
            if evaluated >= config.max_units_scanned {
                warn!(
                    limit = config.max_units_scanned,
                    "scan cap reached, ranking only the units seen so far"
                );
                break 'feeds;
            }
            evaluated += 1;

            let typology = match_description(&unit.description, &criteria.typology_ids);
            let result = engine.score(&unit, criteria, &typology);
            if result.score >= config.minimum_score {
                candidates.push(Recommendation { unit, result });
            }
        }
    }

    // stable sort keeps encounter order between equal scores
    candidates.sort_by(|a, b| b.result.score.cmp(&a.result.score));
    candidates.truncate(config.max_results);

    RecommendationRun {
        evaluated_units: evaluated,
        recommendations: candidates,
    }
}

/// Error raised when a recommendation request cannot be served.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error(transparent)]
    Inventory(#[from] InventoryImportError),
}

/// Facade owning the serving catalog and scoring configuration. Holds no
/// per-request state; every call recomputes from the snapshot it is given.
pub struct RecommendationService {
    catalog: ProjectCatalog,
    config: ScoringConfig,
}

impl RecommendationService {
    pub fn new(catalog: ProjectCatalog, config: ScoringConfig) -> Self {
        Self { catalog, config }
    }

    pub fn with_defaults() -> Self {
        Self::new(ProjectCatalog::standard(), ScoringConfig::default())
    }

    pub fn catalog(&self) -> &ProjectCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Rank the owned catalog against the criteria.
    pub fn recommend(&self, criteria: &ClientCriteria) -> Vec<Recommendation> {
        recommend_within(&self.catalog, criteria, &self.config)
    }

    pub fn run(&self, criteria: &ClientCriteria) -> RecommendationRun {
        run_within(&self.catalog, criteria, &self.config)
    }

    /// Rank an inline snapshot supplied as raw JSON, as the API transport
    /// delivers it.
    pub fn run_snapshot(
        &self,
        inventory: Value,
        criteria: &ClientCriteria,
    ) -> Result<RecommendationRun, RecommendationError> {
        let catalog = ProjectCatalog::from_value(inventory)?;
        Ok(run_within(&catalog, criteria, &self.config))
    }
}
