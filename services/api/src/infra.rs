use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use unit_match::error::AppError;
use unit_match::inventory::ProjectCatalog;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Resolve the serving catalog: an operator-supplied snapshot file when one
/// is given, the built-in portfolio otherwise.
pub(crate) fn resolve_catalog(snapshot: Option<&Path>) -> Result<ProjectCatalog, AppError> {
    match snapshot {
        Some(path) => ProjectCatalog::from_path(path).map_err(AppError::from),
        None => Ok(ProjectCatalog::standard()),
    }
}
