//! Project inventory feeds and their normalization into canonical units.

mod amount;
mod catalog;
mod domain;
mod feeds;
mod normalizer;

pub use amount::{format_amount, parse_amount};
pub use catalog::ProjectCatalog;
pub use domain::{Unit, UnitStatus};
pub use feeds::{FeedPayload, ProjectFeed};

pub(crate) use normalizer::enumerate_available_units;

#[derive(Debug)]
pub enum InventoryImportError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for InventoryImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InventoryImportError::Io(err) => {
                write!(f, "failed to read inventory snapshot: {}", err)
            }
            InventoryImportError::Json(err) => {
                write!(f, "invalid inventory snapshot data: {}", err)
            }
        }
    }
}

impl std::error::Error for InventoryImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InventoryImportError::Io(err) => Some(err),
            InventoryImportError::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for InventoryImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for InventoryImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
