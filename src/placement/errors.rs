//! Error types for arrow placement
//!
//! Malformed motion data never produces an error: the calculators degrade
//! to a safe default and log a warning. Only the placement dataset can
//! fail in a way callers must see.

use thiserror::Error;

/// Failures that propagate to callers of the placement engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    /// Lookups were issued before the placement dataset was loaded
    #[error("Placement dataset unavailable: load placement data before calculating placements")]
    DatasetUnavailable,

    /// A second dataset was offered after one was already loaded
    #[error("Placement dataset already loaded: the new dataset was not applied")]
    DatasetAlreadyLoaded,

    /// The dataset was found but could not be parsed
    #[error("Invalid placement dataset: {0}")]
    DatasetParse(String),

    /// The dataset could not be read from storage
    #[error("Failed to read placement dataset: {0}")]
    DatasetIo(String),
}

impl From<serde_json::Error> for PlacementError {
    fn from(err: serde_json::Error) -> Self {
        PlacementError::DatasetParse(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for PlacementError {
    fn from(err: serde_yaml::Error) -> Self {
        PlacementError::DatasetParse(format!("YAML error: {}", err))
    }
}

impl From<std::io::Error> for PlacementError {
    fn from(err: std::io::Error) -> Self {
        PlacementError::DatasetIo(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PlacementError>;
