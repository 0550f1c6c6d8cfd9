//! Error types for the convoy dashboard

use thiserror::Error;

/// Main error type for the convoy dashboard
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Convoy not in current collection: {0}")]
    SelectionReferenceMissing(String),
}
