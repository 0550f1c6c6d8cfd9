//! Snapshot feed
//!
//! The data source hands over convoys and alerts as one JSON document. The
//! snapshot is checked once here so the rest of the crate can trust it.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::DashboardError;
use crate::filesys::file::File;
use crate::models::{Alert, Convoy};

/// One refresh worth of records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// When the data source produced the snapshot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub convoys: Vec<Convoy>,

    #[serde(default)]
    pub alerts: Vec<Alert>,
}

impl DashboardSnapshot {
    /// Parse and validate a snapshot document
    pub fn from_json(json: &str) -> Result<Self, DashboardError> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Load and validate a snapshot file
    pub async fn load(file: &File) -> Result<Self, DashboardError> {
        debug!("Loading snapshot from {}", file.path().display());
        let snapshot: Self = file.read_json().await?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Convoy IDs must be non-empty and unique
    pub fn validate(&self) -> Result<(), DashboardError> {
        let mut seen = HashSet::with_capacity(self.convoys.len());
        for (index, convoy) in self.convoys.iter().enumerate() {
            if convoy.id.trim().is_empty() {
                return Err(DashboardError::ValidationError(format!(
                    "convoy at index {} has an empty id",
                    index
                )));
            }
            if !seen.insert(convoy.id.as_str()) {
                return Err(DashboardError::ValidationError(format!(
                    "duplicate convoy id {}",
                    convoy.id
                )));
            }
        }
        Ok(())
    }
}
