//! Presentation-ready values
//!
//! Renderer-agnostic data derived from convoy and alert records. A renderer
//! maps [`Tone`] to its own palette and never re-derives anything from raw
//! records.

pub mod dashboard;
pub mod tracking;

use serde::Serialize;

use crate::models::{clamp_progress, ConvoyStatus, Severity};

/// Visual tone for badges and labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Caution,
    Critical,
    Informational,
}

impl From<ConvoyStatus> for Tone {
    fn from(status: ConvoyStatus) -> Self {
        match status {
            ConvoyStatus::Moving => Tone::Positive,
            ConvoyStatus::Delayed => Tone::Critical,
            ConvoyStatus::Idle => Tone::Caution,
        }
    }
}

impl From<Severity> for Tone {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Critical => Tone::Critical,
            Severity::Warning => Tone::Caution,
            Severity::Info => Tone::Informational,
        }
    }
}

/// Progress bar fill, always within `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressBar {
    pub percent: f64,
}

impl ProgressBar {
    pub fn new(progress: f64) -> Self {
        Self {
            percent: clamp_progress(progress),
        }
    }

    /// CSS width value, e.g. `"40%"`
    pub fn width(&self) -> String {
        format!("{}%", self.percent)
    }
}
