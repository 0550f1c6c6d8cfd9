//! Convoy models

use serde::{Deserialize, Serialize};

/// A tracked unit of cargo transport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Convoy {
    /// Unique convoy ID
    pub id: String,

    /// Display label
    pub name: String,

    /// Movement status
    pub status: ConvoyStatus,

    /// Route completion percentage, nominally 0-100
    ///
    /// Not clamped on ingest. Use [`Convoy::clamped_progress`] for anything
    /// that ends up as a width or percentage.
    pub progress: f64,

    /// Estimated arrival, display string
    pub eta: String,

    /// Visual emphasis
    pub priority: Priority,

    /// Free-text start location, may embed a canonical form in parentheses
    pub start_location: String,

    /// Free-text destination, same format as `start_location`
    pub destination: String,

    /// Number of vehicles in the convoy
    pub vehicle_count: u32,
}

impl Convoy {
    /// Progress clamped into `[0, 100]`; non-finite values become 0
    pub fn clamped_progress(&self) -> f64 {
        clamp_progress(self.progress)
    }

    pub fn is_moving(&self) -> bool {
        self.status == ConvoyStatus::Moving
    }
}

/// Clamp a raw progress value into `[0, 100]`
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 100.0)
}

/// Convoy status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConvoyStatus {
    Moving,
    Delayed,
    Idle,
}

impl ConvoyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConvoyStatus::Moving => "MOVING",
            ConvoyStatus::Delayed => "DELAYED",
            ConvoyStatus::Idle => "IDLE",
        }
    }
}

impl std::fmt::Display for ConvoyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convoy priority
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    High,
    #[default]
    Normal,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Normal => "NORMAL",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
