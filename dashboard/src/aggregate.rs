//! Dashboard aggregates
//!
//! Every function here recomputes from the full collection on each call.
//! Collections are tens of records, so nothing is cached.

use serde::Serialize;

use crate::models::{Alert, Convoy, ConvoyStatus, Priority, Severity};

/// Number of convoys currently moving
pub fn active_unit_count(convoys: &[Convoy]) -> usize {
    convoys.iter().filter(|c| c.is_moving()).count()
}

/// Fleet-level metrics for the command metrics card
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FleetSummary {
    pub total: usize,
    pub moving: usize,
    pub delayed: usize,
    pub idle: usize,
    pub high_priority: usize,
    pub vehicles: u64,
    /// Vehicles belonging to moving convoys
    pub vehicles_in_motion: u64,
    /// Mean of clamped progress, `None` for an empty fleet
    pub mean_progress: Option<f64>,
}

impl FleetSummary {
    /// Summarize a convoy collection in a single pass
    pub fn from_convoys(convoys: &[Convoy]) -> Self {
        let mut summary = FleetSummary::default();
        let mut progress_sum = 0.0;

        for convoy in convoys {
            summary.total += 1;
            match convoy.status {
                ConvoyStatus::Moving => {
                    summary.moving += 1;
                    summary.vehicles_in_motion += u64::from(convoy.vehicle_count);
                }
                ConvoyStatus::Delayed => summary.delayed += 1,
                ConvoyStatus::Idle => summary.idle += 1,
            }
            if convoy.priority == Priority::High {
                summary.high_priority += 1;
            }
            summary.vehicles += u64::from(convoy.vehicle_count);
            progress_sum += convoy.clamped_progress();
        }

        if summary.total > 0 {
            summary.mean_progress = Some(progress_sum / summary.total as f64);
        }
        summary
    }

    /// Same as [`active_unit_count`]
    pub fn active_units(&self) -> usize {
        self.moving
    }
}

/// Alert counts for the intel feed header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AlertSummary {
    pub total: usize,
    pub critical: usize,
    pub warning: usize,
    pub info: usize,
}

impl AlertSummary {
    pub fn from_alerts(alerts: &[Alert]) -> Self {
        let mut summary = AlertSummary::default();
        for alert in alerts {
            summary.total += 1;
            match alert.severity {
                Severity::Critical => summary.critical += 1,
                Severity::Warning => summary.warning += 1,
                Severity::Info => summary.info += 1,
            }
        }
        summary
    }

    /// Most severe level present in the feed
    pub fn highest_severity(&self) -> Option<Severity> {
        if self.critical > 0 {
            Some(Severity::Critical)
        } else if self.warning > 0 {
            Some(Severity::Warning)
        } else if self.info > 0 {
            Some(Severity::Info)
        } else {
            None
        }
    }
}
