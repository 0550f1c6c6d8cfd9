//! Operations dashboard view

use serde::Serialize;

use crate::aggregate::{AlertSummary, FleetSummary};
use crate::models::{Alert, Convoy, ConvoyStatus, Priority, Severity};
use crate::view::{ProgressBar, Tone};

/// One row of the convoy status table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvoyRow {
    pub id: String,
    pub name: String,
    pub status: ConvoyStatus,
    pub tone: Tone,
    pub progress: ProgressBar,
    pub eta: String,
    pub priority: Priority,
    /// High priority convoys are drawn with emphasis
    pub emphasized: bool,
}

impl From<&Convoy> for ConvoyRow {
    fn from(convoy: &Convoy) -> Self {
        Self {
            id: convoy.id.clone(),
            name: convoy.name.clone(),
            status: convoy.status,
            tone: convoy.status.into(),
            progress: ProgressBar::new(convoy.progress),
            eta: convoy.eta.clone(),
            priority: convoy.priority,
            emphasized: convoy.priority == Priority::High,
        }
    }
}

/// One entry of the intel feed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertEntry {
    pub id: String,
    pub severity: Severity,
    pub tone: Tone,
    pub timestamp: String,
    pub message: String,
    pub location: Option<String>,
}

impl From<&Alert> for AlertEntry {
    fn from(alert: &Alert) -> Self {
        Self {
            id: alert.id.clone(),
            severity: alert.severity,
            tone: alert.severity.into(),
            timestamp: alert.timestamp.clone(),
            message: alert.message.clone(),
            location: alert
                .location
                .as_deref()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string),
        }
    }
}

/// Everything the overview page renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub fleet: FleetSummary,
    pub alerts: AlertSummary,
    pub rows: Vec<ConvoyRow>,
    pub feed: Vec<AlertEntry>,
}

impl DashboardView {
    /// Build the overview from one snapshot of records
    pub fn build(convoys: &[Convoy], alerts: &[Alert]) -> Self {
        Self {
            fleet: FleetSummary::from_convoys(convoys),
            alerts: AlertSummary::from_alerts(alerts),
            rows: convoys.iter().map(ConvoyRow::from).collect(),
            feed: alerts.iter().map(AlertEntry::from).collect(),
        }
    }

    /// Active unit count for the command metrics card
    pub fn active_units(&self) -> usize {
        self.fleet.active_units()
    }
}
