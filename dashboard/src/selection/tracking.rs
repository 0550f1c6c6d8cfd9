//! Tracking view selection model
//!
//! Owns the selection for one tracking view together with the latest convoy
//! snapshot it was rendered from.

use tracing::{debug, warn};

use crate::errors::DashboardError;
use crate::models::Convoy;
use crate::selection::fsm::{SelectionEvent, SelectionFsm, SelectionState};

/// Selection state plus the convoy collection it refers to
#[derive(Debug, Clone, Default)]
pub struct TrackingView {
    fsm: SelectionFsm,
    convoys: Vec<Convoy>,
}

impl TrackingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the convoy collection, as on a data refresh.
    ///
    /// The first non-empty collection auto-selects its first convoy. Later
    /// collections never change the stored selection.
    pub fn observe(&mut self, convoys: Vec<Convoy>) {
        debug!("Tracking view observed {} convoys", convoys.len());
        self.convoys = convoys;
        // Auto-select cannot fail
        let _ = self
            .fsm
            .process(SelectionEvent::CollectionObserved, &self.convoys);

        if let Some(id) = self.fsm.state().convoy_id() {
            if !self.convoys.iter().any(|c| c.id == id) {
                warn!("Selected convoy {} missing from refresh, tracking first convoy", id);
            }
        }
    }

    /// Select a convoy by ID from the current collection
    pub fn select(&mut self, convoy_id: &str) -> Result<(), DashboardError> {
        self.fsm
            .process(SelectionEvent::Select(convoy_id.to_string()), &self.convoys)
    }

    /// Convoy to show in the map and telemetry cards.
    ///
    /// Falls back to the first convoy when the stored ID is gone from the
    /// collection. The stored state is left as-is. `None` only for an empty
    /// collection.
    pub fn current(&self) -> Option<&Convoy> {
        if let Some(id) = self.fsm.state().convoy_id() {
            if let Some(convoy) = self.convoys.iter().find(|c| c.id == id) {
                return Some(convoy);
            }
            debug!("Selected convoy {} no longer present, showing first", id);
        }
        self.convoys.first()
    }

    /// Whether the list entry for `convoy_id` should be highlighted
    pub fn is_current(&self, convoy_id: &str) -> bool {
        self.current().is_some_and(|c| c.id == convoy_id)
    }

    pub fn state(&self) -> &SelectionState {
        self.fsm.state()
    }

    pub fn convoys(&self) -> &[Convoy] {
        &self.convoys
    }
}
