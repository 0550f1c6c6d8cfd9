//! Finite State Machine for convoy selection

use tracing::{info, warn};

use crate::errors::DashboardError;
use crate::models::Convoy;

/// Selection state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectionState {
    /// Nothing selected yet, only while no convoys have been observed
    #[default]
    Unselected,

    /// Convoy ID chosen for tracking
    Selected(String),
}

impl SelectionState {
    /// Stored convoy ID, if any
    pub fn convoy_id(&self) -> Option<&str> {
        match self {
            SelectionState::Unselected => None,
            SelectionState::Selected(id) => Some(id),
        }
    }
}

/// Selection event
#[derive(Debug, Clone)]
pub enum SelectionEvent {
    /// A convoy collection was observed on render
    CollectionObserved,

    /// User picked a convoy
    Select(String),
}

/// Selection FSM
#[derive(Debug, Clone, Default)]
pub struct SelectionFsm {
    state: SelectionState,
}

impl SelectionFsm {
    /// Create a new FSM in unselected state
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current state
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Process an event against the current convoy collection
    pub fn process(
        &mut self,
        event: SelectionEvent,
        convoys: &[Convoy],
    ) -> Result<(), DashboardError> {
        let new_state = match (&self.state, event) {
            // Auto-select the first convoy, once
            (SelectionState::Unselected, SelectionEvent::CollectionObserved) => {
                match convoys.first() {
                    Some(first) => {
                        info!("Auto-selecting convoy {}", first.id);
                        SelectionState::Selected(first.id.clone())
                    }
                    None => return Ok(()),
                }
            }
            (SelectionState::Selected(_), SelectionEvent::CollectionObserved) => return Ok(()),

            // Explicit selection must reference the current collection
            (_, SelectionEvent::Select(id)) => {
                if !convoys.iter().any(|c| c.id == id) {
                    warn!("Ignoring selection of unknown convoy {}", id);
                    return Err(DashboardError::SelectionReferenceMissing(id));
                }
                info!("Convoy {} selected", id);
                SelectionState::Selected(id)
            }
        };

        self.state = new_state;
        Ok(())
    }
}
