//! Convoy selection module

pub mod fsm;
pub mod tracking;

pub use fsm::{SelectionEvent, SelectionFsm, SelectionState};
pub use tracking::TrackingView;
