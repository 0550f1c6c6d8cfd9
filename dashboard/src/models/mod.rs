//! Dashboard record models

pub mod alert;
pub mod convoy;

pub use alert::{Alert, Severity};
pub use convoy::{clamp_progress, Convoy, ConvoyStatus, Priority};
