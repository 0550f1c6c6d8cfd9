//! Convoy Dashboard Library
//!
//! Selection view-model, fleet aggregates and map embed queries for the
//! convoy operations dashboard.

pub mod aggregate;
pub mod errors;
pub mod feed;
pub mod filesys;
pub mod location;
pub mod logs;
pub mod map;
pub mod models;
pub mod report;
pub mod selection;
pub mod settings;
pub mod utils;
pub mod view;
