//! Live tracking view

use serde::Serialize;

use crate::location::{canonical_location, is_degraded, route_label};
use crate::map::MapQueryBuilder;
use crate::models::{Convoy, ConvoyStatus};
use crate::selection::TrackingView;
use crate::view::Tone;

/// Entry in the "select tracking unit" list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitListEntry {
    pub id: String,
    pub name: String,
    pub status: ConvoyStatus,
    pub tone: Tone,
    pub route: String,
    pub selected: bool,
}

/// Telemetry card and map embed for the current convoy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TelemetryCard {
    pub convoy_id: String,
    pub vehicles: u32,
    pub eta: String,
    /// Show the "unit delayed" notice
    pub delayed: bool,
    pub map_src: String,
    /// Either end of the route had no usable location
    pub map_degraded: bool,
}

impl TelemetryCard {
    pub fn new(convoy: &Convoy, maps: &MapQueryBuilder) -> Self {
        Self {
            convoy_id: convoy.id.clone(),
            vehicles: convoy.vehicle_count,
            eta: convoy.eta.clone(),
            delayed: convoy.status == ConvoyStatus::Delayed,
            map_src: maps.for_convoy(convoy),
            map_degraded: is_degraded(canonical_location(&convoy.start_location))
                || is_degraded(canonical_location(&convoy.destination)),
        }
    }
}

/// What the tracking page renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrackingPanel {
    /// No convoys to track
    Empty,

    Active {
        units: Vec<UnitListEntry>,
        telemetry: TelemetryCard,
    },
}

impl TrackingPanel {
    pub fn build(view: &TrackingView, maps: &MapQueryBuilder) -> Self {
        let Some(current) = view.current() else {
            return TrackingPanel::Empty;
        };

        let units = view
            .convoys()
            .iter()
            .map(|c| UnitListEntry {
                id: c.id.clone(),
                name: c.name.clone(),
                status: c.status,
                tone: c.status.into(),
                route: route_label(&c.start_location, &c.destination),
                selected: view.is_current(&c.id),
            })
            .collect();

        TrackingPanel::Active {
            units,
            telemetry: TelemetryCard::new(current, maps),
        }
    }
}
