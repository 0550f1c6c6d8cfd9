//! Selection view-model tests

use convoy_dashboard::errors::DashboardError;
use convoy_dashboard::map::MapQueryBuilder;
use convoy_dashboard::models::{Convoy, ConvoyStatus, Priority};
use convoy_dashboard::selection::{SelectionState, TrackingView};
use convoy_dashboard::view::tracking::TrackingPanel;

fn create_test_convoy(id: &str) -> Convoy {
    Convoy {
        id: id.to_string(),
        name: format!("Convoy {}", id),
        status: ConvoyStatus::Moving,
        progress: 25.0,
        eta: "12:00".to_string(),
        priority: Priority::Normal,
        start_location: format!("Origin {} (10.0,20.0)", id),
        destination: format!("Target {} (11.0,21.0)", id),
        vehicle_count: 4,
    }
}

fn collection(ids: &[&str]) -> Vec<Convoy> {
    ids.iter().map(|id| create_test_convoy(id)).collect()
}

#[test]
fn test_initial_state() {
    let view = TrackingView::new();
    assert_eq!(view.state(), &SelectionState::Unselected);
    assert!(view.current().is_none());
}

#[test]
fn test_empty_collection_stays_unselected() {
    let mut view = TrackingView::new();
    view.observe(vec![]);
    assert_eq!(view.state(), &SelectionState::Unselected);
    assert!(view.current().is_none());

    let panel = TrackingPanel::build(&view, &MapQueryBuilder::default());
    assert_eq!(panel, TrackingPanel::Empty);
}

#[test]
fn test_auto_select_first() {
    let mut view = TrackingView::new();
    view.observe(collection(&["c1", "c2", "c3"]));

    assert_eq!(view.state(), &SelectionState::Selected("c1".to_string()));
    assert_eq!(view.current().map(|c| c.id.as_str()), Some("c1"));
}

#[test]
fn test_auto_select_does_not_refire() {
    let mut view = TrackingView::new();
    view.observe(collection(&["c1", "c2", "c3"]));
    view.observe(collection(&["c9", "c1"]));

    assert_eq!(view.state(), &SelectionState::Selected("c1".to_string()));
    assert_eq!(view.current().map(|c| c.id.as_str()), Some("c1"));
}

#[test]
fn test_auto_select_after_empty_refresh() {
    let mut view = TrackingView::new();
    view.observe(vec![]);
    view.observe(collection(&["c4", "c5"]));

    assert_eq!(view.state(), &SelectionState::Selected("c4".to_string()));
}

#[test]
fn test_explicit_selection() {
    let mut view = TrackingView::new();
    view.observe(collection(&["c1", "c2", "c3"]));

    view.select("c2").unwrap();
    assert_eq!(view.state(), &SelectionState::Selected("c2".to_string()));
    assert_eq!(view.current().map(|c| c.id.as_str()), Some("c2"));
    assert!(view.is_current("c2"));
    assert!(!view.is_current("c1"));
}

#[test]
fn test_selection_persists_across_refresh() {
    let mut view = TrackingView::new();
    view.observe(collection(&["c1", "c2", "c3"]));
    view.select("c3").unwrap();

    view.observe(collection(&["c1", "c2", "c3"]));
    assert_eq!(view.current().map(|c| c.id.as_str()), Some("c3"));
}

#[test]
fn test_removed_selection_falls_back_without_transition() {
    let mut view = TrackingView::new();
    view.observe(collection(&["c1", "c2", "c3"]));
    view.select("c2").unwrap();

    view.observe(collection(&["c1", "c3"]));
    assert_eq!(view.current().map(|c| c.id.as_str()), Some("c1"));
    assert_eq!(view.state(), &SelectionState::Selected("c2".to_string()));

    // c2 comes back and is current again
    view.observe(collection(&["c1", "c2", "c3"]));
    assert_eq!(view.current().map(|c| c.id.as_str()), Some("c2"));
}

#[test]
fn test_removed_selection_then_new_selection() {
    let mut view = TrackingView::new();
    view.observe(collection(&["c1", "c2", "c3"]));
    view.select("c2").unwrap();
    view.observe(collection(&["c1", "c3"]));

    view.select("c3").unwrap();
    assert_eq!(view.state(), &SelectionState::Selected("c3".to_string()));
    assert_eq!(view.current().map(|c| c.id.as_str()), Some("c3"));
}

#[test]
fn test_select_unknown_convoy() {
    let mut view = TrackingView::new();
    view.observe(collection(&["c1", "c2"]));

    let result = view.select("c7");
    assert!(matches!(result, Err(DashboardError::SelectionReferenceMissing(_))));
    assert_eq!(view.state(), &SelectionState::Selected("c1".to_string()));
}

#[test]
fn test_select_with_empty_collection() {
    let mut view = TrackingView::new();
    assert!(view.select("c1").is_err());
    assert_eq!(view.state(), &SelectionState::Unselected);
}

#[test]
fn test_tracking_panel_marks_current() {
    let mut view = TrackingView::new();
    view.observe(collection(&["c1", "c2"]));
    view.select("c2").unwrap();

    match TrackingPanel::build(&view, &MapQueryBuilder::default()) {
        TrackingPanel::Active { units, telemetry } => {
            let selected: Vec<&str> = units
                .iter()
                .filter(|u| u.selected)
                .map(|u| u.id.as_str())
                .collect();
            assert_eq!(selected, vec!["c2"]);
            assert_eq!(units[0].route, "10.0,20.0 → 11.0,21.0");
            assert_eq!(telemetry.convoy_id, "c2");
            assert!(!telemetry.delayed);
            assert!(!telemetry.map_degraded);
        }
        TrackingPanel::Empty => panic!("expected an active panel"),
    }
}

#[test]
fn test_tracking_panel_marks_fallback_convoy() {
    let mut view = TrackingView::new();
    view.observe(collection(&["c1", "c2", "c3"]));
    view.select("c2").unwrap();
    view.observe(collection(&["c1", "c3"]));

    match TrackingPanel::build(&view, &MapQueryBuilder::default()) {
        TrackingPanel::Active { units, telemetry } => {
            let selected: Vec<&str> = units
                .iter()
                .filter(|u| u.selected)
                .map(|u| u.id.as_str())
                .collect();
            assert_eq!(selected, vec!["c1"]);
            assert_eq!(telemetry.convoy_id, "c1");
            assert!(units.iter().all(|u| u.selected == view.is_current(&u.id)));
        }
        TrackingPanel::Empty => panic!("expected an active panel"),
    }
    assert_eq!(view.state(), &SelectionState::Selected("c2".to_string()));
}
