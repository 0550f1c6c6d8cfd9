//! Plain-text operations report
//!
//! Terminal rendering of the dashboard and tracking views for the CLI.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};

use crate::view::dashboard::DashboardView;
use crate::view::tracking::TrackingPanel;
use crate::view::Tone;

fn paint(text: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Positive => text.green(),
        Tone::Caution => text.yellow(),
        Tone::Critical => text.red(),
        Tone::Informational => text.blue(),
    }
}

/// Render both views into one report
pub fn render_report(
    dashboard: &DashboardView,
    tracking: &TrackingPanel,
    generated_at: Option<DateTime<Utc>>,
) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_report(&mut out, dashboard, tracking, generated_at);
    out
}

fn write_report(
    out: &mut String,
    dashboard: &DashboardView,
    tracking: &TrackingPanel,
    generated_at: Option<DateTime<Utc>>,
) -> std::fmt::Result {
    writeln!(out, "{}", "COMMAND METRICS".bold())?;
    if let Some(at) = generated_at {
        writeln!(out, "  Snapshot:      {}", at.format("%Y-%m-%d %H:%M:%S UTC"))?;
    }
    let fleet = &dashboard.fleet;
    writeln!(out, "  Active units:  {}", dashboard.active_units())?;
    writeln!(
        out,
        "  Fleet:         {} total, {} delayed, {} idle, {} high priority",
        fleet.total, fleet.delayed, fleet.idle, fleet.high_priority
    )?;
    writeln!(
        out,
        "  Vehicles:      {} ({} in motion)",
        fleet.vehicles, fleet.vehicles_in_motion
    )?;
    if let Some(mean) = fleet.mean_progress {
        writeln!(out, "  Mean progress: {:.1}%", mean)?;
    }
    writeln!(out)?;

    writeln!(out, "{}", "INTEL FEED".bold())?;
    if dashboard.feed.is_empty() {
        writeln!(out, "  No alerts.")?;
    }
    for entry in &dashboard.feed {
        writeln!(
            out,
            "  [{}] {} {}",
            paint(entry.severity.as_str(), entry.tone),
            entry.timestamp,
            entry.message
        )?;
        if let Some(location) = &entry.location {
            writeln!(out, "      LOC: {}", location)?;
        }
    }
    writeln!(out)?;

    writeln!(out, "{}", "ACTIVE CONVOYS STATUS".bold())?;
    for row in &dashboard.rows {
        let priority = format!("[{}]", row.priority);
        writeln!(
            out,
            "  {:<8} {:<24} {:<8} {:>6} {:<8} {}",
            row.id,
            row.name,
            paint(row.status.as_str(), row.tone),
            row.progress.width(),
            row.eta,
            if row.emphasized {
                priority.red()
            } else {
                priority.normal()
            }
        )?;
    }
    writeln!(out)?;

    writeln!(out, "{}", "LIVE TRACKING".bold())?;
    match tracking {
        TrackingPanel::Empty => writeln!(out, "  No active convoys to track.")?,
        TrackingPanel::Active { units, telemetry } => {
            for unit in units {
                let marker = if unit.selected { ">" } else { " " };
                writeln!(
                    out,
                    "  {} {:<8} {} {}",
                    marker,
                    unit.id,
                    paint(unit.status.as_str(), unit.tone),
                    unit.route
                )?;
            }
            writeln!(out, "  Unit telemetry: {}", telemetry.convoy_id)?;
            writeln!(out, "    Vehicles: {}", telemetry.vehicles)?;
            writeln!(out, "    ETA:      {}", telemetry.eta)?;
            if telemetry.delayed {
                writeln!(out, "    {}", "UNIT DELAYED".red().bold())?;
            }
            if telemetry.map_degraded {
                writeln!(out, "    Map:      no map data")?;
            } else {
                writeln!(out, "    Map:      {}", telemetry.map_src)?;
            }
        }
    }

    Ok(())
}
