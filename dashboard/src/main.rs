//! Convoy Dashboard - Entry Point
//!
//! Loads a convoy/alert snapshot, runs it through the dashboard core and
//! prints an operations report.

use std::collections::HashMap;
use std::env;
use std::process::ExitCode;

use convoy_dashboard::errors::DashboardError;
use convoy_dashboard::feed::DashboardSnapshot;
use convoy_dashboard::filesys::file::File;
use convoy_dashboard::logs::{init_logging, LogLevel, LogOptions};
use convoy_dashboard::map::MapQueryBuilder;
use convoy_dashboard::report::render_report;
use convoy_dashboard::selection::TrackingView;
use convoy_dashboard::settings::Settings;
use convoy_dashboard::utils::version_info;
use convoy_dashboard::view::dashboard::DashboardView;
use convoy_dashboard::view::tracking::TrackingPanel;

use tracing::{error, info, warn};

const DEFAULT_SETTINGS_FILE: &str = "dashboard.json";

#[tokio::main]
async fn main() -> ExitCode {
    // Parse command line arguments
    let mut cli_args: HashMap<String, String> = HashMap::new();
    for arg in env::args().skip(1) {
        if let Some((key, value)) = arg.split_once('=') {
            // Handle --key=value format
            let clean_key = key.trim_start_matches('-');
            cli_args.insert(clean_key.to_string(), value.to_string());
        } else if arg.starts_with("--") {
            // Handle standalone flags like --version
            let clean_key = arg.trim_start_matches('-');
            cli_args.insert(clean_key.to_string(), "true".to_string());
        }
    }

    // Print version and exit
    if cli_args.contains_key("version") {
        match serde_json::to_string_pretty(&version_info()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to encode version info: {e}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    let settings = match load_settings(cli_args.get("settings")).await {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Unable to read settings file: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging
    let mut log_options = LogOptions {
        log_level: settings.log_level,
        json_format: settings.json_logs,
    };
    if let Some(level) = cli_args.get("log-level") {
        match level.parse::<LogLevel>() {
            Ok(level) => log_options.log_level = level,
            Err(e) => eprintln!("{e}, keeping {}", settings.log_level.to_filter_string()),
        }
    }
    if let Err(e) = init_logging(log_options) {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(&cli_args, &settings).await {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to render dashboard: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn load_settings(path: Option<&String>) -> Result<Settings, DashboardError> {
    match path {
        Some(path) => Settings::load(&File::new(path)).await,
        None => {
            let file = File::new(DEFAULT_SETTINGS_FILE);
            if file.exists().await {
                Settings::load(&file).await
            } else {
                Ok(Settings::default())
            }
        }
    }
}

async fn run(
    cli_args: &HashMap<String, String>,
    settings: &Settings,
) -> Result<String, DashboardError> {
    let snapshot_path = cli_args.get("snapshot").ok_or_else(|| {
        DashboardError::ConfigError("Missing snapshot. Provide via --snapshot=<path>".to_string())
    })?;

    let snapshot = DashboardSnapshot::load(&File::new(snapshot_path)).await?;
    info!(
        "Loaded snapshot with {} convoys and {} alerts",
        snapshot.convoys.len(),
        snapshot.alerts.len()
    );

    let maps = MapQueryBuilder::new(settings.map.clone());
    let dashboard = DashboardView::build(&snapshot.convoys, &snapshot.alerts);

    let mut tracking = TrackingView::new();
    tracking.observe(snapshot.convoys);
    if let Some(convoy_id) = cli_args.get("select") {
        if let Err(e) = tracking.select(convoy_id) {
            warn!("{e}");
        }
    }
    let panel = TrackingPanel::build(&tracking, &maps);

    Ok(render_report(&dashboard, &panel, snapshot.generated_at))
}
