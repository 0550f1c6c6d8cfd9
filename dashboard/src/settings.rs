//! Settings file management

use serde::{Deserialize, Serialize};

use crate::errors::DashboardError;
use crate::filesys::file::File;
use crate::logs::LogLevel;
use crate::map::MapEmbedSettings;

/// Dashboard settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Emit JSON log lines
    #[serde(default)]
    pub json_logs: bool,

    /// Map embed configuration
    #[serde(default)]
    pub map: MapEmbedSettings,
}

impl Settings {
    /// Read settings from a JSON file and validate them
    pub async fn load(file: &File) -> Result<Self, DashboardError> {
        let settings: Settings = file.read_json().await?;
        settings.map.validate()?;
        Ok(settings)
    }
}
