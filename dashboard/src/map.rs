//! Map embed query construction
//!
//! Builds the iframe source for the live tracking map. Nothing here issues a
//! request; the URL is handed to whatever renders the embed.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::errors::DashboardError;
use crate::location::{canonical_location, is_degraded};
use crate::models::Convoy;

/// Characters left alone by `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Map embed settings
///
/// Only the host is configurable. The display parameters are fixed because
/// the embedding consumer depends on them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapEmbedSettings {
    /// Map service host
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_host() -> String {
    "maps.google.com".to_string()
}

impl Default for MapEmbedSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
        }
    }
}

impl MapEmbedSettings {
    /// Check that the host can stand in the authority position of a URL
    pub fn validate(&self) -> Result<(), DashboardError> {
        let url = Url::parse(&format!("https://{}/maps", self.host))
            .map_err(|e| DashboardError::ConfigError(format!("invalid map host {:?}: {}", self.host, e)))?;

        // Reject hosts that smuggle a path, port or credentials
        if url.host_str() != Some(self.host.as_str()) {
            return Err(DashboardError::ConfigError(format!(
                "invalid map host {:?}",
                self.host
            )));
        }
        Ok(())
    }
}

/// Builds map embed URLs for convoy routes
#[derive(Debug, Clone, Default)]
pub struct MapQueryBuilder {
    settings: MapEmbedSettings,
}

impl MapQueryBuilder {
    pub fn new(settings: MapEmbedSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &MapEmbedSettings {
        &self.settings
    }

    /// Build the embed URL for a route between two free-text locations.
    ///
    /// Empty or malformed locations degrade to an empty query term; the URL
    /// stays well-formed.
    pub fn build(&self, start_location: &str, destination: &str) -> String {
        let start = canonical_location(start_location);
        let end = canonical_location(destination);

        if is_degraded(start) || is_degraded(end) {
            debug!(
                "Degraded map query: start={:?} destination={:?}",
                start_location, destination
            );
        }

        format!(
            "https://{}/maps?q={}+to+{}&t=&z=10&ie=UTF8&iwloc=&output=embed",
            self.settings.host,
            encode_component(start),
            encode_component(end),
        )
    }

    /// Build the embed URL for a convoy's route
    pub fn for_convoy(&self, convoy: &Convoy) -> String {
        self.build(&convoy.start_location, &convoy.destination)
    }
}

/// Build an embed URL with the default map settings
pub fn build_map_query(start_location: &str, destination: &str) -> String {
    MapQueryBuilder::default().build(start_location, destination)
}

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}
