//! Runtime configuration.
//!
//! All configuration is read from environment variables. Nothing here is required: the
//! viewer runs against the public USGS and plate boundary feeds with keyless base maps
//! when no variable is set.

use std::time::Duration;

use crate::error::ConfigError;
use crate::geo::GeoPoint;
use crate::reader::FeedLocation;

/// USGS summary feed, all magnitudes, past seven days.
pub const DEFAULT_EARTHQUAKE_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";

/// PB2002 plate boundaries.
pub const DEFAULT_FAULT_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_plates.json";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Initial map centre (contiguous United States).
pub const DEFAULT_CENTER: GeoPoint = GeoPoint::new(37.09, -95.71);
pub const DEFAULT_ZOOM: f64 = 4.0;

pub const EARTHQUAKE_URL_VAR: &str = "QUAKEMAP_EARTHQUAKE_URL";
pub const FAULT_URL_VAR: &str = "QUAKEMAP_FAULT_URL";
pub const ACCESS_TOKEN_VAR: &str = "MAPBOX_ACCESS_TOKEN";
pub const TIMEOUT_VAR: &str = "QUAKEMAP_TIMEOUT_SECS";

/// Complete viewer configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub earthquake_source: FeedLocation,
    pub fault_source: FeedLocation,
    /// Tile provider credential. `None` selects keyless base maps.
    pub access_token: Option<String>,
    /// Per-request HTTP timeout.
    pub request_timeout: Duration,
    pub center: GeoPoint,
    pub zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            earthquake_source: FeedLocation::Url(DEFAULT_EARTHQUAKE_URL.to_string()),
            fault_source: FeedLocation::Url(DEFAULT_FAULT_URL.to_string()),
            access_token: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl MapConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `QUAKEMAP_EARTHQUAKE_URL` -- earthquake feed URL or file path
    /// - `QUAKEMAP_FAULT_URL` -- plate boundary feed URL or file path
    /// - `MAPBOX_ACCESS_TOKEN` -- tile provider credential
    /// - `QUAKEMAP_TIMEOUT_SECS` -- HTTP timeout in seconds (default 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(source) = non_empty(EARTHQUAKE_URL_VAR) {
            config.earthquake_source = FeedLocation::parse(&source);
        }
        if let Some(source) = non_empty(FAULT_URL_VAR) {
            config.fault_source = FeedLocation::parse(&source);
        }

        config.access_token = non_empty(ACCESS_TOKEN_VAR);

        if let Some(raw) = non_empty(TIMEOUT_VAR) {
            let secs: u64 = raw.trim().parse().map_err(|e| ConfigError::Invalid {
                key: TIMEOUT_VAR.to_string(),
                reason: format!("{e}"),
            })?;
            if secs == 0 {
                return Err(ConfigError::Invalid {
                    key: TIMEOUT_VAR.to_string(),
                    reason: "timeout must be at least one second".to_string(),
                });
            }
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Replaces the earthquake feed, e.g. from a command-line argument.
    pub fn with_earthquake_source(mut self, source: FeedLocation) -> Self {
        self.earthquake_source = source;
        self
    }
}
