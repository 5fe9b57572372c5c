//! Error types for feed acquisition and configuration.

use thiserror::Error;

/// Errors produced while fetching or decoding a GeoJSON feed.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("not a GeoJSON feature collection: {reason}")]
    NotFeatureCollection { reason: String },
}

/// Errors produced while reading configuration values.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

/// Result alias for feed operations.
pub type Result<T> = std::result::Result<T, FeedError>;
