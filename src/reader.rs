//! Feed readers.
//!
//! A feed can come from an HTTP endpoint, a local GeoJSON file (optionally Brotli
//! compressed, `.br`) or the synthetic generator. [`FeedLocation`] names where a feed
//! lives and picks the matching [`FeedReader`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use brotli::Decompressor;
use reqwest::blocking::Client;

use crate::error::FeedError;
use crate::fault_lines::FaultLineSet;
use crate::feed::EarthquakeFeed;
use crate::synthetic::SyntheticFeedReader;

/// Reads the two feeds the map needs.
pub trait FeedReader: Send {
    /// Fetches and decodes an earthquake feed.
    fn read_earthquakes(&self, location: &str) -> Result<EarthquakeFeed>;

    /// Fetches and decodes a plate boundary feed.
    fn read_fault_lines(&self, location: &str) -> Result<FaultLineSet>;
}

/// Where a feed is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedLocation {
    Url(String),
    File(PathBuf),
    /// Seeded demo data, no I/O.
    Synthetic { seed: u64 },
}

/// Seed used when the synthetic feed is requested by name.
pub const DEFAULT_SYNTHETIC_SEED: u64 = 42;

impl FeedLocation {
    /// Interprets user input: `http(s)://` is a URL, `synthetic` selects demo data,
    /// anything else is a file path.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.starts_with("http://") || input.starts_with("https://") {
            FeedLocation::Url(input.to_string())
        } else if input.eq_ignore_ascii_case("synthetic") {
            FeedLocation::Synthetic {
                seed: DEFAULT_SYNTHETIC_SEED,
            }
        } else {
            FeedLocation::File(PathBuf::from(input))
        }
    }

    /// Human readable description used in logs and the status bar.
    pub fn describe(&self) -> String {
        match self {
            FeedLocation::Url(url) => url.clone(),
            FeedLocation::File(path) => path.display().to_string(),
            FeedLocation::Synthetic { seed } => format!("synthetic (seed {})", seed),
        }
    }

    /// Builds the reader able to serve this location.
    pub fn reader(&self, request_timeout: Duration) -> Result<Box<dyn FeedReader>> {
        let reader: Box<dyn FeedReader> = match self {
            FeedLocation::Url(_) => Box::new(HttpFeedReader::new(request_timeout)?),
            FeedLocation::File(_) => Box::new(FileFeedReader::new()),
            FeedLocation::Synthetic { seed } => Box::new(SyntheticFeedReader::with_seed(*seed)),
        };
        Ok(reader)
    }

    /// The string handed to [`FeedReader`] methods.
    pub fn target(&self) -> String {
        match self {
            FeedLocation::Url(url) => url.clone(),
            FeedLocation::File(path) => path.display().to_string(),
            FeedLocation::Synthetic { .. } => String::new(),
        }
    }
}

/// Reads feeds over HTTP with a blocking client.
pub struct HttpFeedReader {
    client: Client,
}

impl HttpFeedReader {
    pub fn new(request_timeout: Duration) -> std::result::Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(request_timeout)
            .user_agent(concat!("quakemap/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    fn fetch_text(&self, url: &str) -> std::result::Result<String, FeedError> {
        tracing::info!(url, "fetching feed");
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text()?;
        tracing::debug!(url, bytes = body.len(), "feed downloaded");
        Ok(body)
    }
}

impl FeedReader for HttpFeedReader {
    fn read_earthquakes(&self, location: &str) -> Result<EarthquakeFeed> {
        let body = self.fetch_text(location)?;
        EarthquakeFeed::from_geojson_str(&body)
            .with_context(|| format!("Failed to decode earthquake feed from {}", location))
    }

    fn read_fault_lines(&self, location: &str) -> Result<FaultLineSet> {
        let body = self.fetch_text(location)?;
        FaultLineSet::from_geojson_str(&body)
            .with_context(|| format!("Failed to decode fault line feed from {}", location))
    }
}

/// Reads feeds from disk. Files ending in `.br` are Brotli-decompressed.
#[derive(Default)]
pub struct FileFeedReader;

impl FileFeedReader {
    pub fn new() -> Self {
        Self
    }

    fn open(path: &str) -> Result<Box<dyn Read>> {
        let file = File::open(path).with_context(|| format!("Failed to open file: {}", path))?;

        let reader: Box<dyn Read> = if Path::new(path).extension().is_some_and(|ext| ext == "br") {
            Box::new(Decompressor::new(file, 4096))
        } else {
            Box::new(BufReader::new(file))
        };
        Ok(reader)
    }
}

impl FeedReader for FileFeedReader {
    fn read_earthquakes(&self, location: &str) -> Result<EarthquakeFeed> {
        tracing::info!(path = location, "reading earthquake feed from file");
        let reader = Self::open(location)?;
        EarthquakeFeed::from_reader(reader)
            .with_context(|| format!("Failed to decode earthquake feed: {}", location))
    }

    fn read_fault_lines(&self, location: &str) -> Result<FaultLineSet> {
        tracing::info!(path = location, "reading fault line feed from file");
        let reader = Self::open(location)?;
        FaultLineSet::from_reader(reader)
            .with_context(|| format!("Failed to decode fault line feed: {}", location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_location() {
        assert_eq!(
            FeedLocation::parse("https://example.com/a.geojson"),
            FeedLocation::Url("https://example.com/a.geojson".to_string())
        );
        assert_eq!(FeedLocation::parse(" http://x "), FeedLocation::Url("http://x".to_string()));
        assert_eq!(
            FeedLocation::parse("Synthetic"),
            FeedLocation::Synthetic { seed: DEFAULT_SYNTHETIC_SEED }
        );
        assert_eq!(FeedLocation::parse("data/week.geojson"), FeedLocation::File("data/week.geojson".into()));
    }

    #[test]
    fn test_describe() {
        assert_eq!(FeedLocation::Synthetic { seed: 3 }.describe(), "synthetic (seed 3)");
        assert_eq!(FeedLocation::Url("u".to_string()).describe(), "u");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let reader = FileFeedReader::new();
        let err = reader.read_earthquakes("/definitely/not/here.geojson").unwrap_err();
        assert!(err.to_string().contains("Failed to open file"));
    }

    #[test]
    fn test_synthetic_location_reader() {
        let location = FeedLocation::Synthetic { seed: 1 };
        let reader = location.reader(Duration::from_secs(1)).unwrap();
        let feed = reader.read_earthquakes(&location.target()).unwrap();
        assert!(!feed.is_empty());
    }
}
