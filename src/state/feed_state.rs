//! Loaded feed bookkeeping.
//!
//! The decoded data itself lives in the [`MapComposer`](quakemap::MapComposer); this
//! keeps what the status bar and header report about it.

use chrono::{DateTime, Utc};
use quakemap::{EarthquakeFeed, FeedLocation};

/// Where the current feeds came from and what the earthquake feed contained.
#[derive(Debug, Clone, Default)]
pub struct FeedState {
    /// Source of the loaded earthquake feed
    earthquake_source: Option<FeedLocation>,
    /// Source of the loaded fault-line feed
    fault_source: Option<FeedLocation>,
    /// Feed title from the GeoJSON metadata block
    title: Option<String>,
    /// Number of events in the feed, drawable or not
    event_count: usize,
    largest_magnitude: Option<f64>,
    /// Wall-clock time the earthquake feed finished loading
    loaded_at: Option<DateTime<Utc>>,
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a freshly loaded earthquake feed.
    pub fn earthquakes_loaded(&mut self, feed: &EarthquakeFeed, source: FeedLocation) {
        self.earthquake_source = Some(source);
        self.title = feed.title.clone();
        self.event_count = feed.len();
        self.largest_magnitude = feed.largest_magnitude();
        self.loaded_at = Some(Utc::now());
    }

    pub fn fault_lines_loaded(&mut self, source: FeedLocation) {
        self.fault_source = Some(source);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn earthquake_source(&self) -> Option<&FeedLocation> {
        self.earthquake_source.as_ref()
    }

    pub fn fault_source(&self) -> Option<&FeedLocation> {
        self.fault_source.as_ref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn event_count(&self) -> usize {
        self.event_count
    }

    pub fn largest_magnitude(&self) -> Option<f64> {
        self.largest_magnitude
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quakemap::{EarthquakeFeature, GeoPoint};

    #[test]
    fn test_earthquakes_loaded_records_summary() {
        let feed = EarthquakeFeed {
            title: Some("USGS All Earthquakes, Past Week".to_string()),
            generated_ms: None,
            features: [1.2, 4.8, 3.0]
                .iter()
                .map(|&magnitude| EarthquakeFeature {
                    id: None,
                    place: String::new(),
                    time_ms: None,
                    magnitude,
                    coordinates: GeoPoint::new(0.0, 0.0),
                    depth_km: None,
                    url: None,
                })
                .collect(),
        };

        let mut state = FeedState::new();
        state.earthquakes_loaded(&feed, FeedLocation::Synthetic { seed: 1 });

        assert_eq!(state.event_count(), 3);
        assert_eq!(state.largest_magnitude(), Some(4.8));
        assert_eq!(state.title(), Some("USGS All Earthquakes, Past Week"));
        assert!(state.loaded_at().is_some());
        assert!(state.fault_source().is_none());

        state.clear();
        assert!(state.earthquake_source().is_none());
        assert_eq!(state.event_count(), 0);
    }
}
