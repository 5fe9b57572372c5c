use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::fault_lines::{FaultLineSet, Polyline};
use crate::feed::{EarthquakeFeature, EarthquakeFeed};
use crate::geo::GeoPoint;
use crate::reader::{FeedReader, DEFAULT_SYNTHETIC_SEED};

const DEFAULT_MIN_EVENTS: usize = 40;
const DEFAULT_MAX_EVENTS: usize = 240;
const DEFAULT_BOUNDARIES: usize = 6;

/// Fixed "now" so the same seed always produces identical timestamps.
const EPOCH_ANCHOR_MS: i64 = 1_700_000_000_000;
const WEEK_MS: i64 = 7 * 24 * 60 * 60 * 1000;

const DIRECTIONS: &[&str] = &["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Generates a reproducible demo feed without any I/O.
pub struct SyntheticFeedReader {
    min_events: usize,
    max_events: usize,
    boundaries: usize,
    seed: u64,
}

impl SyntheticFeedReader {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SYNTHETIC_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            min_events: DEFAULT_MIN_EVENTS,
            max_events: DEFAULT_MAX_EVENTS,
            boundaries: DEFAULT_BOUNDARIES,
            seed,
        }
    }

    pub fn with_config(min_events: usize, max_events: usize, boundaries: usize, seed: u64) -> Self {
        Self {
            min_events,
            max_events: max_events.max(min_events),
            boundaries,
            seed,
        }
    }

    /// Builds the earthquake feed for this reader's seed.
    pub fn generate_earthquakes(&self) -> EarthquakeFeed {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let count = rng.gen_range(self.min_events..=self.max_events);

        let features = (0..count)
            .map(|i| generate_feature(&mut rng, i))
            .collect();

        EarthquakeFeed {
            title: Some(format!("Synthetic Earthquakes (seed {})", self.seed)),
            generated_ms: Some(EPOCH_ANCHOR_MS),
            features,
        }
    }

    /// Builds random-walk plate boundaries for this reader's seed.
    pub fn generate_fault_lines(&self) -> FaultLineSet {
        // Offset the seed so boundaries don't mirror the quake positions.
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(1));

        let lines = (0..self.boundaries)
            .map(|_| generate_boundary(&mut rng))
            .collect();

        FaultLineSet { lines }
    }
}

impl Default for SyntheticFeedReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedReader for SyntheticFeedReader {
    fn read_earthquakes(&self, _location: &str) -> anyhow::Result<EarthquakeFeed> {
        Ok(self.generate_earthquakes())
    }

    fn read_fault_lines(&self, _location: &str) -> anyhow::Result<FaultLineSet> {
        Ok(self.generate_fault_lines())
    }
}

fn generate_feature(rng: &mut StdRng, index: usize) -> EarthquakeFeature {
    let lat = rng.gen_range(-60.0..70.0);
    let lon = rng.gen_range(-180.0..180.0);

    // Roughly Gutenberg-Richter: small events are far more common than large ones.
    let u: f64 = rng.gen_range(f64::EPSILON..1.0);
    let magnitude = (-u.ln() * 0.9).min(8.5);
    let magnitude = (magnitude * 100.0).round() / 100.0;

    let distance_km = rng.gen_range(1..120);
    let direction = DIRECTIONS[rng.gen_range(0..DIRECTIONS.len())];

    EarthquakeFeature {
        id: Some(format!("syn{:05}", index)),
        place: format!("{}km {} of Synthetic Station {}", distance_km, direction, index % 17),
        time_ms: Some(EPOCH_ANCHOR_MS - rng.gen_range(0..WEEK_MS)),
        magnitude,
        coordinates: GeoPoint::new(lat, lon),
        depth_km: Some(rng.gen_range(0.0..700.0)),
        url: None,
    }
}

fn generate_boundary(rng: &mut StdRng) -> Polyline {
    let vertices = rng.gen_range(10..30);
    let mut lat: f64 = rng.gen_range(-60.0..60.0);
    let mut lon: f64 = rng.gen_range(-170.0..170.0);

    let mut line = Vec::with_capacity(vertices);
    for _ in 0..vertices {
        line.push(GeoPoint::new(lat, lon));
        lat = (lat + rng.gen_range(-3.0..3.0)).clamp(-85.0, 85.0);
        lon = (lon + rng.gen_range(0.5..5.0)).min(180.0);
    }
    line
}
