//! Earthquake feed model and GeoJSON decoding.
//!
//! The feed is a GeoJSON `FeatureCollection` in the USGS summary format. Each feature
//! carries `properties.place`, `properties.time` (epoch milliseconds), `properties.mag`
//! and a point geometry `[lon, lat, depth]`.
//!
//! Decoding is lenient in the same places the web map was: a `null` magnitude becomes
//! `0.0`, a missing place becomes an empty string, and features without a point geometry
//! are dropped rather than failing the whole feed.

use std::io::Read;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{FeedError, Result};
use crate::geo::GeoPoint;

/// A single earthquake record from the feed.
#[derive(Debug, Clone, PartialEq)]
pub struct EarthquakeFeature {
    pub id: Option<String>,
    pub place: String,
    /// Event time in milliseconds since the Unix epoch.
    pub time_ms: Option<i64>,
    pub magnitude: f64,
    pub coordinates: GeoPoint,
    pub depth_km: Option<f64>,
    /// Event detail page, when the feed provides one.
    pub url: Option<String>,
}

/// A decoded earthquake feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EarthquakeFeed {
    pub title: Option<String>,
    pub generated_ms: Option<i64>,
    pub features: Vec<EarthquakeFeature>,
}

#[derive(Deserialize)]
struct RawCollection {
    #[serde(rename = "type")]
    kind: Option<String>,
    metadata: Option<RawMetadata>,
    features: Option<Vec<RawFeature>>,
}

#[derive(Deserialize)]
struct RawMetadata {
    title: Option<String>,
    generated: Option<f64>,
}

#[derive(Deserialize)]
struct RawFeature {
    id: Option<Value>,
    properties: Option<RawProperties>,
    geometry: Option<RawGeometry>,
}

#[derive(Deserialize, Default)]
struct RawProperties {
    mag: Option<f64>,
    place: Option<String>,
    time: Option<f64>,
    url: Option<String>,
}

#[derive(Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Value,
}

impl EarthquakeFeed {
    /// Decodes a feed from GeoJSON text.
    pub fn from_geojson_str(text: &str) -> Result<Self> {
        let raw: RawCollection = serde_json::from_str(text)?;
        Self::from_raw(raw)
    }

    /// Decodes a feed from any reader producing GeoJSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: RawCollection = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawCollection) -> Result<Self> {
        if let Some(kind) = raw.kind.as_deref() {
            if kind != "FeatureCollection" {
                return Err(FeedError::NotFeatureCollection {
                    reason: format!("top-level type is {}", kind),
                });
            }
        }

        let raw_features = raw.features.ok_or_else(|| FeedError::NotFeatureCollection {
            reason: "missing features array".to_string(),
        })?;

        let total = raw_features.len();
        let features: Vec<EarthquakeFeature> = raw_features
            .into_iter()
            .filter_map(EarthquakeFeature::from_raw)
            .collect();

        let skipped = total - features.len();
        if skipped > 0 {
            tracing::debug!(skipped, "dropped features without point geometry");
        }

        let (title, generated_ms) = match raw.metadata {
            Some(meta) => (meta.title, meta.generated.map(|g| g as i64)),
            None => (None, None),
        };

        Ok(Self {
            title,
            generated_ms,
            features,
        })
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Largest magnitude in the feed, ignoring NaN values.
    pub fn largest_magnitude(&self) -> Option<f64> {
        self.features
            .iter()
            .map(|f| f.magnitude)
            .filter(|m| !m.is_nan())
            .fold(None, |acc, m| Some(acc.map_or(m, |a: f64| a.max(m))))
    }

    /// Encodes the feed back into a GeoJSON `FeatureCollection`.
    pub fn to_geojson(&self) -> Value {
        let features: Vec<Value> = self.features.iter().map(EarthquakeFeature::to_geojson).collect();

        let mut metadata = serde_json::Map::new();
        if let Some(title) = &self.title {
            metadata.insert("title".to_string(), json!(title));
        }
        if let Some(generated) = self.generated_ms {
            metadata.insert("generated".to_string(), json!(generated));
        }
        metadata.insert("count".to_string(), json!(self.features.len()));

        json!({
            "type": "FeatureCollection",
            "metadata": metadata,
            "features": features,
        })
    }
}

impl EarthquakeFeature {
    fn from_raw(raw: RawFeature) -> Option<Self> {
        let geometry = raw.geometry?;
        if geometry.kind != "Point" {
            return None;
        }

        let coordinates = GeoPoint::from_position(&geometry.coordinates)?;
        let depth_km = geometry.coordinates.get(2).and_then(Value::as_f64);

        let props = raw.properties.unwrap_or_default();
        let id = raw.id.map(|id| match id {
            Value::String(s) => s,
            other => other.to_string(),
        });

        Some(Self {
            id,
            place: props.place.unwrap_or_default(),
            time_ms: props.time.map(|t| t as i64),
            magnitude: props.mag.unwrap_or(0.0),
            coordinates,
            depth_km,
            url: props.url,
        })
    }

    pub fn to_geojson(&self) -> Value {
        let mut position = vec![json!(self.coordinates.lon), json!(self.coordinates.lat)];
        if let Some(depth) = self.depth_km {
            position.push(json!(depth));
        }

        json!({
            "type": "Feature",
            "id": self.id,
            "properties": {
                "mag": self.magnitude,
                "place": self.place,
                "time": self.time_ms,
                "url": self.url,
            },
            "geometry": {
                "type": "Point",
                "coordinates": position,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "metadata": {"generated": 1700000000000, "title": "USGS All Earthquakes, Past Week", "count": 3},
        "features": [
            {
                "type": "Feature",
                "properties": {"mag": 2.5, "place": "10km NE of Somewhere, CA", "time": 1699990000000,
                               "url": "https://earthquake.usgs.gov/earthquakes/eventpage/ci1"},
                "geometry": {"type": "Point", "coordinates": [-117.5, 34.1, 7.2]},
                "id": "ci1"
            },
            {
                "type": "Feature",
                "properties": {"mag": null, "place": null, "time": 1699980000000},
                "geometry": {"type": "Point", "coordinates": [-150.0, 61.0]},
                "id": "ak2"
            },
            {
                "type": "Feature",
                "properties": {"mag": 4.0, "place": "nowhere", "time": 1699970000000},
                "geometry": null,
                "id": "xx3"
            }
        ]
    }"#;

    #[test]
    fn test_decode_sample_feed() {
        let feed = EarthquakeFeed::from_geojson_str(SAMPLE).unwrap();
        assert_eq!(feed.title.as_deref(), Some("USGS All Earthquakes, Past Week"));
        assert_eq!(feed.generated_ms, Some(1_700_000_000_000));
        assert_eq!(feed.len(), 2);

        let first = &feed.features[0];
        assert_eq!(first.id.as_deref(), Some("ci1"));
        assert_eq!(first.place, "10km NE of Somewhere, CA");
        assert_eq!(first.time_ms, Some(1_699_990_000_000));
        assert_eq!(first.magnitude, 2.5);
        assert_eq!(first.coordinates, GeoPoint::new(34.1, -117.5));
        assert_eq!(first.depth_km, Some(7.2));
        assert!(first.url.is_some());
    }

    #[test]
    fn test_null_magnitude_and_place() {
        let feed = EarthquakeFeed::from_geojson_str(SAMPLE).unwrap();
        let second = &feed.features[1];
        assert_eq!(second.magnitude, 0.0);
        assert_eq!(second.place, "");
        assert_eq!(second.depth_km, None);
    }

    #[test]
    fn test_empty_features() {
        let feed = EarthquakeFeed::from_geojson_str(r#"{"type":"FeatureCollection","features":[]}"#).unwrap();
        assert!(feed.is_empty());
        assert_eq!(feed.largest_magnitude(), None);
    }

    #[test]
    fn test_rejects_non_collection() {
        let err = EarthquakeFeed::from_geojson_str(r#"{"type":"Feature","geometry":null}"#).unwrap_err();
        assert!(matches!(err, FeedError::NotFeatureCollection { .. }));

        let err = EarthquakeFeed::from_geojson_str(r#"{"metadata":{}}"#).unwrap_err();
        assert!(matches!(err, FeedError::NotFeatureCollection { .. }));

        let err = EarthquakeFeed::from_geojson_str("not json").unwrap_err();
        assert!(matches!(err, FeedError::Json(_)));
    }

    #[test]
    fn test_numeric_id_is_stringified() {
        let text = r#"{"features":[{"id":42,"properties":{"mag":1.0},"geometry":{"type":"Point","coordinates":[0,0]}}]}"#;
        let feed = EarthquakeFeed::from_geojson_str(text).unwrap();
        assert_eq!(feed.features[0].id.as_deref(), Some("42"));
    }

    #[test]
    fn test_non_numeric_latitude_drops_feature() {
        let text = r#"{"features":[
            {"id":"a","properties":{"mag":1.0},"geometry":{"type":"Point","coordinates":[-117.5, null, 7.2]}},
            {"id":"b","properties":{"mag":1.0},"geometry":{"type":"Point","coordinates":[-117.5, "34.1", 7.2]}},
            {"id":"c","properties":{"mag":1.0},"geometry":{"type":"Point","coordinates":[-117.5, 34.1, null]}}
        ]}"#;
        let feed = EarthquakeFeed::from_geojson_str(text).unwrap();
        assert_eq!(feed.len(), 1);

        let kept = &feed.features[0];
        assert_eq!(kept.id.as_deref(), Some("c"));
        assert_eq!(kept.coordinates, GeoPoint::new(34.1, -117.5));
        assert_eq!(kept.depth_km, None);
    }

    #[test]
    fn test_largest_magnitude() {
        let feed = EarthquakeFeed::from_geojson_str(SAMPLE).unwrap();
        assert_eq!(feed.largest_magnitude(), Some(2.5));
    }

    #[test]
    fn test_geojson_encoding_decodes_back() {
        let feed = EarthquakeFeed::from_geojson_str(SAMPLE).unwrap();
        let text = feed.to_geojson().to_string();
        let decoded = EarthquakeFeed::from_geojson_str(&text).unwrap();
        assert_eq!(decoded.features, feed.features);
        assert_eq!(decoded.title, feed.title);
    }
}
