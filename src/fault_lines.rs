//! Tectonic plate boundary ("fault line") feed.
//!
//! Only geometry matters here. Every LineString, MultiLineString, Polygon and
//! MultiPolygon found in the document becomes one or more polylines; polygon rings are
//! kept as closed polylines and drawn unfilled. Properties are ignored.

use std::io::Read;

use serde_json::Value;

use crate::error::{FeedError, Result};
use crate::geo::GeoPoint;

/// An ordered list of points drawn as a connected line.
pub type Polyline = Vec<GeoPoint>;

/// Stroke styling for plate boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub rgb: (u8, u8, u8),
    /// Stroke width in screen points.
    pub weight: f32,
    pub fill_opacity: f32,
}

/// Orange, unfilled.
pub const FAULT_LINE_STYLE: LineStyle = LineStyle {
    rgb: (0xff, 0xa5, 0x00),
    weight: 3.0,
    fill_opacity: 0.0,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaultLineSet {
    pub lines: Vec<Polyline>,
}

impl FaultLineSet {
    pub fn from_geojson_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(&value)
    }

    /// Extracts polylines from any GeoJSON object: a collection, a feature or a bare geometry.
    pub fn from_value(value: &Value) -> Result<Self> {
        if value.get("type").and_then(Value::as_str).is_none() {
            return Err(FeedError::NotFeatureCollection {
                reason: "document has no GeoJSON type".to_string(),
            });
        }

        let mut lines = Vec::new();
        collect_lines(value, &mut lines);
        Ok(Self { lines })
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of vertices across all lines.
    pub fn vertex_count(&self) -> usize {
        self.lines.iter().map(Vec::len).sum()
    }
}

fn collect_lines(value: &Value, out: &mut Vec<Polyline>) {
    let kind = value.get("type").and_then(Value::as_str).unwrap_or_default();
    let coordinates = value.get("coordinates");

    match kind {
        "FeatureCollection" => {
            for feature in value.get("features").and_then(Value::as_array).into_iter().flatten() {
                collect_lines(feature, out);
            }
        }
        "Feature" => {
            if let Some(geometry) = value.get("geometry") {
                collect_lines(geometry, out);
            }
        }
        "GeometryCollection" => {
            for geometry in value.get("geometries").and_then(Value::as_array).into_iter().flatten() {
                collect_lines(geometry, out);
            }
        }
        "LineString" => {
            out.extend(coordinates.and_then(parse_line));
        }
        "MultiLineString" | "Polygon" => {
            out.extend(coordinates.map(parse_lines).unwrap_or_default());
        }
        "MultiPolygon" => {
            for polygon in coordinates.and_then(Value::as_array).into_iter().flatten() {
                out.extend(parse_lines(polygon));
            }
        }
        _ => {}
    }
}

fn parse_lines(value: &Value) -> Vec<Polyline> {
    value
        .as_array()
        .map(|lines| lines.iter().filter_map(parse_line).collect())
        .unwrap_or_default()
}

/// Parses `[[lon, lat], ...]`; lines with fewer than two valid points are dropped.
fn parse_line(value: &Value) -> Option<Polyline> {
    let points: Polyline = value
        .as_array()?
        .iter()
        .filter_map(GeoPoint::from_position)
        .collect();

    (points.len() >= 2).then_some(points)
}

/// Splits a line wherever consecutive points jump more than 180 degrees of longitude.
///
/// Plate boundaries that cross the antimeridian would otherwise be drawn as a stroke
/// spanning the whole map. Segments shorter than two points are dropped.
pub fn split_antimeridian(line: &[GeoPoint]) -> Vec<&[GeoPoint]> {
    let mut segments = Vec::new();
    let mut start = 0;

    for i in 1..line.len() {
        if (line[i].lon - line[i - 1].lon).abs() > 180.0 {
            segments.push(&line[start..i]);
            start = i;
        }
    }
    segments.push(&line[start..]);

    segments.retain(|segment| segment.len() >= 2);
    segments
}
