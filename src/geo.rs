//! Geographic primitives shared by the feeds and the map.

use serde_json::Value;

/// Mean metres per degree of latitude.
pub const METRES_PER_DEGREE_LAT: f64 = 111_320.0;

/// A WGS-84 position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Builds a point from a GeoJSON position (`[lon, lat, ...]`).
    ///
    /// Longitude and latitude are read from their own slots; `None` if either is
    /// missing or not a number.
    pub fn from_position(position: &Value) -> Option<Self> {
        let position = position.as_array()?;
        let lon = position.first()?.as_f64()?;
        let lat = position.get(1)?.as_f64()?;
        Some(Self::new(lat, lon))
    }

    /// The point `metres` due north of this one.
    pub fn offset_north(&self, metres: f64) -> Self {
        Self::new(self.lat + metres / METRES_PER_DEGREE_LAT, self.lon)
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_position_swaps_axis_order() {
        let p = GeoPoint::from_position(&json!([-122.5, 37.7, 8.0])).unwrap();
        assert_eq!(p.lat, 37.7);
        assert_eq!(p.lon, -122.5);
        assert!(GeoPoint::from_position(&json!([1.0])).is_none());
        assert!(GeoPoint::from_position(&json!([])).is_none());
        assert!(GeoPoint::from_position(&json!("-122.5,37.7")).is_none());
    }

    #[test]
    fn test_from_position_rejects_non_numeric_axis() {
        assert!(GeoPoint::from_position(&json!([-117.5, null, 7.2])).is_none());
        assert!(GeoPoint::from_position(&json!([-117.5, "34.1", 7.2])).is_none());
        assert!(GeoPoint::from_position(&json!([null, 34.1])).is_none());
    }

    #[test]
    fn test_offset_north() {
        let p = GeoPoint::new(10.0, 20.0).offset_north(METRES_PER_DEGREE_LAT);
        assert!((p.lat - 11.0).abs() < 1e-9);
        assert_eq!(p.lon, 20.0);
    }
}
