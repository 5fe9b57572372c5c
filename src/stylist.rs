//! Magnitude to marker encoding.
//!
//! Every earthquake marker is drawn as a filled circle whose radius (in metres on the
//! ground) grows linearly with magnitude and whose color comes from a fixed six-step
//! palette. The palette is indexed by [`MagnitudeBucket`], the one classification shared
//! by the marker overlay and the legend.
//!
//! # Examples
//!
//! ```
//! use quakemap::stylist::{color_for, radius_for, ColorToken};
//!
//! assert_eq!(radius_for(2.5), 62_500.0);
//! assert_eq!(color_for(2.5), ColorToken::Gold);
//! assert_eq!(color_for(1.0).hex(), "#ffff33");
//! ```

/// Ground radius in metres per unit of magnitude.
pub const RADIUS_METRES_PER_MAGNITUDE: f64 = 25_000.0;

/// Markers are drawn fully opaque.
pub const MARKER_FILL_OPACITY: f32 = 1.0;

/// Upper (exclusive) bounds of the first five buckets. The sixth bucket is open-ended.
pub const BUCKET_THRESHOLDS: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

/// Lower bounds of every bucket, in order. Used to build the legend.
pub const BUCKET_LOWER_BOUNDS: [f64; 6] = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];

/// The six fixed marker colors, ordered from weakest to strongest bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Lime,
    Yellow,
    Gold,
    Orange,
    OrangeRed,
    Red,
}

/// Palette indexed by bucket.
pub const PALETTE: [ColorToken; 6] = [
    ColorToken::Lime,
    ColorToken::Yellow,
    ColorToken::Gold,
    ColorToken::Orange,
    ColorToken::OrangeRed,
    ColorToken::Red,
];

impl ColorToken {
    /// CSS-style hex string for this token.
    pub const fn hex(self) -> &'static str {
        match self {
            ColorToken::Lime => "#ccff33",
            ColorToken::Yellow => "#ffff33",
            ColorToken::Gold => "#ffcc33",
            ColorToken::Orange => "#ff9933",
            ColorToken::OrangeRed => "#ff6633",
            ColorToken::Red => "#ff3333",
        }
    }

    /// Red, green and blue channels.
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            ColorToken::Lime => (0xcc, 0xff, 0x33),
            ColorToken::Yellow => (0xff, 0xff, 0x33),
            ColorToken::Gold => (0xff, 0xcc, 0x33),
            ColorToken::Orange => (0xff, 0x99, 0x33),
            ColorToken::OrangeRed => (0xff, 0x66, 0x33),
            ColorToken::Red => (0xff, 0x33, 0x33),
        }
    }
}

/// One half-open magnitude interval `[lower, upper)`; the last bucket has no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MagnitudeBucket(usize);

impl MagnitudeBucket {
    /// All buckets from weakest to strongest.
    pub fn all() -> impl Iterator<Item = MagnitudeBucket> {
        (0..PALETTE.len()).map(MagnitudeBucket)
    }

    /// Position of this bucket in [`PALETTE`].
    pub fn index(self) -> usize {
        self.0
    }

    pub fn lower_bound(self) -> f64 {
        BUCKET_LOWER_BOUNDS[self.0]
    }

    /// `None` for the open-ended top bucket.
    pub fn upper_bound(self) -> Option<f64> {
        BUCKET_THRESHOLDS.get(self.0).copied()
    }

    pub fn color(self) -> ColorToken {
        PALETTE[self.0]
    }

    /// Whether `magnitude` falls inside this bucket.
    pub fn contains(self, magnitude: f64) -> bool {
        magnitude >= self.lower_bound() && self.upper_bound().map_or(true, |upper| magnitude < upper)
    }
}

/// Classifies a magnitude.
///
/// The test is `magnitude < threshold`, so a magnitude equal to a threshold belongs to the
/// next bucket up. Negative magnitudes and NaN land in the first bucket.
pub fn bucket_for(magnitude: f64) -> MagnitudeBucket {
    if magnitude.is_nan() {
        return MagnitudeBucket(0);
    }

    let index = BUCKET_THRESHOLDS
        .iter()
        .position(|&threshold| magnitude < threshold)
        .unwrap_or(BUCKET_THRESHOLDS.len());

    MagnitudeBucket(index)
}

/// Marker ground radius in metres. No validation: negative or non-finite input passes
/// straight through.
pub fn radius_for(magnitude: f64) -> f64 {
    magnitude * RADIUS_METRES_PER_MAGNITUDE
}

pub fn color_for(magnitude: f64) -> ColorToken {
    bucket_for(magnitude).color()
}

/// Complete visual encoding of one earthquake marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    /// Circle radius in metres on the ground.
    pub radius_m: f64,
    pub color: ColorToken,
    pub fill_opacity: f32,
}

impl MarkerStyle {
    /// True when the radius can be drawn. Zero, negative and non-finite radii are skipped.
    pub fn is_drawable(&self) -> bool {
        self.radius_m.is_finite() && self.radius_m > 0.0
    }
}

pub fn style_for(magnitude: f64) -> MarkerStyle {
    MarkerStyle {
        radius_m: radius_for(magnitude),
        color: color_for(magnitude),
        fill_opacity: MARKER_FILL_OPACITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_is_linear_in_magnitude() {
        for m in [0.0, 0.5, 1.0, 2.5, 4.9, 7.3] {
            assert_eq!(radius_for(m), m * 25_000.0);
        }
        assert_eq!(radius_for(2.5), 62_500.0);
    }

    #[test]
    fn test_radius_passes_through_bad_input() {
        assert_eq!(radius_for(-1.0), -25_000.0);
        assert!(radius_for(f64::NAN).is_nan());
        assert!(radius_for(f64::INFINITY).is_infinite());
    }

    #[test]
    fn test_color_per_bucket() {
        assert_eq!(color_for(0.0), PALETTE[0]);
        assert_eq!(color_for(0.99), PALETTE[0]);
        assert_eq!(color_for(1.5), PALETTE[1]);
        assert_eq!(color_for(2.5), PALETTE[2]);
        assert_eq!(color_for(3.5), PALETTE[3]);
        assert_eq!(color_for(4.5), PALETTE[4]);
        assert_eq!(color_for(5.5), PALETTE[5]);
        assert_eq!(color_for(9.0), PALETTE[5]);
    }

    #[test]
    fn test_threshold_goes_to_higher_bucket() {
        assert_eq!(color_for(1.0), PALETTE[1]);
        assert_ne!(color_for(1.0), PALETTE[0]);
        assert_eq!(color_for(5.0), PALETTE[5]);
        for (i, &t) in BUCKET_THRESHOLDS.iter().enumerate() {
            assert_eq!(bucket_for(t).index(), i + 1);
        }
    }

    #[test]
    fn test_negative_and_nan_fall_into_first_bucket() {
        assert_eq!(color_for(-0.3), PALETTE[0]);
        assert_eq!(color_for(f64::NEG_INFINITY), PALETTE[0]);
        assert_eq!(color_for(f64::NAN), PALETTE[0]);
        assert_eq!(color_for(f64::INFINITY), PALETTE[5]);
    }

    #[test]
    fn test_buckets_are_contiguous() {
        let buckets: Vec<_> = MagnitudeBucket::all().collect();
        assert_eq!(buckets.len(), 6);
        assert_eq!(buckets[0].lower_bound(), 0.0);
        for pair in buckets.windows(2) {
            assert_eq!(pair[0].upper_bound(), Some(pair[1].lower_bound()));
        }
        assert_eq!(buckets[5].upper_bound(), None);
    }

    #[test]
    fn test_each_magnitude_in_exactly_one_bucket() {
        let mut m = 0.0;
        while m < 8.0 {
            let hits: Vec<_> = MagnitudeBucket::all().filter(|b| b.contains(m)).collect();
            assert_eq!(hits.len(), 1, "magnitude {} matched {} buckets", m, hits.len());
            assert_eq!(hits[0], bucket_for(m));
            m += 0.05;
        }
    }

    #[test]
    fn test_hex_matches_rgb() {
        for token in PALETTE {
            let (r, g, b) = token.rgb();
            assert_eq!(token.hex(), format!("#{:02x}{:02x}{:02x}", r, g, b));
        }
    }

    #[test]
    fn test_style_for() {
        let style = style_for(2.5);
        assert_eq!(style.radius_m, 62_500.0);
        assert_eq!(style.color, ColorToken::Gold);
        assert_eq!(style.fill_opacity, 1.0);
        assert!(style.is_drawable());
        assert!(!style_for(0.0).is_drawable());
        assert!(!style_for(-2.0).is_drawable());
        assert!(!style_for(f64::NAN).is_drawable());
    }
}
