//! Magnitude legend.
//!
//! The legend shows one swatch per bucket. Swatch colors come from
//! [`color_for`](crate::stylist::color_for) applied to each bucket's lower bound, so the
//! legend can never disagree with the markers on the map.

use crate::stylist::{color_for, ColorToken, BUCKET_LOWER_BOUNDS};

/// Screen corner a floating control is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// One labelled color swatch.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    /// "lo–hi" for bounded buckets, "lo+" for the last one.
    pub label: String,
    pub color: ColorToken,
    pub lower: f64,
    pub upper: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub position: Corner,
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    /// The standard magnitude legend in the bottom-right corner.
    pub fn magnitude() -> Self {
        Self {
            position: Corner::BottomRight,
            entries: build_entries(&BUCKET_LOWER_BOUNDS),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds swatches from ascending bucket lower bounds.
///
/// Each entry spans from its bound to the next one; the final entry is open-ended.
pub fn build_entries(lower_bounds: &[f64]) -> Vec<LegendEntry> {
    lower_bounds
        .iter()
        .enumerate()
        .map(|(i, &lower)| {
            let upper = lower_bounds.get(i + 1).copied();
            let label = match upper {
                Some(upper) => format!("{}\u{2013}{}", lower, upper),
                None => format!("{}+", lower),
            };

            LegendEntry {
                label,
                color: color_for(lower),
                lower,
                upper,
            }
        })
        .collect()
}
