//! Presentation layer for visual styling and color mapping.
//!
//! This module contains presentation logic separated from the map model:
//! - Color mapping for markers and fault lines
//! - Theme-related visual styling

pub mod color_mapping;
