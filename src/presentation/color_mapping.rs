//! Conversion of map styles to egui colors.
//!
//! This module provides functions for:
//! - Turning marker color tokens and opacities into `Color32`
//! - Turning line styles into strokes
//! - Getting the current theme's color palette

use egui::{Color32, Stroke};
use quakemap::{ColorToken, LineStyle, ThemeColors, ThemeManager};

/// Returns a reference to the current theme's color palette.
///
/// Unknown theme names fall back to the default theme.
pub fn theme_colors<'a>(theme_manager: &'a ThemeManager, current_theme_name: &str) -> &'a ThemeColors {
    &theme_manager.get_or_default(current_theme_name).colors
}

/// Fill color for a marker with the given opacity in `[0, 1]`.
pub fn marker_color(token: ColorToken, opacity: f32) -> Color32 {
    let (r, g, b) = token.rgb();
    Color32::from_rgba_unmultiplied(r, g, b, opacity_to_alpha(opacity))
}

/// Stroke for a polyline style.
pub fn line_stroke(style: &LineStyle) -> Stroke {
    let (r, g, b) = style.rgb;
    Stroke::new(style.weight, Color32::from_rgb(r, g, b))
}

fn opacity_to_alpha(opacity: f32) -> u8 {
    (opacity.clamp(0.0, 1.0) * 255.0).round() as u8
}
