//! Window chrome themes.
//!
//! Themes color the panels, the floating layer control and the legend box. Marker and
//! fault-line colors are fixed by [`stylist`](crate::stylist) and
//! [`fault_lines`](crate::fault_lines) and do not change with the theme.
//!
//! # Examples
//!
//! ```
//! use quakemap::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dark = manager.get_theme("Dark").unwrap();
//! println!("Dark legend background: {:?}", dark.colors.overlay_background);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Default theme name.
pub const DEFAULT_THEME: &str = "Light";

/// Palette for all non-map UI elements.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Panels
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Text
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Interactive
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,
    pub accent: Color32,

    // Floating controls drawn over the map
    pub overlay_background: Color32,
    pub overlay_text: Color32,

    /// Ring drawn around the selected marker.
    pub highlight: Color32,

    pub error: Color32,
    pub warning: Color32,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub dark: bool,
    pub colors: ThemeColors,
}

/// Holds the built-in themes.
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
}

impl ThemeManager {
    pub fn new() -> Self {
        let mut themes = HashMap::new();
        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dark".to_string(), dark_theme());
        Self { themes }
    }

    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Theme by name, or the default theme when the name is unknown.
    pub fn get_or_default(&self, name: &str) -> &Theme {
        self.themes
            .get(name)
            .or_else(|| self.themes.get(DEFAULT_THEME))
            .unwrap_or_else(|| unreachable!("default theme is always registered"))
    }

    /// Sorted theme names.
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.window_fill = colors.overlay_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.accent;
        visuals.error_fg_color = colors.error;
        visuals.warn_fg_color = colors.warning;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light panels with white map controls".to_string(),
        dark: false,
        colors: ThemeColors {
            panel_background: Color32::from_rgb(248, 248, 248),
            extreme_background: Color32::from_rgb(255, 255, 255),

            text: Color32::from_rgb(20, 20, 20),
            text_dim: Color32::from_rgb(120, 120, 120),
            text_strong: Color32::from_rgb(0, 0, 0),

            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(220, 220, 220),
            border: Color32::from_rgb(160, 160, 160),
            accent: Color32::from_rgb(40, 100, 200),

            // Leaflet's control boxes are white at 80% opacity.
            overlay_background: with_alpha(Color32::WHITE, 204),
            overlay_text: Color32::from_rgb(51, 51, 51),

            highlight: Color32::from_rgb(20, 20, 20),

            error: Color32::from_rgb(200, 40, 40),
            warning: Color32::from_rgb(230, 120, 20),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark panels with translucent dark map controls".to_string(),
        dark: true,
        colors: ThemeColors {
            panel_background: Color32::from_rgb(39, 39, 39),
            extreme_background: Color32::from_rgb(16, 16, 16),

            text: Color32::from_rgb(235, 235, 235),
            text_dim: Color32::from_rgb(160, 160, 160),
            text_strong: Color32::from_rgb(255, 255, 255),

            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),
            border: Color32::from_rgb(100, 100, 100),
            accent: Color32::from_rgb(52, 152, 219),

            overlay_background: with_alpha(hex_to_color32("#1e1e1e"), 220),
            overlay_text: Color32::from_rgb(230, 230, 230),

            highlight: Color32::WHITE,

            error: Color32::from_rgb(231, 76, 60),
            warning: Color32::from_rgb(243, 156, 18),
        },
    }
}

/// Converts a hex color string (like "#ff9933") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Same color with a new (unmultiplied) alpha.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
