//! Centralized application state for the earthquake map viewer.
//!
//! Focused state components each manage one aspect of the application. The map model
//! itself lives in the [`MapComposer`], which only produces a map once the earthquake
//! feed has arrived.

use quakemap::theme::DEFAULT_THEME;
use quakemap::{LayerSelection, MapComposer, MapConfig};

use crate::state::{FeedState, MapViewState, SelectionState, ThemeState};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Feed results and the composed map
    pub composer: MapComposer,

    /// Where the feeds came from and what they contained
    pub feeds: FeedState,

    /// Camera and tile caches
    pub map: MapViewState,

    /// Selected and hovered marker
    pub selection: SelectionState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl AppState {
    /// Creates a new application state for `config` with default preferences.
    pub fn new(config: MapConfig) -> Self {
        Self::with_preferences(config, DEFAULT_THEME.to_string(), LayerSelection::default())
    }

    /// Creates a new AppState with theme and layer preferences loaded from storage.
    pub fn with_preferences(config: MapConfig, theme_name: String, layers: LayerSelection) -> Self {
        let map = MapViewState::new(config.center, config.zoom);
        Self {
            composer: MapComposer::new(config).with_selection(layers),
            feeds: FeedState::new(),
            map,
            selection: SelectionState::new(),
            theme: ThemeState::with_theme(theme_name),
            error_message: None,
        }
    }

    pub fn config(&self) -> &MapConfig {
        self.composer.config()
    }

    /// Drops the map and feed data ahead of a new load.
    ///
    /// The camera and layer selection are kept.
    pub fn reset_feed_state(&mut self) {
        self.composer.reset();
        self.feeds.clear();
        self.selection.clear();
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quakemap::{BaseLayer, EarthquakeFeed};

    #[test]
    fn test_reset_keeps_layer_selection() {
        let layers = LayerSelection {
            base: BaseLayer::Satellite,
            show_fault_lines: false,
            show_earthquakes: true,
        };
        let mut state = AppState::with_preferences(MapConfig::default(), "Dark".to_string(), layers);
        state.composer.earthquakes_loaded(&EarthquakeFeed::default());
        state.selection.toggle_marker(0);
        state.error_message = Some("old".to_string());

        state.reset_feed_state();

        assert!(state.composer.composition().is_none());
        assert_eq!(state.composer.selection(), layers);
        assert_eq!(state.selection.selected_marker(), None);
        assert!(state.error_message.is_none());
        assert_eq!(state.theme.current_theme_name(), "Dark");
    }
}
