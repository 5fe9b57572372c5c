//! Application-level coordination and workflow management.
//!
//! Handles high-level application operations like feed loading, error handling,
//! and coordinating between different subsystems.

use crate::app::AppState;
use crate::io::{FeedLoaders, LoadResult};
use quakemap::{FeedLocation, LayerSelection};

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Starting both feed fetches and applying their results
/// - Switching the earthquake source (file, demo data)
/// - Marker selection and layer changes
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Drops the current map and fetches both configured feeds.
    ///
    /// The two fetches run independently; the map appears as soon as the
    /// earthquake feed is in.
    pub fn start_loading(state: &mut AppState, loaders: &mut FeedLoaders, ctx: &egui::Context) {
        state.reset_feed_state();

        let config = state.config().clone();
        loaders.start_earthquakes(config.earthquake_source, config.request_timeout, ctx);
        loaders.start_fault_lines(config.fault_source, config.request_timeout, ctx);
    }

    /// Loads earthquakes from `source`, keeping the fault-line source as configured.
    pub fn open_feed(state: &mut AppState, loaders: &mut FeedLoaders, source: FeedLocation, ctx: &egui::Context) {
        tracing::info!(source = %source.describe(), "switching earthquake feed");
        state.composer.set_earthquake_source(source);
        Self::start_loading(state, loaders, ctx);
    }

    /// Loads seeded demo data for both feeds. No network access is needed.
    pub fn open_demo_feed(state: &mut AppState, loaders: &mut FeedLoaders, seed: u64, ctx: &egui::Context) {
        state.composer.set_fault_source(FeedLocation::Synthetic { seed });
        Self::open_feed(state, loaders, FeedLocation::Synthetic { seed }, ctx);
    }

    /// Checks for loading completion and applies results to application state.
    ///
    /// Called once per frame in the update loop.
    /// Returns true if a fetch completed (success or error).
    pub fn check_loading_completion(state: &mut AppState, loaders: &mut FeedLoaders) -> bool {
        let mut completed = false;

        match loaders.earthquakes.check_completion() {
            LoadResult::Success { data, source } => {
                state.composer.earthquakes_loaded(&data);
                state.feeds.earthquakes_loaded(&data, source);
                state.selection.clear();
                state.error_message = None;
                completed = true;
            }
            LoadResult::Error(error_msg) => {
                // No map without earthquakes; leave the composer empty.
                tracing::error!(error = %error_msg, "earthquake feed unavailable");
                state.error_message = Some(format!("Error loading earthquakes: {}", error_msg));
                completed = true;
            }
            LoadResult::None => {}
        }

        match loaders.fault_lines.check_completion() {
            LoadResult::Success { data, source } => {
                state.composer.fault_lines_loaded(Ok(data));
                state.feeds.fault_lines_loaded(source);
                completed = true;
            }
            LoadResult::Error(error_msg) => {
                state.composer.fault_lines_loaded(Err(error_msg));
                completed = true;
            }
            LoadResult::None => {}
        }

        completed
    }

    /// Handles a click on a marker: selects it, or deselects it when already selected.
    pub fn handle_marker_click(state: &mut AppState, index: usize) {
        let selected = state.selection.toggle_marker(index);
        if let Some(marker) = state.composer.composition().and_then(|c| c.earthquakes().get(index)) {
            tracing::debug!(index, selected, place = %marker.feature.place, "marker clicked");
        }
    }

    /// Applies a new layer selection from the layer control.
    pub fn handle_layer_change(state: &mut AppState, selection: LayerSelection) {
        let previous = state.composer.selection();
        if previous.base != selection.base {
            tracing::info!(from = previous.base.label(), to = selection.base.label(), "base layer switched");
        }

        state.composer.update_selection(selection);

        // A hidden marker cannot stay selected.
        if !selection.show_earthquakes {
            state.selection.clear();
        }
    }

    pub fn reset_view(state: &mut AppState) {
        state.map.reset_view();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quakemap::{BaseLayer, FaultLineOverlay, MapConfig};
    use std::time::{Duration, Instant};

    fn drain(state: &mut AppState, loaders: &mut FeedLoaders) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while loaders.earthquakes.pending_source().is_some() || loaders.fault_lines.pending_source().is_some() {
            ApplicationCoordinator::check_loading_completion(state, loaders);
            if Instant::now() > deadline {
                panic!("feeds did not finish loading");
            }
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_demo_feed_composes_map() {
        let ctx = egui::Context::default();
        let mut state = AppState::new(MapConfig::default());
        let mut loaders = FeedLoaders::new();

        ApplicationCoordinator::open_demo_feed(&mut state, &mut loaders, 3, &ctx);
        drain(&mut state, &mut loaders);

        let composition = state.composer.composition().expect("map composed");
        assert!(!composition.earthquakes().is_empty());
        assert!(matches!(composition.fault_lines(), FaultLineOverlay::Loaded(_)));
        assert_eq!(state.feeds.event_count(), composition.earthquakes().len());
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_missing_earthquake_file_leaves_no_map() {
        let ctx = egui::Context::default();
        let config = MapConfig::default();
        let mut state = AppState::new(config);
        state.composer.set_fault_source(FeedLocation::Synthetic { seed: 1 });
        let mut loaders = FeedLoaders::new();

        ApplicationCoordinator::open_feed(
            &mut state,
            &mut loaders,
            FeedLocation::File("/no/such/week.geojson".into()),
            &ctx,
        );
        drain(&mut state, &mut loaders);

        assert!(state.composer.composition().is_none());
        assert!(state.error_message.as_deref().unwrap_or_default().starts_with("Error loading earthquakes"));
        // The fault lines still arrived and wait for a map.
        assert!(matches!(state.composer.fault_lines(), FaultLineOverlay::Loaded(_)));
    }

    #[test]
    fn test_missing_fault_file_keeps_map() {
        let ctx = egui::Context::default();
        let mut state = AppState::new(MapConfig::default());
        state.composer.set_fault_source(FeedLocation::File("/no/such/plates.json".into()));
        let mut loaders = FeedLoaders::new();

        ApplicationCoordinator::open_feed(&mut state, &mut loaders, FeedLocation::Synthetic { seed: 9 }, &ctx);
        drain(&mut state, &mut loaders);

        let composition = state.composer.composition().expect("map composed");
        assert!(matches!(composition.fault_lines(), FaultLineOverlay::Unavailable(_)));
        assert!(composition.visible_fault_lines().is_empty());
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_hiding_earthquakes_clears_selection() {
        let mut state = AppState::new(MapConfig::default());
        state.selection.toggle_marker(2);

        let mut selection = state.composer.selection();
        selection.select_base(BaseLayer::Greyscale);
        ApplicationCoordinator::handle_layer_change(&mut state, selection);
        assert_eq!(state.selection.selected_marker(), Some(2));
        assert_eq!(state.composer.selection().base, BaseLayer::Greyscale);

        selection.show_earthquakes = false;
        ApplicationCoordinator::handle_layer_change(&mut state, selection);
        assert_eq!(state.selection.selected_marker(), None);
    }
}
