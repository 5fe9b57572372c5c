//! Earthquake Map Viewer GUI Application
//!
//! Shows the past week's earthquakes on a slippy map using the egui framework.
//! The viewer features:
//! - Circle markers sized and colored by magnitude, with a matching legend
//! - Tectonic plate boundaries as an optional overlay
//! - Three switchable base layers with a floating layer control

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! - Asynchronous, independent loading of the earthquake and fault-line feeds
//! - Theme support with persistent preferences
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `presentation/` - Style to color conversion
//! - `io/` - Background feed loading
//! - `utils/` - Utility functions for formatting
//! - `ui/` - UI panel rendering and interaction
//! - `rendering/` - Map layers drawn through `walkers` plugins
//! - `state/` - State management for camera, feeds and selection

use eframe::egui;
use quakemap::{FeedLocation, LayerSelection, MapConfig};
use tracing_subscriber::EnvFilter;

mod utils;
mod presentation;
mod io;
mod app;
mod rendering;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator, SettingsCoordinator};
use io::FeedLoaders;
use ui::panel_manager::{PanelInteraction, PanelManager};

const LAYER_SELECTION_KEY: &str = "layer_selection";

/// Main application entry point that initializes and launches the earthquake map GUI.
fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config = MapConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring invalid configuration, using defaults");
        MapConfig::default()
    });

    // Optional earthquake feed override: URL, file path or "synthetic"
    if let Some(arg) = std::env::args().nth(1) {
        config = config.with_earthquake_source(FeedLocation::parse(&arg));
    }

    tracing::info!(
        earthquakes = %config.earthquake_source.describe(),
        fault_lines = %config.fault_source.describe(),
        mapbox = config.access_token.is_some(),
        "starting earthquake map"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Earthquake Map"),
        ..Default::default()
    };

    eframe::run_native(
        "Earthquake Map",
        options,
        Box::new(move |cc| Ok(Box::new(QuakeMapApp::new(cc, config)))),
    )
}

/// The main earthquake map application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles feed loading, error handling, and interaction logic
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct QuakeMapApp {
    /// Centralized application state
    state: AppState,
    /// Background feed loaders
    loaders: FeedLoaders,
    /// Both feeds are fetched on the first frame, once a context is available
    pending_start: bool,
}

impl QuakeMapApp {
    /// Creates a new viewer instance with theme and layer preferences loaded from persistent storage.
    fn new(cc: &eframe::CreationContext, config: MapConfig) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let layers: LayerSelection = SettingsCoordinator::load_setting(cc.storage, LAYER_SELECTION_KEY);

        Self {
            state: AppState::with_preferences(config, theme_name, layers),
            loaders: FeedLoaders::new(),
            pending_start: true,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::ReloadRequested => {
                ApplicationCoordinator::start_loading(&mut self.state, &mut self.loaders, ctx);
            }
            PanelInteraction::OpenFeedRequested(source) => {
                ApplicationCoordinator::open_feed(&mut self.state, &mut self.loaders, source, ctx);
            }
            PanelInteraction::DemoFeedRequested { seed } => {
                ApplicationCoordinator::open_demo_feed(&mut self.state, &mut self.loaders, seed, ctx);
            }
            PanelInteraction::ResetViewRequested => {
                ApplicationCoordinator::reset_view(&mut self.state);
            }
            PanelInteraction::MarkerClicked(index) => {
                ApplicationCoordinator::handle_marker_click(&mut self.state, index);
            }
            PanelInteraction::EmptyMapClicked => {
                self.state.selection.deselect();
            }
            PanelInteraction::LayersChanged(selection) => {
                ApplicationCoordinator::handle_layer_change(&mut self.state, selection);
            }
        }
    }

    fn save_preferences(&self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(storage, LAYER_SELECTION_KEY, &self.state.composer.selection());
    }
}

impl eframe::App for QuakeMapApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.save_preferences(storage);
    }

    /// Main update loop:
    /// 1. Start both fetches on the first frame
    /// 2. Apply finished fetches
    /// 3. Apply theme
    /// 4. Render all panels via PanelManager
    /// 5. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        if std::mem::take(&mut self.pending_start) {
            ApplicationCoordinator::start_loading(&mut self.state, &mut self.loaders, ctx);
        }

        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loaders);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.loaders) {
            self.handle_panel_interaction(interaction, ctx);

            // Persist preferences right away (for crash resilience)
            if let Some(storage) = frame.storage_mut() {
                self.save_preferences(storage);
            }
        }
    }
}
