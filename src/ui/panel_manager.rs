//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, map, details, status) and collects their
//! interactions for the application coordinator.

use crate::app::AppState;
use crate::io::FeedLoaders;
use crate::presentation::color_mapping;
use crate::ui::{details_panel, header, map_panel, status_bar};
use quakemap::{FeedLocation, LayerSelection};

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested both feeds to be fetched again
    ReloadRequested,
    /// User picked a different earthquake feed
    OpenFeedRequested(FeedLocation),
    /// User requested seeded demo data
    DemoFeedRequested { seed: u64 },
    /// User requested the initial center and zoom
    ResetViewRequested,
    /// A marker was clicked
    MarkerClicked(usize),
    /// The map was clicked away from any marker
    EmptyMapClicked,
    /// The layer control changed the base layer or an overlay toggle
    LayersChanged(LayerSelection),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loaders: &FeedLoaders,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;
        let loading = loaders.is_loading();

        // Get theme colors for rendering
        let theme_colors = color_mapping::theme_colors(state.theme.theme_manager(), state.theme.current_theme_name()).clone();

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state, loading) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::ReloadRequested => PanelInteraction::ReloadRequested,
                    header::HeaderInteraction::OpenFeedRequested(source) => {
                        PanelInteraction::OpenFeedRequested(source)
                    }
                    header::HeaderInteraction::DemoFeedRequested { seed } => {
                        PanelInteraction::DemoFeedRequested { seed }
                    }
                    header::HeaderInteraction::ResetViewRequested => PanelInteraction::ResetViewRequested,
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state, &theme_colors);
        });

        // Details panel on the right
        egui::SidePanel::right("details_panel")
            .default_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.heading("Earthquake");
                ui.separator();
                egui::Frame::default().inner_margin(4.0).show(ui, |ui| {
                    details_panel::render_details_panel(ui, state, &theme_colors);
                });
            });

        // Map fills the rest, edge to edge
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                if let Some(map_interaction) = map_panel::render_map_panel(ui, state, loading, &theme_colors) {
                    interaction = Some(match map_interaction {
                        map_panel::MapPanelInteraction::MarkerClicked(index) => {
                            PanelInteraction::MarkerClicked(index)
                        }
                        map_panel::MapPanelInteraction::EmptyMapClicked => PanelInteraction::EmptyMapClicked,
                        map_panel::MapPanelInteraction::LayersChanged(selection) => {
                            PanelInteraction::LayersChanged(selection)
                        }
                    });
                }
            });

        interaction
    }
}
