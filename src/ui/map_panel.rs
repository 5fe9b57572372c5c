//! Map panel UI rendering
//!
//! Draws the composed map with its layer control, legend and attribution. Until the
//! earthquake feed has arrived there is no map, only a loading or error placeholder.

use eframe::egui;
use egui::RichText;
use quakemap::{LayerSelection, ThemeColors};

use crate::app::AppState;
use crate::rendering::earthquake_plugin::MarkerHits;
use crate::rendering::map_view;
use crate::ui::{layer_control, legend_panel};

/// Result of user interaction with the map panel
pub enum MapPanelInteraction {
    MarkerClicked(usize),
    /// Click on the map away from any marker
    EmptyMapClicked,
    LayersChanged(LayerSelection),
}

/// Renders the map, or a placeholder when no map exists yet.
pub fn render_map_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    loading: bool,
    theme_colors: &ThemeColors,
) -> Option<MapPanelInteraction> {
    let AppState {
        composer,
        map,
        selection,
        ..
    } = state;

    let Some(composition) = composer.composition() else {
        render_placeholder(ui, loading, theme_colors);
        return None;
    };

    let (hits, map_rect) = map_view::show_map(ui, composition, map, selection.selected_marker(), theme_colors);
    selection.set_hovered(hits.hovered);

    let ctx = ui.ctx().clone();
    let layers_changed = layer_control::render_layer_control(
        &ctx,
        map_rect,
        composition.control(),
        composition.selection(),
        theme_colors,
    );
    legend_panel::render_legend(&ctx, map_rect, composition.legend(), theme_colors);
    render_attribution(&ctx, map_rect, composition, theme_colors);

    if hits.hovered.is_some() {
        ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    layers_changed
        .map(MapPanelInteraction::LayersChanged)
        .or_else(|| click_interaction(hits))
}

fn click_interaction(hits: MarkerHits) -> Option<MapPanelInteraction> {
    match hits.clicked {
        Some(index) => Some(MapPanelInteraction::MarkerClicked(index)),
        None if hits.clicked_empty => Some(MapPanelInteraction::EmptyMapClicked),
        None => None,
    }
}

fn render_placeholder(ui: &mut egui::Ui, loading: bool, theme_colors: &ThemeColors) {
    ui.centered_and_justified(|ui| {
        if loading {
            ui.horizontal_centered(|ui| {
                ui.spinner();
                ui.label("Loading earthquake feed…");
            });
        } else {
            ui.label(RichText::new("No map: the earthquake feed is not loaded").color(theme_colors.text_dim));
        }
    });
}

fn render_attribution(
    ctx: &egui::Context,
    map_rect: egui::Rect,
    composition: &quakemap::MapComposition,
    theme_colors: &ThemeColors,
) {
    let endpoint = composition.active_endpoint();

    egui::Area::new(egui::Id::new("tile_attribution"))
        .order(egui::Order::Foreground)
        .pivot(egui::Align2::LEFT_BOTTOM)
        .fixed_pos(map_rect.left_bottom() + egui::vec2(4.0, -4.0))
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(theme_colors.overlay_background)
                .inner_margin(2.0)
                .show(ui, |ui| {
                    ui.hyperlink_to(RichText::new(endpoint.attribution).small(), endpoint.attribution_url);
                });
        });
}
