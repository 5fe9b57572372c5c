//! Layer control: base layer radio group and overlay checkboxes.

use eframe::egui;
use quakemap::{LayerControlSpec, LayerSelection, ThemeColors};

use crate::ui::overlay;

/// Renders the layer control over the map.
///
/// Returns the new selection if the user changed anything this frame.
pub fn render_layer_control(
    ctx: &egui::Context,
    map_rect: egui::Rect,
    spec: &LayerControlSpec,
    selection: LayerSelection,
    colors: &ThemeColors,
) -> Option<LayerSelection> {
    let mut edited = selection;

    overlay::show_overlay(ctx, "layer_control", spec.position, map_rect, colors, |ui| {
        if spec.collapsed {
            ui.collapsing("Layers", |ui| layer_list(ui, spec, &mut edited));
        } else {
            layer_list(ui, spec, &mut edited);
        }
    });

    (edited != selection).then_some(edited)
}

fn layer_list(ui: &mut egui::Ui, spec: &LayerControlSpec, selection: &mut LayerSelection) {
    for &layer in &spec.base_layers {
        if ui.radio(selection.base == layer, layer.label()).clicked() {
            selection.select_base(layer);
        }
    }

    ui.separator();

    for &overlay in &spec.overlays {
        let mut visible = selection.is_visible(overlay);
        if ui.checkbox(&mut visible, overlay.label()).changed() {
            selection.set_visible(overlay, visible);
        }
    }
}
