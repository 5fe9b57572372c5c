//! Magnitude legend.

use eframe::egui;
use egui::Sense;
use quakemap::{Legend, ThemeColors};

use crate::presentation::color_mapping;
use crate::ui::overlay;

const SWATCH_SIZE: f32 = 18.0;

/// Renders the legend box over the map: one swatch per magnitude bucket.
pub fn render_legend(ctx: &egui::Context, map_rect: egui::Rect, legend: &Legend, colors: &ThemeColors) {
    overlay::show_overlay(ctx, "magnitude_legend", legend.position, map_rect, colors, |ui| {
        ui.spacing_mut().item_spacing.y = 2.0;
        for entry in &legend.entries {
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE), Sense::hover());
                ui.painter()
                    .rect_filled(rect, 0.0, color_mapping::marker_color(entry.color, 1.0));
                ui.label(&entry.label);
            });
        }
    });
}
