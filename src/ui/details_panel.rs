//! Details panel UI rendering
//!
//! Shows the epicenter, time and magnitude of the selected earthquake.

use eframe::egui;
use egui::{RichText, ScrollArea};
use quakemap::ThemeColors;
use crate::app::AppState;
use crate::presentation::color_mapping;
use crate::utils::{format_depth, format_event_time, format_magnitude};

/// Renders the details panel for the selected marker.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `theme_colors` - Color palette for the current theme
pub fn render_details_panel(ui: &mut egui::Ui, state: &AppState, theme_colors: &ThemeColors) {
    let selected = state.selection.selected_marker().and_then(|index| {
        state
            .composer
            .composition()
            .and_then(|composition| composition.earthquakes().get(index))
    });

    let Some(marker) = selected else {
        ui.label(RichText::new("Select an earthquake to view details").color(theme_colors.text_dim));
        return;
    };
    let feature = &marker.feature;

    ScrollArea::vertical()
        .id_salt("details_scroll_area")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.label(RichText::new("The Epicenter is Located:").color(theme_colors.text_dim));
            let place = if feature.place.is_empty() { "(unnamed location)" } else { feature.place.as_str() };
            ui.label(RichText::new(place).strong().color(theme_colors.text_strong));

            ui.separator();

            ui.label(RichText::new("Time of Activity is:").color(theme_colors.text_dim));
            ui.label(format_event_time(feature.time_ms));

            ui.add_space(8.0);

            egui::Grid::new("details_grid")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Magnitude");
                    ui.horizontal(|ui| {
                        let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                        ui.painter()
                            .circle_filled(rect.center(), 6.0, color_mapping::marker_color(marker.style.color, 1.0));
                        ui.label(format_magnitude(feature.magnitude));
                    });
                    ui.end_row();

                    ui.label("Depth");
                    ui.label(format_depth(feature.depth_km));
                    ui.end_row();

                    ui.label("Location");
                    ui.label(format!("{:.3}, {:.3}", feature.coordinates.lat, feature.coordinates.lon));
                    ui.end_row();

                    ui.label("Radius");
                    ui.label(format!("{:.0} km", marker.style.radius_m / 1000.0));
                    ui.end_row();

                    if let Some(id) = &feature.id {
                        ui.label("Event ID");
                        ui.label(RichText::new(id).monospace());
                        ui.end_row();
                    }
                });

            if let Some(url) = &feature.url {
                ui.add_space(8.0);
                ui.hyperlink_to("Event page", url);
            }
        });
}
