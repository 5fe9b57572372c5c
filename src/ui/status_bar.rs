//! Status bar UI rendering
//!
//! Handles the bottom status bar summarizing the loaded feeds.

use eframe::egui;
use egui::RichText;
use quakemap::{FaultLineOverlay, ThemeColors};
use crate::app::AppState;
use crate::utils::{format_magnitude, format_thousands};

/// Renders the status panel at the bottom of the window.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, theme_colors: &ThemeColors) {
    ui.horizontal(|ui| {
        let Some(composition) = state.composer.composition() else {
            ui.label(RichText::new("No earthquake feed loaded").strong());
            return;
        };

        let earthquakes = composition.earthquakes();
        ui.label(RichText::new(format!("Earthquakes: {}", format_thousands(earthquakes.len() as i64))).strong());

        let hidden = earthquakes.len() - earthquakes.drawable().count();
        if hidden > 0 {
            ui.label(RichText::new(format!("({} too small to draw)", hidden)).color(theme_colors.text_dim));
        }

        if let Some(largest) = state.feeds.largest_magnitude() {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(format!("Largest: {}", format_magnitude(largest))).strong());
        }

        ui.label(RichText::new("|").strong());
        match composition.fault_lines() {
            FaultLineOverlay::Pending => {
                ui.label(RichText::new("Fault lines loading…").color(theme_colors.text_dim));
            }
            FaultLineOverlay::Loaded(set) => {
                let label = ui.label(RichText::new(format!("Fault lines: {}", format_thousands(set.len() as i64))).strong());
                if let Some(source) = state.feeds.fault_source() {
                    label.on_hover_text(source.describe());
                }
            }
            FaultLineOverlay::Unavailable(reason) => {
                ui.label(RichText::new("fault lines unavailable").color(theme_colors.warning))
                    .on_hover_text(reason);
            }
        }

        if let Some(source) = state.feeds.earthquake_source() {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(source.describe()).color(theme_colors.text_dim));
        }

        if let Some(loaded_at) = state.feeds.loaded_at() {
            ui.label(RichText::new(format!("loaded {}", loaded_at.format("%H:%M:%S UTC"))).color(theme_colors.text_dim));
        }
    });
}
