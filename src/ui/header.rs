//! Header panel UI rendering
//!
//! Handles the top bar with feed controls, the view reset and the theme selector.

use eframe::egui;
use quakemap::reader::DEFAULT_SYNTHETIC_SEED;
use quakemap::FeedLocation;
use crate::app::AppState;
use crate::presentation::color_mapping;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User clicked "Reload"
    ReloadRequested,
    /// User picked a feed file
    OpenFeedRequested(FeedLocation),
    /// User clicked "Demo Feed"
    DemoFeedRequested { seed: u64 },
    /// User clicked "Reset View"
    ResetViewRequested,
}

/// Renders the application header.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state (theme selection is applied in place)
/// * `loading` - Whether any feed fetch is still running
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState, loading: bool) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.add_enabled(!loading, egui::Button::new("⟳ Reload")).clicked() {
            interaction = Some(HeaderInteraction::ReloadRequested);
        }

        if ui.button("📁 Open Feed").clicked() {
            let mut dialog = rfd::FileDialog::new()
                .add_filter("All Feed Files", &["geojson", "json", "br"])
                .add_filter("GeoJSON", &["geojson", "json"])
                .add_filter("Brotli-compressed GeoJSON", &["br"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFeedRequested(FeedLocation::File(path)));
            }
        }

        if ui.button("🔮 Demo Feed").clicked() {
            interaction = Some(HeaderInteraction::DemoFeedRequested {
                seed: DEFAULT_SYNTHETIC_SEED,
            });
        }

        ui.separator();

        if ui.button("⛶ Reset View").clicked() {
            interaction = Some(HeaderInteraction::ResetViewRequested);
        }

        if loading {
            ui.separator();
            ui.spinner();
        }

        if let Some(title) = state.feeds.title() {
            ui.separator();
            ui.strong(title);
        }

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut current_theme = state.theme.current_theme_name().to_string();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                    }
                });

            if current_theme != state.theme.current_theme_name() {
                tracing::debug!(theme = %current_theme, "theme changed");
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        let colors = color_mapping::theme_colors(state.theme.theme_manager(), state.theme.current_theme_name());
        ui.colored_label(colors.error, err);
    }

    interaction
}
