//! Assembles the base layer and overlays into one `walkers` map widget.

use eframe::egui;
use quakemap::{MapComposition, ThemeColors};
use walkers::Map;

use crate::rendering::earthquake_plugin::{EarthquakeLayer, MarkerHits};
use crate::rendering::fault_line_plugin::FaultLineLayer;
use crate::state::MapViewState;

/// Draws the composed map filling the available space.
///
/// Fault lines are drawn under the markers. Hidden overlays are not drawn at all.
/// Returns the pointer hits on markers and the rectangle the map occupies.
pub fn show_map(
    ui: &mut egui::Ui,
    composition: &MapComposition,
    map: &mut MapViewState,
    selected: Option<usize>,
    colors: &ThemeColors,
) -> (MarkerHits, egui::Rect) {
    let selection = composition.selection();
    let home = map.home();
    let ctx = ui.ctx().clone();
    let (tiles, memory) = map.parts(selection.base, composition.active_endpoint(), &ctx);

    let mut hits = MarkerHits::default();
    let response = {
        let map_widget = Map::new(Some(tiles), memory, home)
            .with_plugin(FaultLineLayer::new(composition.visible_fault_lines()))
            .with_plugin(EarthquakeLayer::new(
                composition.visible_markers(),
                selected,
                colors,
                &mut hits,
            ));
        ui.add(map_widget)
    };

    (hits, response.rect)
}
