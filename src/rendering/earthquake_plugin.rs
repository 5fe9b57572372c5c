//! Earthquake marker layer.
//!
//! Markers are circles with a radius fixed in metres, so their on-screen size follows the
//! zoom level. The pixel radius is measured by projecting a point the marker's radius
//! north of its center.

use eframe::egui;
use egui::{Color32, Pos2, Stroke};
use quakemap::{StyledEarthquake, ThemeColors};
use walkers::{lon_lat, MapMemory, Plugin, Projector};

use crate::presentation::color_mapping;
use crate::utils::format_magnitude;

/// Outline width of every marker, drawn in the fill color.
const MARKER_STROKE_WIDTH: f32 = 3.0;

/// Markers smaller than this on screen are still clickable at this radius.
const MIN_HIT_RADIUS: f32 = 4.0;

/// Pointer interaction with the marker layer during one frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MarkerHits {
    /// Topmost marker under the pointer
    pub hovered: Option<usize>,
    /// Topmost marker under a click
    pub clicked: Option<usize>,
    /// The map was clicked away from any marker
    pub clicked_empty: bool,
}

/// A marker after projection to screen space.
struct ScreenMarker<'a> {
    index: usize,
    center: Pos2,
    radius: f32,
    marker: &'a StyledEarthquake,
}

/// Draws the visible markers and reports pointer hits.
pub struct EarthquakeLayer<'a> {
    markers: Vec<(usize, &'a StyledEarthquake)>,
    selected: Option<usize>,
    colors: &'a ThemeColors,
    hits: &'a mut MarkerHits,
}

impl<'a> EarthquakeLayer<'a> {
    pub fn new(
        markers: Vec<(usize, &'a StyledEarthquake)>,
        selected: Option<usize>,
        colors: &'a ThemeColors,
        hits: &'a mut MarkerHits,
    ) -> Self {
        Self {
            markers,
            selected,
            colors,
            hits,
        }
    }
}

impl Plugin for EarthquakeLayer<'_> {
    fn run(
        self: Box<Self>,
        ui: &mut egui::Ui,
        response: &egui::Response,
        projector: &Projector,
        _map_memory: &MapMemory,
    ) {
        let EarthquakeLayer {
            markers,
            selected,
            colors,
            hits,
        } = *self;

        let screen: Vec<ScreenMarker> = markers
            .iter()
            .map(|&(index, marker)| project_marker(projector, index, marker))
            .collect();

        let painter = ui.painter();
        for marker in &screen {
            let fill = color_mapping::marker_color(marker.marker.style.color, marker.marker.style.fill_opacity);
            let outline = color_mapping::marker_color(marker.marker.style.color, 1.0);
            painter.circle(marker.center, marker.radius, fill, Stroke::new(MARKER_STROKE_WIDTH, outline));
        }

        if let Some(selected) = selected.and_then(|i| screen.iter().find(|m| m.index == i)) {
            painter.circle_stroke(
                selected.center,
                selected.radius + MARKER_STROKE_WIDTH,
                Stroke::new(2.0, colors.highlight),
            );
        }

        hits.hovered = response.hover_pos().and_then(|pos| topmost_at(&screen, pos));

        if response.clicked() {
            match response.interact_pointer_pos().and_then(|pos| topmost_at(&screen, pos)) {
                Some(index) => hits.clicked = Some(index),
                None => hits.clicked_empty = true,
            }
        }

        if let (Some(index), Some(pos)) = (hits.hovered, response.hover_pos()) {
            if let Some(marker) = screen.iter().find(|m| m.index == index) {
                draw_hover_label(ui, pos, marker.marker, colors);
            }
        }
    }
}

fn project_marker<'m>(projector: &Projector, index: usize, marker: &'m StyledEarthquake) -> ScreenMarker<'m> {
    let point = marker.feature.coordinates;
    let edge = point.offset_north(marker.style.radius_m);

    let center = projector.project(lon_lat(point.lon, point.lat)).to_pos2();
    let edge = projector.project(lon_lat(edge.lon, edge.lat)).to_pos2();

    ScreenMarker {
        index,
        center,
        radius: center.distance(edge),
        marker,
    }
}

/// Later markers are drawn over earlier ones, so search from the end.
fn topmost_at(screen: &[ScreenMarker], pos: Pos2) -> Option<usize> {
    screen
        .iter()
        .rev()
        .find(|m| m.center.distance(pos) <= m.radius.max(MIN_HIT_RADIUS) + MARKER_STROKE_WIDTH / 2.0)
        .map(|m| m.index)
}

fn draw_hover_label(ui: &egui::Ui, pointer: Pos2, marker: &StyledEarthquake, colors: &ThemeColors) {
    let text = format!(
        "{}  {}",
        format_magnitude(marker.feature.magnitude),
        marker.feature.place
    );
    let font_id = egui::FontId::proportional(12.0);
    let painter = ui.painter();
    let galley = painter.layout_no_wrap(text, font_id, colors.overlay_text);

    let padding = egui::vec2(4.0, 2.0);
    let min = pointer + egui::vec2(12.0, 12.0);
    let bg_rect = egui::Rect::from_min_size(min, galley.size() + padding * 2.0);

    painter.rect_filled(bg_rect, 2.0, colors.overlay_background);
    painter.rect_stroke(bg_rect, 2.0, Stroke::new(1.0, colors.border), egui::StrokeKind::Outside);
    painter.galley(min + padding, galley, Color32::PLACEHOLDER);
}

#[cfg(test)]
mod tests {
    use super::*;
    use quakemap::{style_for, EarthquakeFeature, GeoPoint};

    fn styled(magnitude: f64) -> StyledEarthquake {
        StyledEarthquake {
            feature: EarthquakeFeature {
                id: None,
                place: String::new(),
                time_ms: None,
                magnitude,
                coordinates: GeoPoint::new(0.0, 0.0),
                depth_km: None,
                url: None,
            },
            style: style_for(magnitude),
        }
    }

    #[test]
    fn test_topmost_marker_wins() {
        let small = styled(1.0);
        let large = styled(5.0);
        let screen = vec![
            ScreenMarker { index: 0, center: Pos2::new(100.0, 100.0), radius: 30.0, marker: &large },
            ScreenMarker { index: 1, center: Pos2::new(110.0, 100.0), radius: 10.0, marker: &small },
        ];

        assert_eq!(topmost_at(&screen, Pos2::new(110.0, 100.0)), Some(1));
        assert_eq!(topmost_at(&screen, Pos2::new(80.0, 100.0)), Some(0));
        assert_eq!(topmost_at(&screen, Pos2::new(300.0, 300.0)), None);
    }

    #[test]
    fn test_tiny_markers_remain_clickable() {
        let tiny = styled(0.1);
        let screen = vec![ScreenMarker { index: 7, center: Pos2::new(50.0, 50.0), radius: 0.5, marker: &tiny }];
        assert_eq!(topmost_at(&screen, Pos2::new(54.0, 50.0)), Some(7));
    }
}
