//! Floating boxes anchored to a corner of the map.

use eframe::egui;
use egui::{Align2, Pos2, Rect, Stroke};
use quakemap::{Corner, ThemeColors};

/// Gap between a floating box and the map edge.
const EDGE_MARGIN: f32 = 10.0;

/// Screen anchor for a box pinned to `corner` of `map_rect`.
pub fn corner_anchor(corner: Corner, map_rect: Rect) -> (Align2, Pos2) {
    let inset = egui::vec2(EDGE_MARGIN, EDGE_MARGIN);
    match corner {
        Corner::TopLeft => (Align2::LEFT_TOP, map_rect.left_top() + inset),
        Corner::TopRight => (Align2::RIGHT_TOP, map_rect.right_top() + egui::vec2(-inset.x, inset.y)),
        Corner::BottomLeft => (Align2::LEFT_BOTTOM, map_rect.left_bottom() + egui::vec2(inset.x, -inset.y)),
        Corner::BottomRight => (Align2::RIGHT_BOTTOM, map_rect.right_bottom() - inset),
    }
}

/// Shows `add_contents` in a translucent box pinned to `corner` of the map.
pub fn show_overlay<R>(
    ctx: &egui::Context,
    id: &str,
    corner: Corner,
    map_rect: Rect,
    colors: &ThemeColors,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let (pivot, pos) = corner_anchor(corner, map_rect);

    egui::Area::new(egui::Id::new(id))
        .order(egui::Order::Foreground)
        .pivot(pivot)
        .fixed_pos(pos)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(colors.overlay_background)
                .stroke(Stroke::new(1.0, colors.border))
                .corner_radius(5.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.visuals_mut().override_text_color = Some(colors.overlay_text);
                    add_contents(ui)
                })
                .inner
        })
        .inner
}
