//! Tectonic plate boundary layer.

use eframe::egui;
use egui::{Pos2, Shape};
use quakemap::{split_antimeridian, Polyline, FAULT_LINE_STYLE};
use walkers::{lon_lat, MapMemory, Plugin, Projector};

use crate::presentation::color_mapping;

/// Draws plate boundaries as unfilled orange polylines.
pub struct FaultLineLayer<'a> {
    lines: &'a [Polyline],
}

impl<'a> FaultLineLayer<'a> {
    pub fn new(lines: &'a [Polyline]) -> Self {
        Self { lines }
    }
}

impl Plugin for FaultLineLayer<'_> {
    fn run(
        self: Box<Self>,
        ui: &mut egui::Ui,
        _response: &egui::Response,
        projector: &Projector,
        _map_memory: &MapMemory,
    ) {
        let stroke = color_mapping::line_stroke(&FAULT_LINE_STYLE);
        let clip = ui.clip_rect();
        let painter = ui.painter();

        for line in self.lines {
            for segment in split_antimeridian(line) {
                let points: Vec<Pos2> = segment
                    .iter()
                    .map(|p| projector.project(lon_lat(p.lon, p.lat)).to_pos2())
                    .collect();

                if !clip.intersects(egui::Rect::from_points(&points)) {
                    continue;
                }
                painter.add(Shape::line(points, stroke));
            }
        }
    }
}
