//! Slippy map camera and tile caches.

use std::collections::HashMap;

use quakemap::{BaseLayer, GeoPoint, TileEndpoint};
use walkers::{lon_lat, HttpTiles, MapMemory, Position};

use crate::rendering::tile_source::EndpointTiles;

/// Camera and per-layer tile caches.
///
/// Each base layer keeps its own [`HttpTiles`] so switching back to a layer reuses the
/// tiles already downloaded. Caches are created on first use.
pub struct MapViewState {
    memory: MapMemory,
    tiles: HashMap<BaseLayer, HttpTiles>,
    /// Position the camera returns to on reset
    home: Position,
    home_zoom: f64,
}

impl MapViewState {
    pub fn new(center: GeoPoint, zoom: f64) -> Self {
        let mut state = Self {
            memory: MapMemory::default(),
            tiles: HashMap::new(),
            home: lon_lat(center.lon, center.lat),
            home_zoom: zoom,
        };
        state.reset_view();
        state
    }

    /// Returns the camera to the initial center and zoom.
    pub fn reset_view(&mut self) {
        self.memory.follow_my_position();
        if let Err(e) = self.memory.set_zoom(self.home_zoom) {
            tracing::warn!(zoom = self.home_zoom, error = ?e, "initial zoom rejected");
        }
    }

    pub fn home(&self) -> Position {
        self.home
    }

    /// Split borrow of the tile cache for `layer` and the camera, as `walkers::Map` needs both.
    pub fn parts(
        &mut self,
        layer: BaseLayer,
        endpoint: &TileEndpoint,
        ctx: &egui::Context,
    ) -> (&mut HttpTiles, &mut MapMemory) {
        let tiles = self.tiles.entry(layer).or_insert_with(|| {
            tracing::debug!(layer = layer.label(), "creating tile cache");
            HttpTiles::new(EndpointTiles::new(endpoint.clone()), ctx.clone())
        });
        (tiles, &mut self.memory)
    }
}
