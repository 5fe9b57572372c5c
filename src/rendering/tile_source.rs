//! Adapter from [`TileEndpoint`] to the `walkers` tile source trait.

use quakemap::TileEndpoint;
use walkers::sources::{Attribution, TileSource};
use walkers::TileId;

/// A `walkers` tile source backed by a resolved endpoint.
pub struct EndpointTiles {
    endpoint: TileEndpoint,
}

impl EndpointTiles {
    pub fn new(endpoint: TileEndpoint) -> Self {
        Self { endpoint }
    }
}

impl TileSource for EndpointTiles {
    fn tile_url(&self, tile_id: TileId) -> String {
        self.endpoint.tile_url(tile_id.x, tile_id.y, tile_id.zoom)
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: self.endpoint.attribution,
            url: self.endpoint.attribution_url,
            logo_light: None,
            logo_dark: None,
        }
    }

    fn max_zoom(&self) -> u8 {
        self.endpoint.max_zoom
    }
}
