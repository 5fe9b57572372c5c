//! Base layer tile endpoints.
//!
//! With an access token every base layer is a Mapbox v4 style. Without one, each layer
//! falls back to a keyless public service with a comparable look so the map still has a
//! background.

use serde::{Deserialize, Serialize};

/// Mapbox v4 raster tile URL template.
pub const MAPBOX_URL_TEMPLATE: &str =
    "https://api.tiles.mapbox.com/v4/{id}/{z}/{x}/{y}.png?access_token={accessToken}";

pub const MAPBOX_MAX_ZOOM: u8 = 18;

const MAPBOX_ATTRIBUTION: &str =
    "Map data © OpenStreetMap contributors, CC-BY-SA, Imagery © Mapbox";
const MAPBOX_ATTRIBUTION_URL: &str = "https://www.mapbox.com/";

/// One of the mutually exclusive background styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseLayer {
    Satellite,
    Greyscale,
    Outdoors,
}

impl BaseLayer {
    /// All base layers in the order the layer control lists them.
    pub const ALL: [BaseLayer; 3] = [BaseLayer::Satellite, BaseLayer::Greyscale, BaseLayer::Outdoors];

    pub fn label(self) -> &'static str {
        match self {
            BaseLayer::Satellite => "Satellite",
            BaseLayer::Greyscale => "Greyscale",
            BaseLayer::Outdoors => "Outdoors",
        }
    }

    /// Mapbox tileset id substituted for `{id}`.
    pub fn mapbox_id(self) -> &'static str {
        match self {
            BaseLayer::Satellite => "mapbox.satellite",
            BaseLayer::Greyscale => "mapbox.light",
            BaseLayer::Outdoors => "mapbox.outdoors",
        }
    }
}

impl Default for BaseLayer {
    fn default() -> Self {
        BaseLayer::Outdoors
    }
}

/// A resolved tile URL template for one base layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileEndpoint {
    /// Template still containing `{z}`, `{x}` and `{y}`.
    template: String,
    pub attribution: &'static str,
    pub attribution_url: &'static str,
    pub max_zoom: u8,
}

impl TileEndpoint {
    /// Picks the endpoint for `layer`. An empty or missing token selects the keyless fallback.
    pub fn for_layer(layer: BaseLayer, access_token: Option<&str>) -> Self {
        match access_token.filter(|t| !t.trim().is_empty()) {
            Some(token) => Self::mapbox(layer, token),
            None => Self::keyless(layer),
        }
    }

    fn mapbox(layer: BaseLayer, token: &str) -> Self {
        let template = MAPBOX_URL_TEMPLATE
            .replace("{id}", layer.mapbox_id())
            .replace("{accessToken}", token);

        Self {
            template,
            attribution: MAPBOX_ATTRIBUTION,
            attribution_url: MAPBOX_ATTRIBUTION_URL,
            max_zoom: MAPBOX_MAX_ZOOM,
        }
    }

    fn keyless(layer: BaseLayer) -> Self {
        match layer {
            BaseLayer::Satellite => Self {
                template: "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}"
                    .to_string(),
                attribution: "Tiles © Esri",
                attribution_url: "https://www.esri.com/",
                max_zoom: 18,
            },
            BaseLayer::Greyscale => Self {
                template: "https://basemaps.cartocdn.com/light_all/{z}/{x}/{y}.png".to_string(),
                attribution: "© OpenStreetMap contributors © CARTO",
                attribution_url: "https://carto.com/attributions",
                max_zoom: 18,
            },
            BaseLayer::Outdoors => Self {
                template: "https://tile.opentopomap.org/{z}/{x}/{y}.png".to_string(),
                attribution: "Map data © OpenStreetMap contributors, SRTM | Map style © OpenTopoMap",
                attribution_url: "https://opentopomap.org/",
                max_zoom: 17,
            },
        }
    }

    /// URL of a single slippy-map tile.
    pub fn tile_url(&self, x: u32, y: u32, zoom: u8) -> String {
        self.template
            .replace("{z}", &zoom.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }

    pub fn uses_mapbox(&self) -> bool {
        self.template.starts_with("https://api.tiles.mapbox.com/")
    }
}
