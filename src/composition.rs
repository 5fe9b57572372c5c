//! Map composition.
//!
//! A [`MapComposition`] is everything the map panel draws: the base layers, the two
//! overlays, the layer control and the legend. It can only be built from an
//! [`EarthquakeOverlay`], so no map exists until earthquake data has arrived. The
//! fault-line overlay is filled in later, whenever its feed resolves.
//!
//! [`MapComposer`] accepts the two feed results in either order and produces the
//! composition as soon as the earthquake feed is in.

use serde::{Deserialize, Serialize};

use crate::config::MapConfig;
use crate::fault_lines::{FaultLineSet, Polyline};
use crate::feed::{EarthquakeFeature, EarthquakeFeed};
use crate::geo::GeoPoint;
use crate::reader::FeedLocation;
use crate::legend::{Corner, Legend};
use crate::stylist::{style_for, MarkerStyle};
use crate::tiles::{BaseLayer, TileEndpoint};

/// A feature paired with its visual encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledEarthquake {
    pub feature: EarthquakeFeature,
    pub style: MarkerStyle,
}

/// The earthquake overlay, styled once at construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EarthquakeOverlay {
    markers: Vec<StyledEarthquake>,
}

impl EarthquakeOverlay {
    pub fn from_feed(feed: &EarthquakeFeed) -> Self {
        let markers = feed
            .features
            .iter()
            .map(|feature| StyledEarthquake {
                feature: feature.clone(),
                style: style_for(feature.magnitude),
            })
            .collect();

        Self { markers }
    }

    pub fn markers(&self) -> &[StyledEarthquake] {
        &self.markers
    }

    /// Markers with a positive, finite radius.
    pub fn drawable(&self) -> impl Iterator<Item = (usize, &StyledEarthquake)> {
        self.markers
            .iter()
            .enumerate()
            .filter(|(_, m)| m.style.is_drawable() && m.feature.coordinates.is_finite())
    }

    pub fn get(&self, index: usize) -> Option<&StyledEarthquake> {
        self.markers.get(index)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// State of the asynchronously populated plate boundary overlay.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FaultLineOverlay {
    /// Feed not resolved yet; draws nothing.
    #[default]
    Pending,
    Loaded(FaultLineSet),
    /// Feed failed; draws nothing.
    Unavailable(String),
}

impl FaultLineOverlay {
    pub fn lines(&self) -> &[Polyline] {
        match self {
            FaultLineOverlay::Loaded(set) => &set.lines,
            _ => &[],
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, FaultLineOverlay::Pending)
    }
}

/// The two toggleable overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Overlay {
    FaultLines,
    Earthquakes,
}

impl Overlay {
    pub const ALL: [Overlay; 2] = [Overlay::FaultLines, Overlay::Earthquakes];

    pub fn label(self) -> &'static str {
        match self {
            Overlay::FaultLines => "FaultLines",
            Overlay::Earthquakes => "Earthquakes",
        }
    }
}

/// Active base layer and overlay toggles. Changed only through the layer control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSelection {
    pub base: BaseLayer,
    pub show_fault_lines: bool,
    pub show_earthquakes: bool,
}

impl Default for LayerSelection {
    fn default() -> Self {
        Self {
            base: BaseLayer::Outdoors,
            show_fault_lines: true,
            show_earthquakes: true,
        }
    }
}

impl LayerSelection {
    pub fn is_visible(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::FaultLines => self.show_fault_lines,
            Overlay::Earthquakes => self.show_earthquakes,
        }
    }

    pub fn set_visible(&mut self, overlay: Overlay, visible: bool) {
        match overlay {
            Overlay::FaultLines => self.show_fault_lines = visible,
            Overlay::Earthquakes => self.show_earthquakes = visible,
        }
    }

    pub fn select_base(&mut self, base: BaseLayer) {
        self.base = base;
    }
}

/// How the layer control is presented.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerControlSpec {
    /// Always `false`: the control is permanently expanded.
    pub collapsed: bool,
    pub position: Corner,
    pub base_layers: Vec<BaseLayer>,
    pub overlays: Vec<Overlay>,
}

impl Default for LayerControlSpec {
    fn default() -> Self {
        Self {
            collapsed: false,
            position: Corner::TopRight,
            base_layers: BaseLayer::ALL.to_vec(),
            overlays: Overlay::ALL.to_vec(),
        }
    }
}

/// Initial camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: GeoPoint,
    pub zoom: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BaseLayerSpec {
    pub layer: BaseLayer,
    pub endpoint: TileEndpoint,
}

/// Everything needed to display the map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapComposition {
    base_layers: Vec<BaseLayerSpec>,
    earthquakes: EarthquakeOverlay,
    fault_lines: FaultLineOverlay,
    control: LayerControlSpec,
    legend: Legend,
    view: MapView,
    selection: LayerSelection,
}

impl MapComposition {
    /// Composes a map around an earthquake overlay.
    pub fn new(earthquakes: EarthquakeOverlay, config: &MapConfig) -> Self {
        let token = config.access_token.as_deref();
        let base_layers = BaseLayer::ALL
            .iter()
            .map(|&layer| BaseLayerSpec {
                layer,
                endpoint: TileEndpoint::for_layer(layer, token),
            })
            .collect();

        Self {
            base_layers,
            earthquakes,
            fault_lines: FaultLineOverlay::Pending,
            control: LayerControlSpec::default(),
            legend: Legend::magnitude(),
            view: MapView {
                center: config.center,
                zoom: config.zoom,
            },
            selection: LayerSelection::default(),
        }
    }

    pub fn with_selection(mut self, selection: LayerSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Fills the fault-line overlay. Failures leave it empty.
    pub fn set_fault_lines(&mut self, overlay: FaultLineOverlay) {
        self.fault_lines = overlay;
    }

    pub fn base_layers(&self) -> &[BaseLayerSpec] {
        &self.base_layers
    }

    pub fn earthquakes(&self) -> &EarthquakeOverlay {
        &self.earthquakes
    }

    pub fn fault_lines(&self) -> &FaultLineOverlay {
        &self.fault_lines
    }

    pub fn control(&self) -> &LayerControlSpec {
        &self.control
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    pub fn view(&self) -> MapView {
        self.view
    }

    pub fn selection(&self) -> LayerSelection {
        self.selection
    }

    pub fn selection_mut(&mut self) -> &mut LayerSelection {
        &mut self.selection
    }

    /// Tile endpoint of the active base layer.
    pub fn active_endpoint(&self) -> &TileEndpoint {
        let active = self.selection.base;
        self.base_layers
            .iter()
            .find(|spec| spec.layer == active)
            .map(|spec| &spec.endpoint)
            .unwrap_or(&self.base_layers[0].endpoint)
    }

    /// Markers to draw given the current toggles.
    pub fn visible_markers(&self) -> Vec<(usize, &StyledEarthquake)> {
        if self.selection.show_earthquakes {
            self.earthquakes.drawable().collect()
        } else {
            Vec::new()
        }
    }

    /// Plate boundaries to draw given the current toggles.
    pub fn visible_fault_lines(&self) -> &[Polyline] {
        if self.selection.show_fault_lines {
            self.fault_lines.lines()
        } else {
            &[]
        }
    }
}

/// Collects the two feed results, in either order, into a [`MapComposition`].
pub struct MapComposer {
    config: MapConfig,
    selection: LayerSelection,
    fault_lines: FaultLineOverlay,
    composition: Option<MapComposition>,
}

impl MapComposer {
    pub fn new(config: MapConfig) -> Self {
        Self {
            config,
            selection: LayerSelection::default(),
            fault_lines: FaultLineOverlay::Pending,
            composition: None,
        }
    }

    /// Initial layer selection, e.g. restored from saved preferences.
    pub fn with_selection(mut self, selection: LayerSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Points the next load at a different earthquake feed.
    pub fn set_earthquake_source(&mut self, source: FeedLocation) {
        self.config.earthquake_source = source;
    }

    /// Points the next load at a different fault-line feed.
    pub fn set_fault_source(&mut self, source: FeedLocation) {
        self.config.fault_source = source;
    }

    /// Composes the map from a freshly loaded earthquake feed.
    ///
    /// Any fault-line result that arrived earlier is carried over.
    pub fn earthquakes_loaded(&mut self, feed: &EarthquakeFeed) -> &MapComposition {
        let overlay = EarthquakeOverlay::from_feed(feed);
        let mut composition = MapComposition::new(overlay, &self.config).with_selection(self.selection);
        composition.set_fault_lines(self.fault_lines.clone());

        tracing::info!(
            markers = composition.earthquakes().len(),
            fault_lines = composition.fault_lines().lines().len(),
            "map composed"
        );

        self.composition.insert(composition)
    }

    /// Records the outcome of the fault-line fetch.
    pub fn fault_lines_loaded(&mut self, result: Result<FaultLineSet, String>) {
        let overlay = match result {
            Ok(set) => FaultLineOverlay::Loaded(set),
            Err(reason) => FaultLineOverlay::Unavailable(reason),
        };

        if let Some(composition) = self.composition.as_mut() {
            composition.set_fault_lines(overlay.clone());
        }
        self.fault_lines = overlay;
    }

    pub fn composition(&self) -> Option<&MapComposition> {
        self.composition.as_ref()
    }

    pub fn fault_lines(&self) -> &FaultLineOverlay {
        &self.fault_lines
    }

    /// Current layer selection, whether or not a map exists yet.
    pub fn selection(&self) -> LayerSelection {
        self.composition
            .as_ref()
            .map(MapComposition::selection)
            .unwrap_or(self.selection)
    }

    pub fn update_selection(&mut self, selection: LayerSelection) {
        self.selection = selection;
        if let Some(composition) = self.composition.as_mut() {
            *composition.selection_mut() = selection;
        }
    }

    /// Drops the map and both feed results ahead of a reload. The layer selection survives.
    pub fn reset(&mut self) {
        self.selection = self.selection();
        self.composition = None;
        self.fault_lines = FaultLineOverlay::Pending;
    }
}
