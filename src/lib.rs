pub mod error;
pub mod config;
pub mod geo;
pub mod feed;
pub mod fault_lines;
pub mod reader;
pub mod synthetic;
pub mod writer;
pub mod stylist;
pub mod legend;
pub mod tiles;
pub mod composition;
pub mod theme;

// Export feed model and readers
pub use feed::{EarthquakeFeed, EarthquakeFeature};
pub use fault_lines::{FaultLineSet, Polyline, LineStyle, FAULT_LINE_STYLE, split_antimeridian};
pub use reader::{FeedReader, FeedLocation, HttpFeedReader, FileFeedReader};
pub use synthetic::SyntheticFeedReader;
pub use writer::FeedWriter;
pub use geo::GeoPoint;

// Export styling and composition
pub use stylist::{
    ColorToken, MagnitudeBucket, MarkerStyle, PALETTE,
    bucket_for, color_for, radius_for, style_for
};
pub use legend::{Corner, Legend, LegendEntry};
pub use tiles::{BaseLayer, TileEndpoint};
pub use composition::{
    MapComposer, MapComposition, EarthquakeOverlay, FaultLineOverlay,
    LayerSelection, LayerControlSpec, Overlay, StyledEarthquake, MapView
};

// Export configuration and errors
pub use config::MapConfig;
pub use error::{FeedError, ConfigError};

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, with_alpha};
