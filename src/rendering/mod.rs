//! Rendering subsystem for drawing the map
//!
//! This module contains the map-level drawing logic:
//! - Tile source adapter for the base layers
//! - Earthquake marker layer (circles, hit testing, hover label)
//! - Fault-line layer (plate boundary polylines)
//! - Map view (assembles tiles and layers into one `walkers` map)

pub mod tile_source;
pub mod earthquake_plugin;
pub mod fault_line_plugin;
pub mod map_view;
