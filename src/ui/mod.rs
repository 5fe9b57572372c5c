//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the earthquake map viewer:
//! - Header panel (feed controls, reset view, theme selector)
//! - Map panel (the map itself, or a loading/error placeholder)
//! - Layer control and legend (floating boxes over the map)
//! - Details panel (selected earthquake)
//! - Status bar (feed summary)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod map_panel;
pub mod overlay;
pub mod layer_control;
pub mod legend_panel;
pub mod details_panel;
pub mod status_bar;
pub mod panel_manager;
