//! State management modules for the earthquake map viewer.
//!
//! This module contains state-only logic (no panel layout):
//! - Feed state (sources, load timestamps, fault-line status)
//! - Map view state (camera memory, tile caches)
//! - Selection state (selected and hovered markers)
//! - Theme state (theme manager, current theme)

mod feed_state;
mod map_state;
mod selection;
mod theme_state;

pub use feed_state::FeedState;
pub use map_state::MapViewState;
pub use selection::SelectionState;
pub use theme_state::ThemeState;
