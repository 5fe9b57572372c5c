//! Utility modules for the earthquake map viewer.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_depth, format_event_time, format_magnitude, format_thousands};
