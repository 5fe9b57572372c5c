//! Text formatting utilities for the earthquake map viewer.
//!
//! This module provides helper functions for formatting feed values in a human-readable way.

use chrono::{DateTime, Utc};

/// Formats an integer with thousands separators for readability.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_thousands(1000), "1,000");
/// assert_eq!(format_thousands(-1234567), "-1,234,567");
/// ```
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut result = String::new();
    if value < 0 {
        result.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

/// Formats an event time given in epoch milliseconds as a UTC timestamp.
///
/// Missing or out-of-range times are shown as "unknown".
pub fn format_event_time(time_ms: Option<i64>) -> String {
    time_ms
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|time| time.format("%a %b %d %Y %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Formats a magnitude the way seismic feeds label events ("M 4.5").
pub fn format_magnitude(magnitude: f64) -> String {
    if magnitude.is_finite() {
        format!("M {:.1}", magnitude)
    } else {
        "M ?".to_string()
    }
}

/// Formats a hypocenter depth in kilometres.
pub fn format_depth(depth_km: Option<f64>) -> String {
    match depth_km {
        Some(depth) if depth.is_finite() => format!("{:.1} km", depth),
        _ => "unknown".to_string(),
    }
}
