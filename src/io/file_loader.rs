//! Background fetch state.

/// Holds the state of one background feed fetch.
///
/// Only the in_progress flag is shared; results come through a channel.
/// This struct is wrapped in an `Arc<Mutex<>>` so the GUI thread can poll it
/// while the fetch thread updates it.
pub struct LoadingState {
    /// True while a fetch is running
    pub in_progress: bool,
}

impl LoadingState {
    /// Creates a new loading state that is not in progress.
    pub fn new() -> Self {
        Self {
            in_progress: false,
        }
    }
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}
