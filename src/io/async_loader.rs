//! Asynchronous feed loading.
//!
//! Each feed is fetched once on its own background thread so the map stays responsive
//! while the network is slow. The two feeds use independent loaders and neither waits
//! for the other.

use eframe::egui;
use quakemap::{EarthquakeFeed, FaultLineSet, FeedLocation, FeedReader};
use std::sync::{Arc, Mutex};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::Duration;
use crate::io::LoadingState;

/// Result of a completed feed fetch.
pub enum LoadResult<T> {
    /// Fetch completed successfully
    Success {
        /// The decoded feed
        data: T,
        /// Where it was read from
        source: FeedLocation,
    },
    /// Fetch failed with an error
    Error(String),
    /// No fetch finished since the last check
    None,
}

/// Runs single-shot fetches of one kind of feed on a background thread.
///
/// Starting a new fetch while one is running abandons the old one: its result is
/// dropped when the thread tries to send it, and it only clears its own loading state.
pub struct FeedLoader<T> {
    /// Short name used in logs ("earthquakes", "fault lines")
    label: &'static str,

    /// Loading state shared with the running fetch; replaced on every start
    loading_state: Arc<Mutex<LoadingState>>,

    /// Channel receiver for the running fetch
    loading_receiver: Option<Receiver<Result<T, String>>>,

    /// Source of the running fetch
    pending_source: Option<FeedLocation>,
}

impl<T: Send + 'static> FeedLoader<T> {
    /// Creates a loader with no active fetch.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            loading_receiver: None,
            pending_source: None,
        }
    }

    /// Checks if a fetch is currently in progress.
    pub fn is_loading(&self) -> bool {
        self.loading_state
            .lock()
            .map(|state| state.in_progress)
            .unwrap_or(false)
    }

    /// Source of the fetch in progress, if any.
    pub fn pending_source(&self) -> Option<&FeedLocation> {
        self.pending_source.as_ref()
    }

    /// Starts fetching `source` in the background.
    ///
    /// `read` receives the reader matching the source and the target string to pass to it.
    /// Call `check_completion()` once per frame to pick up the result.
    pub fn start<F>(&mut self, source: FeedLocation, request_timeout: Duration, ctx: &egui::Context, read: F)
    where
        F: FnOnce(&dyn FeedReader, &str) -> anyhow::Result<T> + Send + 'static,
    {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);
        self.loading_state = Arc::new(Mutex::new(LoadingState { in_progress: true }));
        self.pending_source = Some(source.clone());

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();
        let label = self.label;

        tracing::info!(feed = label, source = %source.describe(), "starting fetch");

        thread::spawn(move || {
            let result = source
                .reader(request_timeout)
                .and_then(|reader| read(&*reader, &source.target()))
                .map_err(|e| format!("{:#}", e));

            if let Err(error) = &result {
                tracing::warn!(feed = label, %error, "fetch failed");
            }

            // Receiver is gone if a newer fetch replaced this one.
            let _ = sender.send(result);

            if let Ok(mut state) = loading_state.lock() {
                state.in_progress = false;
            }

            ctx_handle.request_repaint();
        });
    }

    /// Checks if the background fetch has completed and returns the result if available.
    ///
    /// # Returns
    /// * `LoadResult::Success` - Fetch completed successfully
    /// * `LoadResult::Error` - Fetch failed
    /// * `LoadResult::None` - Still running, or nothing was started
    pub fn check_completion(&mut self) -> LoadResult<T> {
        let Some(receiver) = &self.loading_receiver else {
            return LoadResult::None;
        };

        let Ok(result) = receiver.try_recv() else {
            return LoadResult::None;
        };

        self.loading_receiver = None;
        let source = self.pending_source.take();

        match (result, source) {
            (Ok(data), Some(source)) => LoadResult::Success { data, source },
            (Ok(_), None) => LoadResult::Error("fetch finished without a source".to_string()),
            (Err(error_msg), _) => LoadResult::Error(error_msg),
        }
    }
}

/// The two independent loaders the viewer needs.
pub struct FeedLoaders {
    pub earthquakes: FeedLoader<EarthquakeFeed>,
    pub fault_lines: FeedLoader<FaultLineSet>,
}

impl FeedLoaders {
    pub fn new() -> Self {
        Self {
            earthquakes: FeedLoader::new("earthquakes"),
            fault_lines: FeedLoader::new("fault lines"),
        }
    }

    /// Starts the earthquake fetch.
    pub fn start_earthquakes(&mut self, source: FeedLocation, request_timeout: Duration, ctx: &egui::Context) {
        self.earthquakes
            .start(source, request_timeout, ctx, |reader, target| reader.read_earthquakes(target));
    }

    /// Starts the fault-line fetch.
    pub fn start_fault_lines(&mut self, source: FeedLocation, request_timeout: Duration, ctx: &egui::Context) {
        self.fault_lines
            .start(source, request_timeout, ctx, |reader, target| reader.read_fault_lines(target));
    }

    pub fn is_loading(&self) -> bool {
        self.earthquakes.is_loading() || self.fault_lines.is_loading()
    }
}

impl Default for FeedLoaders {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn wait_for<T: Send + 'static>(loader: &mut FeedLoader<T>) -> LoadResult<T> {
        let deadline = Instant::now() + Duration::from_secs(10);
        while Instant::now() < deadline {
            match loader.check_completion() {
                LoadResult::None => thread::sleep(Duration::from_millis(5)),
                done => return done,
            }
        }
        LoadResult::None
    }

    #[test]
    fn test_loader_creation() {
        let loaders = FeedLoaders::new();
        assert!(!loaders.is_loading());
        assert!(loaders.earthquakes.pending_source().is_none());
    }

    #[test]
    fn test_check_completion_when_idle() {
        let mut loader: FeedLoader<EarthquakeFeed> = FeedLoader::new("test");
        assert!(matches!(loader.check_completion(), LoadResult::None));
    }

    #[test]
    fn test_synthetic_fetch_completes() {
        let ctx = egui::Context::default();
        let mut loaders = FeedLoaders::new();
        let source = FeedLocation::Synthetic { seed: 5 };

        loaders.start_earthquakes(source.clone(), Duration::from_secs(1), &ctx);
        match wait_for(&mut loaders.earthquakes) {
            LoadResult::Success { data, source: loaded_from } => {
                assert!(!data.is_empty());
                assert_eq!(loaded_from, source);
            }
            _ => panic!("synthetic fetch should succeed"),
        }
    }

    #[test]
    fn test_missing_file_reports_error() {
        let ctx = egui::Context::default();
        let mut loaders = FeedLoaders::new();
        loaders.start_fault_lines(
            FeedLocation::File("/no/such/plates.json".into()),
            Duration::from_secs(1),
            &ctx,
        );

        match wait_for(&mut loaders.fault_lines) {
            LoadResult::Error(msg) => assert!(msg.contains("Failed to open file")),
            _ => panic!("missing file should fail"),
        }
    }

    #[test]
    fn test_fetches_complete_independently() {
        let ctx = egui::Context::default();
        let mut loaders = FeedLoaders::new();
        let source = FeedLocation::Synthetic { seed: 11 };

        loaders.start_fault_lines(source.clone(), Duration::from_secs(1), &ctx);
        loaders.start_earthquakes(source, Duration::from_secs(1), &ctx);

        // Either loader can be drained first.
        assert!(matches!(wait_for(&mut loaders.fault_lines), LoadResult::Success { .. }));
        assert!(matches!(wait_for(&mut loaders.earthquakes), LoadResult::Success { .. }));
    }

    #[test]
    fn test_abandoned_fetch_does_not_clear_newer_fetch() {
        let ctx = egui::Context::default();
        let mut loader: FeedLoader<u32> = FeedLoader::new("test");
        let source = FeedLocation::Synthetic { seed: 1 };
        let (release_first, first_gate) = channel::<()>();
        let (release_second, second_gate) = channel::<()>();

        loader.start(source.clone(), Duration::from_secs(1), &ctx, move |_, _| {
            let _ = first_gate.recv();
            Ok(1)
        });
        loader.start(source, Duration::from_secs(1), &ctx, move |_, _| {
            let _ = second_gate.recv();
            Ok(2)
        });

        release_first.send(()).unwrap();
        thread::sleep(Duration::from_millis(100));
        assert!(loader.is_loading());
        assert!(matches!(loader.check_completion(), LoadResult::None));

        release_second.send(()).unwrap();
        match wait_for(&mut loader) {
            LoadResult::Success { data, .. } => assert_eq!(data, 2),
            _ => panic!("second fetch should succeed"),
        }
    }
}
