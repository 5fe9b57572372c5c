//! Selection and hover state management.
//!
//! Markers are identified by their index in the composed
//! [`EarthquakeOverlay`](quakemap::EarthquakeOverlay), which stays stable until the
//! next feed load.

/// State related to user selection and hover.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Marker whose details are shown
    selected_marker: Option<usize>,
    /// Marker under the pointer this frame
    hovered_marker: Option<usize>,
}

impl SelectionState {
    /// Creates a new selection state with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all selection and hover state.
    pub fn clear(&mut self) {
        self.selected_marker = None;
        self.hovered_marker = None;
    }

    pub fn selected_marker(&self) -> Option<usize> {
        self.selected_marker
    }

    pub fn hovered_marker(&self) -> Option<usize> {
        self.hovered_marker
    }

    /// Selects a marker. Clicking the selected marker again deselects it.
    ///
    /// Returns true if the marker is selected afterwards.
    pub fn toggle_marker(&mut self, index: usize) -> bool {
        if self.selected_marker == Some(index) {
            self.selected_marker = None;
            false
        } else {
            self.selected_marker = Some(index);
            true
        }
    }

    pub fn deselect(&mut self) {
        self.selected_marker = None;
    }

    pub fn set_hovered(&mut self, index: Option<usize>) {
        self.hovered_marker = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_marker() {
        let mut selection = SelectionState::new();
        assert!(selection.toggle_marker(3));
        assert_eq!(selection.selected_marker(), Some(3));

        assert!(selection.toggle_marker(5));
        assert_eq!(selection.selected_marker(), Some(5));

        assert!(!selection.toggle_marker(5));
        assert_eq!(selection.selected_marker(), None);
    }

    #[test]
    fn test_clear_drops_hover() {
        let mut selection = SelectionState::new();
        selection.toggle_marker(1);
        selection.set_hovered(Some(2));
        selection.clear();
        assert_eq!(selection.selected_marker(), None);
        assert_eq!(selection.hovered_marker(), None);
    }
}
