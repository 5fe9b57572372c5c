//! Generic settings persistence coordination.
//!
//! Provides a reusable API for persisting application settings to storage.
//! This module follows the same pattern as ThemeCoordinator but is designed
//! to be generic and extensible for any serializable settings.

use serde::{Deserialize, Serialize};

/// Coordinates generic settings persistence.
///
/// This coordinator provides type-safe loading and saving of any serializable
/// settings to eframe's persistent storage. Settings are stored as JSON strings.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a default fallback.
    ///
    /// # Type Parameters
    /// * `T` - The type to deserialize, must implement Deserialize and Default
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    ///
    /// # Returns
    /// The deserialized value if found and valid, otherwise the default value for type T
    ///
    /// # Examples
    /// ```ignore
    /// let layers: LayerSelection = SettingsCoordinator::load_setting(storage, "layer_selection");
    /// ```
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        Self::try_load_setting(storage, key).unwrap_or_default()
    }

    /// Saves a setting to persistent storage.
    ///
    /// # Type Parameters
    /// * `T` - The type to serialize, must implement Serialize
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface (mutable)
    /// * `key` - The storage key for this setting
    /// * `value` - The value to serialize and save
    ///
    /// # Examples
    /// ```ignore
    /// SettingsCoordinator::save_setting(storage, "layer_selection", &state.composer.selection());
    /// ```
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
        }
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    ///
    /// # Type Parameters
    /// * `T` - The type to deserialize, must implement Deserialize
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    ///
    /// # Returns
    /// Some(value) if found and valid, None otherwise
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let storage = storage?;
        let json_str = storage.get_string(key)?;
        serde_json::from_str(&json_str).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quakemap::{BaseLayer, LayerSelection};
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_save_and_load_simple() {
        let mut storage = MockStorage::new();
        SettingsCoordinator::save_setting(&mut storage, "test_key", &42i32);

        let loaded: i32 = SettingsCoordinator::load_setting(Some(&storage), "test_key");
        assert_eq!(loaded, 42);
    }

    #[test]
    fn test_load_with_default() {
        let storage = MockStorage::new();
        let loaded: LayerSelection = SettingsCoordinator::load_setting(Some(&storage), "missing_key");
        assert_eq!(loaded, LayerSelection::default());

        let loaded: LayerSelection = SettingsCoordinator::load_setting(None, "missing_key");
        assert_eq!(loaded, LayerSelection::default());
    }

    #[test]
    fn test_layer_selection_round_trip() {
        let mut storage = MockStorage::new();
        let selection = LayerSelection {
            base: BaseLayer::Greyscale,
            show_fault_lines: false,
            show_earthquakes: true,
        };

        SettingsCoordinator::save_setting(&mut storage, "layers", &selection);
        let loaded: LayerSelection = SettingsCoordinator::load_setting(Some(&storage), "layers");
        assert_eq!(loaded, selection);
    }

    #[test]
    fn test_corrupt_setting_falls_back() {
        let mut storage = MockStorage::new();
        eframe::Storage::set_string(&mut storage, "layers", "{\"base\": \"Terrain\"}".to_string());

        let loaded: LayerSelection = SettingsCoordinator::load_setting(Some(&storage), "layers");
        assert_eq!(loaded, LayerSelection::default());

        let result: Option<LayerSelection> = SettingsCoordinator::try_load_setting(Some(&storage), "layers");
        assert_eq!(result, None);
    }

    #[test]
    fn test_theme_preference() {
        use crate::app::ThemeCoordinator;
        use quakemap::theme::DEFAULT_THEME;

        let mut storage = MockStorage::new();
        assert_eq!(ThemeCoordinator::load_theme_from_storage(Some(&storage)), DEFAULT_THEME);

        ThemeCoordinator::save_theme_to_storage(&mut storage, "Dark");
        assert_eq!(ThemeCoordinator::load_theme_from_storage(Some(&storage)), "Dark");
    }
}
