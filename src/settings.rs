//! Game settings and preferences
//!
//! Read once at startup: from LocalStorage on the web, from a JSON file named
//! by `EGG_DROP_SETTINGS` on native builds. Anything missing falls back to the
//! defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::CLICK_DEBOUNCE_MS;

/// Failure to read a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("click_debounce_ms must be a finite, non-negative number (got {0})")]
    InvalidDebounce(f64),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,
    /// Minimum gap between accepted button clicks
    pub click_debounce_ms: f64,
    /// Let the computer steer the basket
    pub autopilot: bool,
    /// Native demo stops after this many ticks (`None` runs until game over)
    pub demo_tick_limit: Option<u64>,

    // === Visuals ===
    /// Flat background instead of the sky gradient
    pub high_contrast: bool,
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            click_debounce_ms: CLICK_DEBOUNCE_MS,
            autopilot: false,
            demo_tick_limit: Some(60 * 60),
            high_contrast: false,
            show_fps: true,
        }
    }
}

impl Settings {
    /// Environment variable holding the native settings path
    pub const ENV_VAR: &'static str = "EGG_DROP_SETTINGS";

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "egg_drop_settings";

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if !self.click_debounce_ms.is_finite() || self.click_debounce_ms < 0.0 {
            return Err(SettingsError::InvalidDebounce(self.click_debounce_ms));
        }
        Ok(())
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from the file named by `EGG_DROP_SETTINGS`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(Self::ENV_VAR) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_path(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.to_string_lossy());
                settings
            }
            Err(e) => {
                log::warn!(
                    "Ignoring settings file {}: {}",
                    path.to_string_lossy(),
                    e
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.click_debounce_ms, 200.0);
        assert_eq!(settings.seed, None);
        assert!(!settings.autopilot);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7, "autopilot": true }"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert!(settings.autopilot);
        assert_eq!(settings.click_debounce_ms, 200.0);
        assert_eq!(settings.demo_tick_limit, Some(3600));
    }

    #[test]
    fn test_bad_json() {
        let err = Settings::from_json("{ seed: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_negative_debounce_rejected() {
        let err = Settings::from_json(r#"{ "click_debounce_ms": -5.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidDebounce(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::from_path("/definitely/not/here/egg_drop.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn test_round_trip_through_file() {
        let path = std::env::temp_dir().join(format!("egg_drop_settings_{}.json", std::process::id()));
        let settings = Settings {
            seed: Some(11),
            demo_tick_limit: None,
            ..Default::default()
        };
        std::fs::write(&path, serde_json::to_string(&settings).unwrap()).unwrap();
        let loaded = Settings::from_path(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }
}
