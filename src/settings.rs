//! Runtime settings
//!
//! Read once at startup; never written back.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tuning::{Tuning, TuningError};

/// Environment variable naming a settings file (native only)
pub const SETTINGS_ENV: &str = "STAR_DODGER_SETTINGS";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings are not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Tuning(#[from] TuningError),
    #[error("music volume must be within [0, 1] (got {0})")]
    Volume(f32),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed; a time-based seed is used when absent
    pub seed: Option<u64>,

    // === Audio ===
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Start with music muted
    pub muted: bool,

    // === Gameplay ===
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            music_volume: 0.7,
            muted: false,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(0.0..=1.0).contains(&self.music_volume) {
            return Err(SettingsError::Volume(self.music_volume));
        }
        self.tuning.validate()?;
        Ok(())
    }

    /// Effective music volume (respects mute)
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.music_volume }
    }

    /// Seed to use for this process
    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }

    /// Load settings from the file named by `STAR_DODGER_SETTINGS` (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(SETTINGS_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", Path::new(&path).display());
                settings
            }
            Err(e) => {
                log::warn!(
                    "Ignoring settings file {}: {}",
                    Path::new(&path).display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Web builds always start from defaults
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        log::info!("Using default settings");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.seed, None);
        assert_eq!(settings.seed_or(77), 77);
        assert_eq!(settings.effective_music_volume(), 0.7);
    }

    #[test]
    fn test_parse_nested_tuning() {
        let settings = Settings::from_json(
            r#"{ "seed": 42, "muted": true, "tuning": { "initial_obstacle_speed": 3.0 } }"#,
        )
        .expect("settings should parse");
        assert_eq!(settings.seed_or(0), 42);
        assert_eq!(settings.effective_music_volume(), 0.0);
        assert_eq!(settings.tuning.initial_obstacle_speed, 3.0);
        assert_eq!(settings.tuning.obstacle_gap, 200.0);
    }

    #[test]
    fn test_rejects_bad_volume() {
        let err = Settings::from_json(r#"{ "music_volume": 1.5 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Volume(_)));
    }

    #[test]
    fn test_rejects_bad_tuning() {
        let err = Settings::from_json(r#"{ "tuning": { "obstacle_gap": 999.0 } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Tuning(TuningError::GapTooWide { .. })));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
