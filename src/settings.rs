//! Game settings and preferences
//!
//! Loaded from a JSON file; every field has a default so partial files work.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH};
use crate::error::ConfigError;
use crate::sim::{Difficulty, PlayField};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Difficulty preselected on the menu
    pub difficulty: Difficulty,

    // === Play-field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Visual Effects ===
    /// Screen shake on explosions/impacts
    pub screen_shake: bool,
    /// Particle effects (explosions, sparks)
    pub particles: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Accessibility ===
    /// Reduced motion (no shake)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,

            field_width: DEFAULT_FIELD_WIDTH,
            field_height: DEFAULT_FIELD_HEIGHT,

            // Visual effects - all on by default
            screen_shake: true,
            particles: true,

            // Audio
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            // Accessibility
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("field_width", self.field_width, 100.0, 10_000.0)?;
        check_range("field_height", self.field_height, 100.0, 10_000.0)?;
        check_range("master_volume", self.master_volume, 0.0, 1.0)?;
        check_range("sfx_volume", self.sfx_volume, 0.0, 1.0)?;
        Ok(())
    }

    pub fn play_field(&self) -> PlayField {
        PlayField::new(self.field_width, self.field_height)
    }

    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }
}

fn check_range(field: &str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field: field.to_string(),
            min: min as f64,
            max: max as f64,
            value: value as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "difficulty": "Hard", "muted": true }"#).unwrap();
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert!(settings.muted);
        assert_eq!(settings.field_width, DEFAULT_FIELD_WIDTH);
        assert_eq!(settings.master_volume, 0.8);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = Settings::from_json(r#"{ "master_volume": 1.5 }"#).unwrap_err();
        assert!(
            matches!(err, ConfigError::OutOfRange { ref field, .. } if field == "master_volume")
        );

        let err = Settings::from_json(r#"{ "field_width": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { .. }));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_or_default("/nonexistent/nova-strike.json");
        assert_eq!(settings, Settings::default());
        assert!(matches!(
            Settings::load_from("/nonexistent/nova-strike.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_reduced_motion_disables_shake() {
        let mut settings = Settings::default();
        assert!(settings.effective_screen_shake());
        settings.reduced_motion = true;
        assert!(!settings.effective_screen_shake());
    }

    #[test]
    fn test_json_round_trip_keeps_field() {
        let mut settings = Settings::default();
        settings.field_width = 1024.0;
        let back = Settings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(back.play_field(), PlayField::new(1024.0, DEFAULT_FIELD_HEIGHT));
    }
}
