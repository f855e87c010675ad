//! User settings stored as settings.json in the app data directory

use crate::constants::{DEFAULT_CADENCE_MINUTES, DEFAULT_INSTRUMENT};
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Image source
    pub instrument: String,
    pub cadence_minutes: i64,

    // Palette token used as the control panel fill
    pub panel_color: String,

    // Startup
    pub fetch_on_start: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            instrument: DEFAULT_INSTRUMENT.to_string(),
            cadence_minutes: DEFAULT_CADENCE_MINUTES,
            panel_color: "primary".to_string(),
            fetch_on_start: true,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Frame spacing, falling back to the default for non-positive values
    pub fn cadence(&self) -> TimeDelta {
        let minutes = if self.cadence_minutes > 0 {
            self.cadence_minutes
        } else {
            DEFAULT_CADENCE_MINUTES
        };
        TimeDelta::minutes(minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "window_w": 1200.0 }"#).unwrap();
        assert_eq!(settings.window_w, Some(1200.0));
        assert_eq!(settings.instrument, "hmiigr");
        assert_eq!(settings.cadence_minutes, 90);
        assert!(settings.fetch_on_start);
        assert_eq!(settings.panel_color, "primary");
    }

    #[test]
    fn test_cadence_rejects_non_positive() {
        let mut settings = Settings::default();
        settings.cadence_minutes = 0;
        assert_eq!(settings.cadence(), TimeDelta::minutes(90));
        settings.cadence_minutes = 12;
        assert_eq!(settings.cadence(), TimeDelta::minutes(12));
    }

    #[test]
    fn test_load_falls_back_on_garbage() {
        let dir = std::env::temp_dir().join(format!("sunwatch-settings-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("settings.json"), "{ not json").unwrap();
        let settings = Settings::load(&dir);
        assert_eq!(settings.instrument, "hmiigr");

        let mut custom = Settings::default();
        custom.instrument = "eit195".to_string();
        custom.save(&dir);
        assert_eq!(Settings::load(&dir).instrument, "eit195");
        std::fs::remove_dir_all(&dir).ok();
    }
}
