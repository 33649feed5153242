//! Game settings and preferences
//!
//! Persisted as JSON next to the leaderboard file. Missing or corrupt
//! files fall back to defaults rather than failing startup.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_fps: false,

            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("settings file {} is corrupt ({e}), using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Save settings as JSON. Failures are logged, not fatal.
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    log::warn!("failed to save settings to {}: {e}", path.display());
                } else {
                    log::info!("settings saved to {}", path.display());
                }
            }
            Err(e) => log::warn!("failed to serialize settings: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert!(!s.show_fps);
        assert!(s.master_volume > 0.0 && s.master_volume <= 1.0);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let s = Settings::load(Path::new("/definitely/not/here.json"));
        assert_eq!(s.master_volume, Settings::default().master_volume);
    }

    #[test]
    fn test_round_trip() {
        let path = std::env::temp_dir()
            .join(format!("asteroids-settings-{}.json", std::process::id()));
        let mut s = Settings::default();
        s.show_fps = true;
        s.sfx_volume = 0.5;
        s.save(&path);
        let loaded = Settings::load(&path);
        assert!(loaded.show_fps);
        assert_eq!(loaded.sfx_volume, 0.5);
        std::fs::remove_file(&path).ok();
    }
}
