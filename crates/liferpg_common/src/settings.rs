//! Engine tunables, overridable from a TOML settings file.
//!
//! Defaults match the constants the progression rules were balanced around.
//! A missing file means defaults; a malformed file is reported and ignored.

use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Flat XP removed per inactive calendar day from every area. Also the
    /// base XP for a qualifying workout.
    pub daily_decay: i64,
    /// Pushup count required before a workout earns XP.
    pub pushup_requirement: u32,
    /// Daily screen-time allowance in hours.
    pub screen_time_limit_hours: f64,
    /// Social interactions allowed per rolling week.
    pub social_weekly_limit: u32,
    /// Optional profile path override (env var and CLI flag win over this).
    pub profile_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            daily_decay: 5,
            pushup_requirement: 100,
            screen_time_limit_hours: 2.0,
            social_weekly_limit: 3,
            profile_path: None,
        }
    }
}

impl Settings {
    /// Load from the default settings location.
    pub fn load() -> Self {
        Self::load_from(&paths::settings_path())
    }

    /// Load from a specific file, falling back to defaults when the file is
    /// absent or unreadable.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Self::default(),
        };
        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Ignoring malformed settings file {}: {}", path.display(), e);
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
        assert_eq!(settings.daily_decay, 5);
        assert_eq!(settings.pushup_requirement, 100);
        assert_eq!(settings.screen_time_limit_hours, 2.0);
        assert_eq!(settings.social_weekly_limit, 3);
        assert!(settings.profile_path.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings = toml::from_str("daily_decay = 8").unwrap();
        assert_eq!(settings.daily_decay, 8);
        assert_eq!(settings.pushup_requirement, 100);
    }

    #[test]
    fn test_missing_file_is_defaults() {
        let settings = Settings::load_from(Path::new("/nonexistent/liferpg/config.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_malformed_file_is_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "daily_decay = \"not a number").unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings, Settings::default());
    }
}
