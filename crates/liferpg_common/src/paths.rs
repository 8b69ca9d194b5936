//! Path helpers for the profile document and settings file.
//!
//! Resolution order: explicit environment override, then the XDG-style
//! directories from `dirs`, then a dotfile in the home directory as a last
//! resort.

use std::path::PathBuf;

/// Environment variable overriding the profile file location.
pub const PROFILE_ENV: &str = "LIFERPG_PROFILE";

/// Environment variable overriding the settings file location.
pub const SETTINGS_ENV: &str = "LIFERPG_CONFIG";

/// Location of the persisted profile document.
pub fn profile_path() -> PathBuf {
    if let Ok(path) = std::env::var(PROFILE_ENV) {
        return PathBuf::from(path);
    }
    if let Some(data) = dirs::data_dir() {
        return data.join("liferpg").join("profile.json");
    }
    home_fallback().join(".liferpg").join("profile.json")
}

/// Location of the optional settings file.
pub fn settings_path() -> PathBuf {
    if let Ok(path) = std::env::var(SETTINGS_ENV) {
        return PathBuf::from(path);
    }
    if let Some(config) = dirs::config_dir() {
        return config.join("liferpg").join("config.toml");
    }
    home_fallback().join(".liferpg").join("config.toml")
}

fn home_fallback() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the env vars are process-global and tests run in
    // parallel threads.
    #[test]
    fn test_path_resolution() {
        std::env::remove_var(PROFILE_ENV);
        std::env::remove_var(SETTINGS_ENV);
        assert!(profile_path().ends_with("profile.json"));
        assert!(settings_path().ends_with("config.toml"));

        std::env::set_var(PROFILE_ENV, "/tmp/liferpg-test/profile.json");
        assert_eq!(
            profile_path(),
            PathBuf::from("/tmp/liferpg-test/profile.json")
        );
        std::env::remove_var(PROFILE_ENV);
    }
}
