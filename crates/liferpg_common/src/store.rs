//! Profile store: load and save of the whole document.
//!
//! No logic beyond atomic whole-file read/write. Writes go through a temp
//! file and rename so the profile is never left in a partial state.

use crate::error::RpgError;
use crate::paths;
use crate::profile::Profile;
use chrono::NaiveDate;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_location() -> Self {
        Self::new(paths::profile_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the profile if the file exists.
    pub fn load(&self) -> Result<Option<Profile>, RpgError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let profile = serde_json::from_str(&content)?;
        Ok(Some(profile))
    }

    /// Load the existing profile, or create a fresh one dated `today`.
    /// Creation does not write anything: the first mutation persists.
    pub fn load_or_create(&self, today: NaiveDate) -> Result<Profile, RpgError> {
        match self.load()? {
            Some(profile) => Ok(profile),
            None => {
                debug!("No profile at {}, starting fresh", self.path.display());
                Ok(Profile::new(today))
            }
        }
    }

    /// Persist the whole document atomically.
    pub fn save(&self, profile: &Profile) -> Result<(), RpgError> {
        let data = serde_json::to_string_pretty(profile)?;
        atomic_write(&self.path, data.as_bytes())?;
        debug!("Profile saved to {}", self.path.display());
        Ok(())
    }
}

/// Write via temp file + rename so a crash mid-write cannot truncate the
/// profile.
fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    let mut file = File::create(&temp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    fs::rename(&temp_path, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_load_missing_is_none() {
        let dir = tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("profile.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_load_or_create_starts_fresh() {
        let dir = tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("profile.json"));
        let profile = store.load_or_create(day("2025-01-10")).unwrap();
        assert_eq!(profile.last_login, day("2025-01-10"));
        // Creation alone writes nothing
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("nested").join("profile.json"));

        let today = day("2025-01-10");
        let mut profile = Profile::new(today);
        profile.habits.shower.advance(today);
        profile.screen_time.log(today, 1.5);

        store.save(&profile).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_save_replaces_whole_document() {
        let dir = tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("profile.json"));

        let today = day("2025-01-10");
        let mut profile = Profile::new(today);
        store.save(&profile).unwrap();

        profile.achievements.push("Health - Exercise - Bronze Tier".to_string());
        store.save(&profile).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.achievements.len(), 1);
    }

    #[test]
    fn test_corrupt_file_is_json_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, "{ not json").unwrap();

        let store = ProfileStore::new(path);
        match store.load() {
            Err(RpgError::Json(_)) => {}
            other => panic!("expected Json error, got {:?}", other.map(|_| ())),
        }
    }
}
