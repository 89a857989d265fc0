//! User settings persisted as pretty JSON in the platform config directory.

use crate::core::Difficulty;
use crate::error::SaveError;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sound_enabled: bool,
    pub haptics_enabled: bool,
    pub dark_mode: bool,
    pub default_difficulty: Difficulty,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            haptics_enabled: true,
            dark_mode: true,
            default_difficulty: Difficulty::Easy,
        }
    }
}

/// Full path of the settings file.
pub fn settings_path() -> Result<PathBuf, SaveError> {
    let project_dirs = ProjectDirs::from("", "", "mathdash").ok_or(SaveError::NoConfigDir)?;
    Ok(project_dirs.config_dir().join(SETTINGS_FILE))
}

impl Settings {
    /// Loads settings, falling back to defaults if missing or invalid.
    pub fn load() -> Self {
        match settings_path() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "invalid settings file, using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self) -> Result<(), SaveError> {
        self.save_to(&settings_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SaveError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
