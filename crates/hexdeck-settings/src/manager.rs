//! Settings manager
//!
//! Resolves the platform settings location, loads settings or falls back to
//! defaults, and saves them back.

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{SettingsError, SettingsResult};

/// File name used for settings in the application config directory.
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Owns the loaded settings and their on-disk location.
#[derive(Debug, Clone)]
pub struct SettingsManager {
    settings: Settings,
    path: PathBuf,
}

impl SettingsManager {
    /// Load settings from the platform location, or start from defaults when
    /// no file exists yet.
    pub fn load_or_default() -> SettingsResult<Self> {
        Self::load_from(Self::default_path()?)
    }

    /// Load settings from an explicit path, or defaults when the file is
    /// absent.
    pub fn load_from(path: PathBuf) -> SettingsResult<Self> {
        let settings = if path.exists() {
            Settings::load_from_file(&path)?
        } else {
            Settings::default()
        };
        Ok(Self { settings, path })
    }

    /// Platform settings path: `<config_dir>/hexdeck/settings.toml`.
    pub fn default_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })?;
        Ok(base.join("hexdeck").join(SETTINGS_FILE_NAME))
    }

    /// Loaded settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mutable access for applying changes before a save.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Path the settings load from and save to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Save to the resolved path, creating parent directories as needed.
    pub fn save(&self) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.settings.save_to_file(&self.path)
    }
}
