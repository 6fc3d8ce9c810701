//! Application settings for Hexdeck
//!
//! Provides settings file handling and validation. Supports JSON and TOML
//! file formats stored in platform-specific directories.
//!
//! Settings are organized into logical sections:
//! - Connection settings (port, baud rate, framing, timeout)
//! - Console preferences (byte echo, color)
//! - Recent command files

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{SettingsError, SettingsResult};

/// Maximum number of entries kept in the recent-files list.
pub const RECENT_FILES_MAX: usize = 8;

/// Connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionSettings {
    /// Port to connect to at startup, if remembered
    pub port: Option<String>,
    /// Baud rate for serial connections
    pub baud_rate: u32,
    /// Data bits per character
    pub data_bits: u8,
    /// Stop bits
    pub stop_bits: u8,
    /// Open and write timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            port: None,
            baud_rate: 115200,
            data_bits: 8,
            stop_bits: 1,
            timeout_ms: 1000,
        }
    }
}

/// Console preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    /// Echo the hex payload after each dispatch
    pub echo_bytes: bool,
    /// Colorize console output
    pub color: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            echo_bytes: true,
            color: true,
        }
    }
}

/// Complete application settings
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Connection settings
    #[serde(default)]
    pub connection: ConnectionSettings,
    /// Console preferences
    #[serde(default)]
    pub console: ConsoleSettings,
    /// Recent command files, most recent first
    #[serde(default)]
    pub recent_files: Vec<PathBuf>,
}

impl Settings {
    /// Create new settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let settings: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(SettingsError::UnsupportedFormat(
                path.display().to_string(),
            ));
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)?
        } else {
            return Err(SettingsError::UnsupportedFormat(
                path.display().to_string(),
            ));
        };

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate settings
    pub fn validate(&self) -> SettingsResult<()> {
        if self.connection.baud_rate == 0 {
            return Err(SettingsError::InvalidSetting {
                key: "connection.baud_rate".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        if self.connection.timeout_ms == 0 {
            return Err(SettingsError::InvalidSetting {
                key: "connection.timeout_ms".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        if !(5..=8).contains(&self.connection.data_bits) {
            return Err(SettingsError::InvalidSetting {
                key: "connection.data_bits".to_string(),
                reason: format!("{} is outside 5..=8", self.connection.data_bits),
            });
        }

        if !(1..=2).contains(&self.connection.stop_bits) {
            return Err(SettingsError::InvalidSetting {
                key: "connection.stop_bits".to_string(),
                reason: format!("{} is outside 1..=2", self.connection.stop_bits),
            });
        }

        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        // Remove if already in list
        self.recent_files.retain(|f| f != &path);

        // Add to front
        self.recent_files.insert(0, path);

        // Trim to max size
        self.recent_files.truncate(RECENT_FILES_MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::new();
        assert_eq!(settings.connection.baud_rate, 115200);
        assert_eq!(settings.connection.data_bits, 8);
        assert_eq!(settings.connection.stop_bits, 1);
        assert!(settings.connection.port.is_none());
        assert!(settings.console.echo_bytes);
        assert!(settings.recent_files.is_empty());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_baud() {
        let mut settings = Settings::new();
        settings.connection.baud_rate = 0;
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, SettingsError::InvalidSetting { .. }));
    }

    #[test]
    fn test_validate_rejects_bad_framing() {
        let mut settings = Settings::new();
        settings.connection.data_bits = 4;
        assert!(settings.validate().is_err());

        let mut settings = Settings::new();
        settings.connection.stop_bits = 3;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_recent_files_dedupe_and_cap() {
        let mut settings = Settings::new();
        for i in 0..10 {
            settings.add_recent_file(PathBuf::from(format!("deck{}.cfg", i)));
        }
        assert_eq!(settings.recent_files.len(), RECENT_FILES_MAX);
        assert_eq!(settings.recent_files[0], PathBuf::from("deck9.cfg"));

        // Re-adding an existing file moves it to the front without growing.
        settings.add_recent_file(PathBuf::from("deck5.cfg"));
        assert_eq!(settings.recent_files.len(), RECENT_FILES_MAX);
        assert_eq!(settings.recent_files[0], PathBuf::from("deck5.cfg"));
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let mut settings = Settings::new();
        settings.connection.port = Some("/dev/ttyUSB0".to_string());
        settings.connection.baud_rate = 9600;
        settings.add_recent_file(PathBuf::from("bench.cfg"));

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = Settings::new();
        settings.console.color = false;

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");

        let err = Settings::new().save_to_file(&path).unwrap_err();
        assert!(matches!(err, SettingsError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[connection]\nbaud_rate = 57600\ndata_bits = 8\nstop_bits = 1\ntimeout_ms = 1000\n").unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded.connection.baud_rate, 57600);
        assert!(loaded.console.echo_bytes);
        assert!(loaded.recent_files.is_empty());
    }

    #[test]
    fn test_invalid_file_fails_validation_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(
            &path,
            "[connection]\nbaud_rate = 0\ndata_bits = 8\nstop_bits = 1\ntimeout_ms = 1000\n",
        )
        .unwrap();

        let err = Settings::load_from_file(&path).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidSetting { .. }));
    }
}
