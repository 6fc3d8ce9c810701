//! # Hexdeck Settings
//!
//! Handles application settings and their persistence: connection defaults,
//! console preferences, and the recent command-file list.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{ConnectionSettings, ConsoleSettings, Settings, RECENT_FILES_MAX};
pub use error::{SettingsError, SettingsResult};
pub use manager::SettingsManager;
