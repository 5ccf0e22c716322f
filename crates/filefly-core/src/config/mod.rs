//! Configuration management for FileFly.
//!
//! This module handles loading, saving, and managing FileFly configuration.
//!
//! ## Configuration File Locations
//!
//! | Platform | Path |
//! |----------|------|
//! | Linux | `~/.config/filefly/config.toml` |
//! | macOS | `~/Library/Application Support/FileFly/config.toml` |
//! | Windows | `%APPDATA%\FileFly\config.toml` |
//!
//! Received payloads, staged outbound payloads, and the document database
//! live under the platform data directory unless `[storage] data_dir`
//! overrides it.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::intake::AuthorityResolver;

/// Main configuration struct for FileFly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sender identity settings
    pub sender: SenderConfig,
    /// Storage location settings
    pub storage: StorageConfig,
    /// Intake pipeline settings
    pub intake: IntakeConfig,
}

/// Sender identity carried in outbound encoded filenames.
///
/// Persisted so the send flow can pre-fill the last-used names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SenderConfig {
    /// Sender's first name
    pub first_name: String,
    /// Sender's last name
    pub last_name: String,
}

/// Storage location configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Override for the data directory (received/, outbound/, datastore.db)
    pub data_dir: Option<PathBuf>,
}

/// Intake pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// Strip the fixed transport prefix from inbound filenames
    pub strip_transport_prefix: bool,
    /// Content-provider authority served by the intake resolver
    pub content_authority: String,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            strip_transport_prefix: false,
            content_authority: AuthorityResolver::DEFAULT_AUTHORITY.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// If the configuration file doesn't exist, returns the default
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be
    /// read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| crate::error::Error::ConfigError(format!("Failed to read config: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| crate::error::Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to the default location.
    ///
    /// Creates the configuration directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                crate::error::Error::ConfigError(format!("Failed to create config directory: {e}"))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            crate::error::Error::ConfigError(format!("Failed to serialize config: {e}"))
        })?;

        std::fs::write(&path, content)
            .map_err(|e| crate::error::Error::ConfigError(format!("Failed to write config: {e}")))
    }

    /// Get the default configuration directory path.
    #[must_use]
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "filefly", "FileFly")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the full path to the configuration file.
    #[must_use]
    pub fn config_path() -> PathBuf {
        Self::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// The data directory holding payloads and the document database.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.storage.data_dir.clone().unwrap_or_else(|| {
            directories::ProjectDirs::from("com", "filefly", "FileFly")
                .map_or_else(|| PathBuf::from("."), |dirs| dirs.data_dir().to_path_buf())
        })
    }

    /// Directory where inbound payloads are saved.
    #[must_use]
    pub fn received_dir(&self) -> PathBuf {
        self.data_dir().join(crate::RECEIVED_DIR_NAME)
    }

    /// Directory where outbound payloads are staged under encoded names.
    #[must_use]
    pub fn outbound_dir(&self) -> PathBuf {
        self.data_dir().join(crate::OUTBOUND_DIR_NAME)
    }

    /// Path of the embedded document database.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.data_dir().join(crate::DATABASE_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert!(config.sender.first_name.is_empty());
        assert!(!config.intake.strip_transport_prefix);
        assert_eq!(config.intake.content_authority, "media");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");

        assert!(toml_str.contains("[sender]"), "Should have [sender] section");
        assert!(toml_str.contains("[intake]"), "Should have [intake] section");
    }

    #[test]
    fn test_config_deserialization_partial() {
        let partial_toml = r#"
[sender]
first_name = "Jane"
last_name = "Smith"
"#;

        let config: Config = toml::from_str(partial_toml).expect("parse partial config");

        assert_eq!(config.sender.first_name, "Jane");
        assert_eq!(config.sender.last_name, "Smith");

        assert!(!config.intake.strip_transport_prefix);
        assert_eq!(config.intake.content_authority, "media");
    }

    #[test]
    fn test_config_roundtrip() {
        let mut original = Config::default();
        original.sender.first_name = "Jane".to_string();
        original.sender.last_name = "Smith".to_string();
        original.storage.data_dir = Some(PathBuf::from("/tmp/filefly-data"));
        original.intake.strip_transport_prefix = true;

        let content = toml::to_string_pretty(&original).expect("serialize");
        let loaded: Config = toml::from_str(&content).expect("parse");

        assert_eq!(loaded.sender.first_name, "Jane");
        assert_eq!(loaded.storage.data_dir, Some(PathBuf::from("/tmp/filefly-data")));
        assert!(loaded.intake.strip_transport_prefix);
    }

    #[test]
    fn test_derived_paths_follow_data_dir() {
        let mut config = Config::default();
        config.storage.data_dir = Some(PathBuf::from("/tmp/filefly-data"));

        assert_eq!(
            config.received_dir(),
            PathBuf::from("/tmp/filefly-data/received")
        );
        assert_eq!(
            config.outbound_dir(),
            PathBuf::from("/tmp/filefly-data/outbound")
        );
        assert_eq!(
            config.database_path(),
            PathBuf::from("/tmp/filefly-data/datastore.db")
        );
    }

    #[test]
    fn test_config_path() {
        let path = Config::config_path();
        assert!(
            path.ends_with("config.toml"),
            "Config path should end with config.toml"
        );
    }
}
