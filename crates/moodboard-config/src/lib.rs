//! Configuration for moodboard.
//!
//! Settings are read from `config.toml` in the platform config directory
//! (for example `~/.config/moodboard/config.toml`). Every field is optional;
//! a missing file yields [`Config::default`].

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Delay between frames in milliseconds.
    pub frame_interval_ms: u64,
    /// Seed for reproducible animations. Random when unset.
    pub seed: Option<u64>,
    /// Canvas units per terminal column.
    pub cell_width: f32,
    /// Canvas units per terminal row.
    pub cell_height: f32,
    /// Canvas units kept free below the canvas for the mood controls.
    pub reserved_strip: f32,
    /// Where mood state and logs are written. Platform data dir when unset.
    pub data_dir: Option<PathBuf>,
    /// Default log filter when `MOODBOARD_LOG` is not set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            seed: None,
            cell_width: 8.0,
            cell_height: 16.0,
            reserved_strip: 100.0,
            data_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Platform config file path, if a home directory can be resolved.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "moodboard").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load from the platform config path. Defaults when no path or no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`. Defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let config: Config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the renderer cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid("frame_interval_ms must be positive".into()));
        }
        if !(self.cell_width > 0.0 && self.cell_height > 0.0) {
            return Err(ConfigError::Invalid("cell dimensions must be positive".into()));
        }
        if !(self.reserved_strip >= 0.0) {
            return Err(ConfigError::Invalid("reserved_strip must not be negative".into()));
        }
        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &tempfile::TempDir, text: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.frame_interval(), Duration::from_millis(16));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "seed = 7\nreserved_strip = 64.0\n");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.reserved_strip, 64.0);
        assert_eq!(config.cell_width, 8.0);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "frame_interval_ms = \"fast\"");
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "cell_height = 0.0");
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Invalid(_))
        ));
    }
}
