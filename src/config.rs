//! User configuration loaded from `~/.config/depolog/config.toml`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::FixedOffset;
use serde::Deserialize;

use crate::model::ArrivalZone;
use crate::storage::{DepoStore, StorageError};

const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML or has unknown keys.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// `utc_offset_minutes` is outside ±24h.
    #[error("invalid UTC offset: {0} minutes")]
    InvalidOffset(i32),
}

/// Settings read from `config.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory for `units.jsonl`, `depo_logs.jsonl`, and log files.
    pub data_dir: Option<PathBuf>,
    /// tracing filter directive, e.g. `"debug"` or `"depolog=trace"`.
    pub log_level: Option<String>,
    /// Operator timezone as minutes east of UTC (WIB is 420, WITA 480).
    pub utc_offset_minutes: Option<i32>,
}

impl Config {
    /// Path of the config file under the XDG config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("depolog").join("config.toml"))
    }

    /// Loads from [`Config::default_path`], or defaults if there is none.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads from `path`. A missing or blank file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        Self::from_toml(&content)
    }

    /// Parses TOML text. Blank text yields the defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }

    /// tracing filter directive, `"info"` unless configured.
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Timezone used to read arrival times. Without `utc_offset_minutes`
    /// the system zone's rules apply to each date.
    pub fn timezone(&self) -> Result<ArrivalZone, ConfigError> {
        match self.utc_offset_minutes {
            Some(minutes) => minutes
                .checked_mul(60)
                .and_then(FixedOffset::east_opt)
                .map(ArrivalZone::Fixed)
                .ok_or(ConfigError::InvalidOffset(minutes)),
            None => Ok(ArrivalZone::Local),
        }
    }

    /// Opens the store at `data_dir`, or the XDG data directory.
    pub fn open_store(&self) -> Result<DepoStore, StorageError> {
        match &self.data_dir {
            Some(dir) => DepoStore::with_path(dir),
            None => DepoStore::new(),
        }
    }
}
