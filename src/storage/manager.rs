use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::de::DeserializeOwned;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use super::error::StorageError;
use super::{DepoLogSink, UnitProvider};
use crate::model::{DepoLog, DepoLogInput, Unit};

const UNITS_FILE: &str = "units.jsonl";
const DEPO_LOGS_FILE: &str = "depo_logs.jsonl";

/// JSONL-backed unit roster and depot log store.
///
/// `units.jsonl` holds one [`Unit`] per line; `depo_logs.jsonl` holds one
/// [`DepoLog`] per line and only ever grows by appending.
#[derive(Debug, Clone)]
pub struct DepoStore {
    base_path: PathBuf,
}

impl DepoStore {
    /// Creates a store in the XDG data directory (`~/.local/share/depolog/`).
    pub fn new() -> Result<Self, StorageError> {
        let data_dir = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
        Self::with_path(data_dir.join("depolog"))
    }

    /// Creates a store rooted at the given path, creating it if needed.
    pub fn with_path(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let base_path = path.into();
        fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    /// Returns the directory this store reads and writes.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn units_path(&self) -> PathBuf {
        self.base_path.join(UNITS_FILE)
    }

    fn depo_logs_path(&self) -> PathBuf {
        self.base_path.join(DEPO_LOGS_FILE)
    }

    /// Replaces the unit roster.
    ///
    /// The dashboard only reads `units.jsonl`; this is the write side for
    /// code that provisions a roster.
    pub async fn save_units(&self, units: &[Unit]) -> Result<(), StorageError> {
        let mut content = String::new();
        for unit in units {
            content.push_str(&serde_json::to_string(unit)?);
            content.push('\n');
        }
        tokio::fs::write(self.units_path(), content).await?;
        Ok(())
    }

    /// Lists all stored depot logs, newest first.
    ///
    /// Records created in the same instant keep reverse append order.
    pub async fn list_depo_logs(&self) -> Result<Vec<DepoLog>, StorageError> {
        let mut logs: Vec<DepoLog> = read_jsonl(&self.depo_logs_path()).await?;
        logs.reverse();
        logs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(logs)
    }
}

impl UnitProvider for DepoStore {
    /// Loads the roster. A missing roster file is an empty roster.
    async fn list_units(&self) -> Result<Vec<Unit>, StorageError> {
        let units = read_jsonl(&self.units_path()).await?;
        debug!(count = units.len(), "loaded unit roster");
        Ok(units)
    }
}

impl DepoLogSink for DepoStore {
    /// Appends a new record for a unit in the roster.
    ///
    /// The record ID is `{unit_id}-{YYYYmmddHHMMSSmmm}` with `/` replaced by
    /// `_`. Returns [`StorageError::UnknownUnit`] if the roster has no unit
    /// with `input.unit_id`.
    async fn create_depo_log(&self, input: DepoLogInput) -> Result<DepoLog, StorageError> {
        let units = self.list_units().await?;
        if !units.iter().any(|u| u.id == input.unit_id) {
            return Err(StorageError::UnknownUnit(input.unit_id));
        }

        let created_at = Utc::now();
        let id = format!("{}-{}", input.unit_id, created_at.format("%Y%m%d%H%M%S%3f"))
            .replace('/', "_");
        let log = DepoLog {
            id,
            created_at,
            input,
        };

        let mut line = serde_json::to_string(&log)?;
        line.push('\n');
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.depo_logs_path())
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        info!(id = %log.id, unit_id = %log.input.unit_id, "depot log created");
        Ok(log)
    }
}

/// Reads one JSON value per non-blank line. A missing file yields no values.
async fn read_jsonl<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StorageError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).map_err(StorageError::Json))
        .collect()
}
