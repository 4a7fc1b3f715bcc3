//! JSON file storage for the plant collection.
//!
//! The whole collection lives in one pretty-printed JSON array. Every save
//! rewrites the file from scratch; there is no locking, so two processes
//! sharing a file will overwrite each other's changes.

mod record;

use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::Plant;
use record::PlantRecord;

/// Data file used when no other path is given, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "plant_info.json";

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Malformed plant file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to serialize plants: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Handle to the JSON file backing a plant collection.
#[derive(Debug, Clone)]
pub struct PlantStore {
    path: PathBuf,
}

impl PlantStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn open_default() -> Self {
        Self::open(DEFAULT_DATA_FILE)
    }

    /// Read every plant from the file, in file order.
    ///
    /// A missing file is an empty collection. Entries with an unknown
    /// category are dropped, and unparseable dates become `today`.
    pub fn load(&self, today: NaiveDate) -> Result<Vec<Plant>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No plant file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let records: Vec<PlantRecord> =
            serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        let total = records.len();
        let plants: Vec<Plant> = records
            .into_iter()
            .filter_map(|record| record.into_plant(today))
            .collect();

        tracing::debug!(
            "Loaded {} of {} plants from {}",
            plants.len(),
            total,
            self.path.display()
        );
        Ok(plants)
    }

    /// Like [`load`](Self::load), but any failure yields an empty collection.
    ///
    /// The error is handed back so the caller can tell the user.
    pub fn load_or_empty(&self, today: NaiveDate) -> (Vec<Plant>, Option<StoreError>) {
        match self.load(today) {
            Ok(plants) => (plants, None),
            Err(e) => {
                tracing::warn!("{}; starting with an empty collection", e);
                (Vec::new(), Some(e))
            }
        }
    }

    /// Replace the file contents with `plants`.
    pub fn save(&self, plants: &[Plant]) -> Result<(), StoreError> {
        let records: Vec<PlantRecord> = plants.iter().map(PlantRecord::from).collect();
        let content = serde_json::to_string_pretty(&records)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        fs::write(&self.path, content).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!("Saved {} plants to {}", plants.len(), self.path.display());
        Ok(())
    }
}
