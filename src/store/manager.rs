//! Data store for the freshness marker and the observation snapshot
//!
//! Provides a `DataStore` that reads and writes both files inside a single
//! data directory.

use chrono::NaiveDate;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::FetchMarker;
use crate::config::Config;
use crate::data::Observation;

/// File name of the freshness marker
pub const MARKER_FILE: &str = "last_fetch_date.json";

/// File name of the observation snapshot
pub const SNAPSHOT_FILE: &str = "bls_data.csv";

/// Errors that can occur when reading or writing the store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem access failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Marker file is not valid JSON of the expected shape
    #[error("Invalid fetch marker: {0}")]
    Marker(#[from] serde_json::Error),

    /// Snapshot file could not be written or parsed
    #[error("Invalid snapshot: {0}")]
    Snapshot(#[from] csv::Error),
}

/// Manages the files shared between the fetcher and the dashboard
///
/// Files live in an XDG-compliant data directory (`~/.local/share/blsdash/`
/// on Linux) unless a directory is configured explicitly.
#[derive(Debug, Clone)]
pub struct DataStore {
    /// Directory holding both files
    data_dir: PathBuf,
}

impl DataStore {
    /// Creates a DataStore using the platform data directory
    ///
    /// Returns `None` if the directory cannot be determined (e.g., no home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "blsdash")?;
        Some(Self::with_dir(project_dirs.data_dir().to_path_buf()))
    }

    /// Creates a DataStore rooted at a specific directory
    pub fn with_dir(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Creates a DataStore honoring a configured directory override
    pub fn from_config(config: &Config) -> Option<Self> {
        match &config.data_dir {
            Some(dir) => Some(Self::with_dir(dir.clone())),
            None => Self::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn marker_path(&self) -> PathBuf {
        self.data_dir.join(MARKER_FILE)
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join(SNAPSHOT_FILE)
    }

    /// Ensures the data directory exists
    fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir).map_err(|source| StoreError::Io {
            path: self.data_dir.clone(),
            source,
        })
    }

    /// Reads the freshness marker
    ///
    /// # Returns
    /// * `Ok(None)` if no fetch has succeeded yet
    /// * `Ok(Some(FetchMarker))` if the marker exists and parses
    /// * `Err(StoreError)` if the file exists but cannot be read or parsed
    pub fn read_marker(&self) -> Result<Option<FetchMarker>, StoreError> {
        let path = self.marker_path();
        if !path.exists() {
            return Ok(None);
        }

        let content =
            fs::read_to_string(&path).map_err(|source| StoreError::Io { path, source })?;
        let marker = serde_json::from_str(&content)?;
        Ok(Some(marker))
    }

    /// Overwrites the freshness marker, creating the data directory if missing
    pub fn write_marker(&self, marker: &FetchMarker) -> Result<(), StoreError> {
        self.ensure_dir()?;

        let path = self.marker_path();
        let json = serde_json::to_string(marker)?;
        fs::write(&path, json).map_err(|source| StoreError::Io { path, source })
    }

    /// Reads the observation snapshot
    ///
    /// # Returns
    /// * `Ok(None)` if the snapshot file doesn't exist
    /// * `Ok(Some(vec![]))` if it exists but holds no rows
    /// * `Err(StoreError)` if it cannot be parsed
    pub fn read_snapshot(&self) -> Result<Option<Vec<Observation>>, StoreError> {
        let path = self.snapshot_path();
        if !path.exists() {
            return Ok(None);
        }

        let mut reader = csv::Reader::from_path(&path)?;
        let observations = reader
            .deserialize()
            .collect::<Result<Vec<Observation>, csv::Error>>()?;
        Ok(Some(observations))
    }

    /// Overwrites the snapshot with the given observations
    pub fn write_snapshot(&self, observations: &[Observation]) -> Result<(), StoreError> {
        self.ensure_dir()?;

        let mut writer = csv::Writer::from_path(self.snapshot_path())?;
        for observation in observations {
            writer.serialize(observation)?;
        }
        let path = self.snapshot_path();
        writer
            .flush()
            .map_err(|source| StoreError::Io { path, source })
    }

    /// Whether a fetch is due: no marker yet, or the marker is stale as of `today`
    pub fn should_update(&self, today: NaiveDate) -> Result<bool, StoreError> {
        Ok(match self.read_marker()? {
            None => true,
            Some(marker) => marker.is_stale(today),
        })
    }
}
