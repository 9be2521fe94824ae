//! Throttled fetch of the tracked series into the data store
//!
//! The fetcher checks the freshness marker, and when a refresh is due it
//! requests every catalog series for the previous and current calendar year,
//! then overwrites the snapshot followed by the marker.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::data::{all_series, BlsClient, BlsError};
use crate::store::{DataStore, FetchMarker, StoreError};

/// Errors that abort a fetch run
#[derive(Debug, Error)]
pub enum FetchError {
    /// The BLS request or its response failed
    #[error(transparent)]
    Bls(#[from] BlsError),

    /// Reading or writing the data store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// What a fetch run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Marker was fresh; nothing requested
    UpToDate,
    /// Snapshot and marker were rewritten
    Updated { observations: usize },
    /// API answered without any monthly observations; nothing written
    NoData,
}

/// Year range to request as of `today`: previous through current calendar year
pub fn request_window(today: NaiveDate) -> (i32, i32) {
    (today.year() - 1, today.year())
}

/// Connects the BLS client to the data store
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: BlsClient,
    store: DataStore,
}

impl Fetcher {
    pub fn new(client: BlsClient, store: DataStore) -> Self {
        Self { client, store }
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    /// Whether the marker is missing or at least 30 days old
    pub fn should_update(&self, today: NaiveDate) -> Result<bool, FetchError> {
        Ok(self.store.should_update(today)?)
    }

    /// Requests all catalog series and persists the result
    ///
    /// An empty (but well-formed) response is not an error: it is logged and
    /// leaves any existing files untouched.
    pub async fn fetch_and_store(&self, today: NaiveDate) -> Result<FetchOutcome, FetchError> {
        let series_ids: Vec<&str> = all_series().iter().map(|series| series.id).collect();
        let (start_year, end_year) = request_window(today);

        let observations = self
            .client
            .fetch_observations(&series_ids, start_year, end_year)
            .await?;

        if observations.is_empty() {
            log::warn!("No data returned from the BLS API. Please check the API request.");
            return Ok(FetchOutcome::NoData);
        }

        self.store.write_snapshot(&observations)?;
        self.store.write_marker(&FetchMarker::new(today))?;

        log::info!(
            "Stored {} observations in {}",
            observations.len(),
            self.store.snapshot_path().display()
        );

        Ok(FetchOutcome::Updated {
            observations: observations.len(),
        })
    }

    /// Entry point: fetch only when a refresh is due
    pub async fn run(&self, today: NaiveDate) -> Result<FetchOutcome, FetchError> {
        if !self.should_update(today)? {
            log::info!("Data is up to date. No new fetch required.");
            return Ok(FetchOutcome::UpToDate);
        }

        log::info!("Fetching updated data...");
        self.fetch_and_store(today).await
    }
}
