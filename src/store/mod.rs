//! On-disk store shared by the fetcher and the dashboard
//!
//! Two files make up the contract between the components: a JSON freshness
//! marker holding the date of the last successful fetch, and a CSV snapshot
//! of every fetched observation. The fetcher is the only writer.

mod manager;
mod marker;

pub use manager::{DataStore, StoreError, MARKER_FILE, SNAPSHOT_FILE};
pub use marker::{FetchMarker, REFRESH_AFTER_DAYS};
