//! Core data model for blsdash
//!
//! Holds the observation type shared by the fetcher, the snapshot file and
//! the dashboard, plus the static series catalog and the BLS API client.

pub mod bls;
pub mod series;

pub use bls::{BlsClient, BlsError};
pub use series::{all_series, get_series_by_id, series_label, SeriesInfo};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single monthly data point of one series
///
/// Field names are renamed so the snapshot CSV header reads
/// `Series ID,Year,Month,Value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// BLS series identifier (e.g. "LNS14000000")
    #[serde(rename = "Series ID")]
    pub series_id: String,
    /// Calendar year
    #[serde(rename = "Year")]
    pub year: i32,
    /// Month of year, always within 1..=12
    #[serde(rename = "Month")]
    pub month: u32,
    /// Published value
    #[serde(rename = "Value")]
    pub value: f64,
}

impl Observation {
    pub fn new(series_id: impl Into<String>, year: i32, month: u32, value: f64) -> Self {
        Self {
            series_id: series_id.into(),
            year,
            month,
            value,
        }
    }

    /// First day of the observation's month, or `None` if year/month are out of range
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}
