//! Freshness marker recording the date of the last successful fetch

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of days after which fetched data is due for a refresh
pub const REFRESH_AFTER_DAYS: i64 = 30;

/// On-disk form: `{"last_fetch": "YYYY-MM-DD"}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchMarker {
    pub last_fetch: NaiveDate,
}

impl FetchMarker {
    pub fn new(last_fetch: NaiveDate) -> Self {
        Self { last_fetch }
    }

    /// Whole days elapsed since the last fetch; negative if the marker is in the future
    pub fn age_days(&self, today: NaiveDate) -> i64 {
        (today - self.last_fetch).num_days()
    }

    /// Whether a refresh is due as of `today`
    pub fn is_stale(&self, today: NaiveDate) -> bool {
        self.age_days(today) >= REFRESH_AFTER_DAYS
    }
}
