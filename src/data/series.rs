//! Static catalog of the BLS series tracked by blsdash
//!
//! The catalog order is the order series are requested in.

/// A tracked series and its display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesInfo {
    /// BLS series identifier
    pub id: &'static str,
    /// Human-readable label shown in the dashboard
    pub label: &'static str,
}

/// Static array of all tracked series
pub static SERIES: [SeriesInfo; 7] = [
    SeriesInfo {
        id: "LNS14000000",
        label: "Unemployment Rate (16 yrs and over)",
    },
    SeriesInfo {
        id: "CES0000000001",
        label: "Total Nonfarm Employment",
    },
    SeriesInfo {
        id: "LNS11000000",
        label: "Civilian Labor Force Level",
    },
    SeriesInfo {
        id: "LNS12000000",
        label: "Civilian Employment Level",
    },
    SeriesInfo {
        id: "LNS13000000",
        label: "Civilian Unemployment Level",
    },
    SeriesInfo {
        id: "CES0500000002",
        label: "Total Private Average Weekly Hours",
    },
    SeriesInfo {
        id: "CES0500000007",
        label: "Total Private Average Hourly Earnings",
    },
];

/// Get a series by its ID
///
/// # Returns
///
/// Returns `Some(&SeriesInfo)` if the ID is in the catalog, `None` otherwise
pub fn get_series_by_id(id: &str) -> Option<&'static SeriesInfo> {
    SERIES.iter().find(|series| series.id == id)
}

/// Get all tracked series
pub fn all_series() -> &'static [SeriesInfo] {
    &SERIES
}

/// Display label for a series ID, falling back to the raw ID when unknown
pub fn series_label(id: &str) -> &str {
    get_series_by_id(id).map_or(id, |series| series.label)
}
