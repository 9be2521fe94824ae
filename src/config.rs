//! Runtime configuration read from the environment
//!
//! Both binaries run without flags, so the few knobs that exist come from
//! environment variables. Throttle policy is not configurable.

use std::path::PathBuf;

/// Default BLS public API endpoint (v2 timeseries)
pub const DEFAULT_API_URL: &str = "https://api.bls.gov/publicAPI/v2/timeseries/data/";

/// Overrides the directory holding the marker and snapshot files
pub const DATA_DIR_ENV: &str = "BLSDASH_DATA_DIR";

/// Overrides the API endpoint
pub const API_URL_ENV: &str = "BLSDASH_API_URL";

/// Optional BLS registration key
pub const API_KEY_ENV: &str = "BLS_API_KEY";

/// Settings shared by the fetcher and the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Explicit data directory; `None` means the platform data dir
    pub data_dir: Option<PathBuf>,
    /// BLS API endpoint
    pub api_url: String,
    /// Registration key sent with requests when present
    pub registration_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            api_url: DEFAULT_API_URL.to_string(),
            registration_key: None,
        }
    }
}

impl Config {
    /// Builds the configuration from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let defaults = Self::default();
        Self {
            data_dir: get(DATA_DIR_ENV).map(PathBuf::from),
            api_url: get(API_URL_ENV).unwrap_or(defaults.api_url),
            registration_key: get(API_KEY_ENV),
        }
    }
}
