//! BLS public API client
//!
//! This module posts a series request to the BLS timeseries endpoint and
//! turns the nested response into flat monthly [`Observation`]s.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Observation;
use crate::config::{Config, DEFAULT_API_URL};

/// Errors that can occur when fetching series data
#[derive(Debug, Error)]
pub enum BlsError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("BLS API returned HTTP {0}")]
    HttpStatus(u16),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// A monthly data point carried a year that is not an integer
    #[error("Invalid year '{year}' for series {series_id}")]
    InvalidYear { series_id: String, year: String },

    /// A monthly data point carried a value that is not a number
    #[error("Invalid value '{value}' for series {series_id}")]
    InvalidValue { series_id: String, value: String },
}

/// JSON body of a timeseries request
#[derive(Debug, Serialize)]
struct SeriesRequest<'a> {
    seriesid: &'a [&'a str],
    startyear: String,
    endyear: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    registrationkey: Option<&'a str>,
}

/// Top-level response from the timeseries endpoint
#[derive(Debug, Deserialize)]
pub struct BlsResponse {
    /// e.g. "REQUEST_SUCCEEDED" or "REQUEST_NOT_PROCESSED"
    #[serde(default)]
    pub status: String,
    /// Informational messages such as "No Data Available for Series X Year: 2026"
    #[serde(default)]
    pub message: Vec<String>,
    #[serde(rename = "Results", default)]
    results: Option<BlsResults>,
}

#[derive(Debug, Deserialize)]
struct BlsResults {
    #[serde(default)]
    series: Vec<BlsSeries>,
}

#[derive(Debug, Deserialize)]
struct BlsSeries {
    #[serde(rename = "seriesID")]
    series_id: String,
    #[serde(default)]
    data: Vec<BlsDataPoint>,
}

/// A single data point as published; numbers arrive as strings
#[derive(Debug, Deserialize)]
struct BlsDataPoint {
    year: String,
    period: String,
    value: String,
}

/// Client for the BLS timeseries API
#[derive(Debug, Clone)]
pub struct BlsClient {
    client: Client,
    base_url: String,
    registration_key: Option<String>,
}

impl Default for BlsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl BlsClient {
    /// Create a client for the public endpoint without a registration key
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Create a client pointed at a custom endpoint
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            registration_key: None,
        }
    }

    /// Create a client from runtime configuration
    pub fn from_config(config: &Config) -> Self {
        Self::with_base_url(config.api_url.clone())
            .with_registration_key(config.registration_key.clone())
    }

    /// Attach (or clear) a registration key
    pub fn with_registration_key(mut self, key: Option<String>) -> Self {
        self.registration_key = key;
        self
    }

    /// Fetch monthly observations for the given series and year range
    ///
    /// # Returns
    /// * `Ok(Vec<Observation>)` - Monthly observations, possibly empty
    /// * `Err(BlsError)` - If the request, status or parsing fails
    pub async fn fetch_observations(
        &self,
        series_ids: &[&str],
        start_year: i32,
        end_year: i32,
    ) -> Result<Vec<Observation>, BlsError> {
        let body = SeriesRequest {
            seriesid: series_ids,
            startyear: start_year.to_string(),
            endyear: end_year.to_string(),
            registrationkey: self.registration_key.as_deref(),
        };

        log::debug!(
            "POST {} for {} series, {}-{}",
            self.base_url,
            series_ids.len(),
            start_year,
            end_year
        );

        let response = self.client.post(&self.base_url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BlsError::HttpStatus(status.as_u16()));
        }

        let text = response.text().await?;
        let api_response: BlsResponse = serde_json::from_str(&text)?;

        log::debug!("BLS API status: {}", api_response.status);
        for message in &api_response.message {
            log::warn!("BLS API: {}", message);
        }

        parse_response(api_response)
    }
}

/// Flatten a response into monthly observations
///
/// Non-monthly periods (annual averages `M13`, `A01`, semi-annual `S01`, ...)
/// are dropped before their year or value is looked at.
pub fn parse_response(response: BlsResponse) -> Result<Vec<Observation>, BlsError> {
    let series = response.results.map(|r| r.series).unwrap_or_default();

    let mut observations = Vec::new();
    for entry in series {
        for point in entry.data {
            let Some(month) = parse_month(&point.period) else {
                continue;
            };

            let year = point
                .year
                .trim()
                .parse::<i32>()
                .map_err(|_| BlsError::InvalidYear {
                    series_id: entry.series_id.clone(),
                    year: point.year.clone(),
                })?;

            let value = point
                .value
                .trim()
                .parse::<f64>()
                .map_err(|_| BlsError::InvalidValue {
                    series_id: entry.series_id.clone(),
                    value: point.value.clone(),
                })?;

            observations.push(Observation::new(entry.series_id.clone(), year, month, value));
        }
    }

    Ok(observations)
}

/// Map a BLS period code to a month number
///
/// Only `M01`..`M12` are monthly; everything else yields `None`.
pub fn parse_month(period: &str) -> Option<u32> {
    let digits = period.strip_prefix('M')?;
    if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let month: u32 = digits.parse().ok()?;
    (1..=12).contains(&month).then_some(month)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_from(json: &str) -> BlsResponse {
        serde_json::from_str(json).expect("fixture should deserialize")
    }

    const SAMPLE_RESPONSE: &str = r#"{
        "status": "REQUEST_SUCCEEDED",
        "responseTime": 120,
        "message": [],
        "Results": {
            "series": [
                {
                    "seriesID": "LNS14000000",
                    "data": [
                        {"year": "2025", "period": "M13", "periodName": "Annual", "value": "4.2", "footnotes": [{}]},
                        {"year": "2025", "period": "M02", "periodName": "February", "latest": "true", "value": "4.1", "footnotes": [{}]},
                        {"year": "2025", "period": "M01", "periodName": "January", "value": "4.0", "footnotes": [{}]}
                    ]
                },
                {
                    "seriesID": "CES0000000001",
                    "data": [
                        {"year": "2024", "period": "M12", "periodName": "December", "value": "159266", "footnotes": [{}]}
                    ]
                }
            ]
        }
    }"#;

    #[test]
    fn test_parse_month_accepts_all_monthly_codes() {
        for month in 1..=12u32 {
            let code = format!("M{:02}", month);
            assert_eq!(parse_month(&code), Some(month), "period {}", code);
        }
    }

    #[test]
    fn test_parse_month_rejects_non_monthly_codes() {
        for code in ["M13", "M00", "A01", "S01", "Q01", "M1", "M001", "", "m01", "Mx1"] {
            assert_eq!(parse_month(code), None, "period {:?} should be excluded", code);
        }
    }

    #[test]
    fn test_parse_response_keeps_monthly_and_drops_annual() {
        let observations = parse_response(response_from(SAMPLE_RESPONSE)).unwrap();

        assert_eq!(
            observations,
            vec![
                Observation::new("LNS14000000", 2025, 2, 4.1),
                Observation::new("LNS14000000", 2025, 1, 4.0),
                Observation::new("CES0000000001", 2024, 12, 159266.0),
            ]
        );
    }

    #[test]
    fn test_parse_response_without_results_is_empty() {
        let response = response_from(
            r#"{"status": "REQUEST_NOT_PROCESSED", "message": ["daily threshold reached"]}"#,
        );
        assert_eq!(response.message.len(), 1);
        assert!(parse_response(response).unwrap().is_empty());
    }

    #[test]
    fn test_parse_response_with_empty_series_is_empty() {
        let response = response_from(r#"{"status": "REQUEST_SUCCEEDED", "Results": {"series": []}}"#);
        assert!(parse_response(response).unwrap().is_empty());
    }

    #[test]
    fn test_parse_response_invalid_value_is_error() {
        let response = response_from(
            r#"{"Results": {"series": [{"seriesID": "LNS14000000",
                "data": [{"year": "2025", "period": "M03", "value": "-"}]}]}}"#,
        );

        let err = parse_response(response).unwrap_err();
        assert!(matches!(err, BlsError::InvalidValue { .. }));
        assert!(err.to_string().contains("LNS14000000"));
    }

    #[test]
    fn test_parse_response_ignores_bad_value_on_annual_period() {
        let response = response_from(
            r#"{"Results": {"series": [{"seriesID": "LNS14000000",
                "data": [{"year": "2025", "period": "M13", "value": "-"}]}]}}"#,
        );
        assert!(parse_response(response).unwrap().is_empty());
    }

    #[test]
    fn test_parse_response_invalid_year_is_error() {
        let response = response_from(
            r#"{"Results": {"series": [{"seriesID": "LNS14000000",
                "data": [{"year": "20x5", "period": "M03", "value": "4.0"}]}]}}"#,
        );
        assert!(matches!(
            parse_response(response).unwrap_err(),
            BlsError::InvalidYear { .. }
        ));
    }

    #[test]
    fn test_request_body_serializes_years_as_strings() {
        let ids = ["LNS14000000", "CES0000000001"];
        let body = SeriesRequest {
            seriesid: &ids,
            startyear: 2025.to_string(),
            endyear: 2026.to_string(),
            registrationkey: None,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "seriesid": ["LNS14000000", "CES0000000001"],
                "startyear": "2025",
                "endyear": "2026"
            })
        );
    }

    #[test]
    fn test_request_body_includes_registration_key_when_set() {
        let ids = ["LNS14000000"];
        let body = SeriesRequest {
            seriesid: &ids,
            startyear: "2025".to_string(),
            endyear: "2026".to_string(),
            registrationkey: Some("secret"),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["registrationkey"], "secret");
    }

    #[test]
    fn test_from_config_uses_configured_url() {
        let config = Config {
            api_url: "http://localhost:1234/".to_string(),
            registration_key: Some("k".to_string()),
            ..Config::default()
        };
        let client = BlsClient::from_config(&config);
        assert_eq!(client.base_url, "http://localhost:1234/");
        assert_eq!(client.registration_key.as_deref(), Some("k"));
    }
}
