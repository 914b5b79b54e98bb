use thiserror::Error;

/// Why live weather data could not be used.
///
/// Wrapped `reqwest` errors have their URL stripped, as it carries the API key.
///
/// These never surface as `Err` from a forecast: they are carried inside
/// [`crate::LiveFetch::Unavailable`] and the historical fallback is taken.
#[derive(Debug, Error)]
pub enum LiveWeatherError {
    #[error("No weather service API key configured")]
    MissingApiKey,

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode weather service response from {0}")]
    Decode(String, #[source] reqwest::Error),

    #[error("Daily entry {index} is malformed")]
    MalformedEntry {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Daily entry {index} has no weather condition")]
    MissingCondition { index: usize },

    #[error("Weather service returned {found} daily entries, at least {expected} required")]
    Incomplete { expected: usize, found: usize },
}
