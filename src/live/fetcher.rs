use crate::live::error::LiveWeatherError;
use crate::live::response::{LiveForecastBundle, OneCallResponse};
use crate::types::forecast::FORECAST_DAYS;
use crate::types::location::LatLon;
use bon::bon;
use log::{info, warn};
use reqwest::blocking::Client;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/3.0/onecall";
const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";
const BASE_URL_ENV: &str = "OPENWEATHER_BASE_URL";

/// Outcome of a live weather request.
///
/// "Unavailable" is an expected outcome, not a failure of the forecast: the
/// reason is kept for logging and callers fall back to historical estimates.
#[derive(Debug)]
pub enum LiveFetch {
    Available(LiveForecastBundle),
    Unavailable(LiveWeatherError),
}

impl LiveFetch {
    pub fn is_available(&self) -> bool {
        matches!(self, LiveFetch::Available(_))
    }

    pub fn into_bundle(self) -> Option<LiveForecastBundle> {
        match self {
            LiveFetch::Available(bundle) => Some(bundle),
            LiveFetch::Unavailable(_) => None,
        }
    }
}

/// A source of live daily forecasts for a coordinate pair.
pub trait LiveSource: Send + Sync {
    fn fetch(&self, location: LatLon) -> LiveFetch;
}

/// Blocking client for a One Call style weather API.
///
/// Issues a single `GET` per [`LiveSource::fetch`] with metric units and no
/// retries. Any failure is turned into [`LiveFetch::Unavailable`].
#[derive(Debug, Clone)]
pub struct LiveWeatherFetcher {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

#[bon]
impl LiveWeatherFetcher {
    /// Creates a fetcher.
    ///
    /// # Arguments
    ///
    /// * `.api_key(String)`: Optional. Without a key every fetch reports
    ///   [`LiveWeatherError::MissingApiKey`] and no request is sent.
    /// * `.base_url(String)`: Optional. Defaults to the OpenWeatherMap One Call 3.0 endpoint.
    ///
    /// # Examples
    ///
    /// ```
    /// use district_forecast::{LatLon, LiveSource, LiveWeatherFetcher};
    ///
    /// let offline = LiveWeatherFetcher::builder().build();
    /// assert!(!offline.fetch(LatLon(27.7172, 85.3240)).is_available());
    /// ```
    #[builder]
    pub fn new(api_key: Option<String>, base_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Reads the API key from `OPENWEATHER_API_KEY` and an optional endpoint
    /// override from `OPENWEATHER_BASE_URL`.
    pub fn from_env() -> Self {
        Self::builder()
            .maybe_api_key(std::env::var(API_KEY_ENV).ok())
            .maybe_base_url(std::env::var(BASE_URL_ENV).ok())
            .build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, location: LatLon) -> Result<LiveForecastBundle, LiveWeatherError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LiveWeatherError::MissingApiKey)?;
        let url = self.base_url.clone();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", location.0.to_string()),
                ("lon", location.1.to_string()),
                ("appid", api_key.to_string()),
                ("units", "metric".to_string()),
                ("exclude", "minutely".to_string()),
            ])
            .send()
            .map_err(|e| LiveWeatherError::NetworkRequest(url.clone(), e.without_url()))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                return Err(if let Some(status) = e.status() {
                    LiveWeatherError::HttpStatus {
                        url,
                        status,
                        source: e.without_url(),
                    }
                } else {
                    LiveWeatherError::NetworkRequest(url, e.without_url())
                });
            }
        };

        let payload: OneCallResponse = response
            .json()
            .map_err(|e| LiveWeatherError::Decode(url.clone(), e.without_url()))?;
        let bundle = LiveForecastBundle::try_from(payload)?;
        if bundle.len() < FORECAST_DAYS {
            return Err(LiveWeatherError::Incomplete {
                expected: FORECAST_DAYS,
                found: bundle.len(),
            });
        }
        Ok(bundle)
    }
}

impl LiveSource for LiveWeatherFetcher {
    fn fetch(&self, location: LatLon) -> LiveFetch {
        match self.request(location) {
            Ok(bundle) => {
                info!(
                    "Live weather: {} daily entries for ({}, {})",
                    bundle.len(),
                    location.0,
                    location.1
                );
                LiveFetch::Available(bundle)
            }
            Err(e) => {
                warn!(
                    "Live weather data not available for ({}, {}): {}",
                    location.0, location.1, e
                );
                LiveFetch::Unavailable(e)
            }
        }
    }
}
