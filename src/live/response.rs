//! Shapes of the weather service's daily forecast payload.

use crate::live::error::LiveWeatherError;
use crate::types::forecast::FORECAST_DAYS;
use serde::Deserialize;

/// Entries past the forecast horizon are kept undecoded and never inspected.
#[derive(Debug, Deserialize)]
pub(crate) struct OneCallResponse {
    #[serde(default)]
    pub(crate) daily: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawDailyEntry {
    temp: RawTemperature,
    humidity: f64,
    wind_speed: f64,
    #[serde(default)]
    weather: Vec<RawWeather>,
}

#[derive(Debug, Deserialize)]
struct RawTemperature {
    day: f64,
    min: f64,
    max: f64,
}

#[derive(Debug, Deserialize)]
struct RawWeather {
    main: String,
}

/// One day of live forecast data, in metric units.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveDailyEntry {
    pub temp_day: f64,
    pub temp_max: f64,
    pub temp_min: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    /// Primary condition category, e.g. `"Clouds"`.
    pub condition: String,
}

/// The first seven daily entries of one live weather request, today first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LiveForecastBundle {
    days: Vec<LiveDailyEntry>,
}

impl LiveForecastBundle {
    pub fn new(days: Vec<LiveDailyEntry>) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[LiveDailyEntry] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl TryFrom<OneCallResponse> for LiveForecastBundle {
    type Error = LiveWeatherError;

    fn try_from(response: OneCallResponse) -> Result<Self, Self::Error> {
        let days = response
            .daily
            .into_iter()
            .take(FORECAST_DAYS)
            .enumerate()
            .map(|(index, value)| {
                let raw: RawDailyEntry = serde_json::from_value(value)
                    .map_err(|source| LiveWeatherError::MalformedEntry { index, source })?;
                let condition = raw
                    .weather
                    .into_iter()
                    .next()
                    .map(|w| w.main)
                    .ok_or(LiveWeatherError::MissingCondition { index })?;
                Ok(LiveDailyEntry {
                    temp_day: raw.temp.day,
                    temp_max: raw.temp.max,
                    temp_min: raw.temp.min,
                    humidity: raw.humidity,
                    wind_speed: raw.wind_speed,
                    condition,
                })
            })
            .collect::<Result<Vec<_>, LiveWeatherError>>()?;
        Ok(Self::new(days))
    }
}
