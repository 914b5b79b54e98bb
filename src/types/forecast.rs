//! Output types of a forecast resolution: one [`DailyForecast`] per day, seven
//! of them in a [`ForecastSequence`].

use crate::types::condition::Condition;
use crate::types::location::Location;
use chrono::NaiveDate;
use std::fmt;

/// Number of days in every [`ForecastSequence`].
pub const FORECAST_DAYS: usize = 7;

/// Which data source produced a [`ForecastSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Values taken from the live weather service.
    Live,
    /// Values averaged from historical records plus the temperature model.
    Historical,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Live => write!(f, "live"),
            SourceKind::Historical => write!(f, "historical"),
        }
    }
}

/// One day of a resolved forecast.
///
/// All numeric fields are rounded to one decimal place on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub date: NaiveDate,
    /// Full English weekday name of `date`, e.g. `"Monday"`.
    pub day_name: String,
    pub condition: Condition,
    /// Published temperature: the live day temperature, or the model output.
    pub predicted_temp: f64,
    pub max_temp: f64,
    pub min_temp: f64,
    pub humidity: f64,
    pub wind_speed: f64,
}

impl DailyForecast {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        date: NaiveDate,
        condition: Condition,
        predicted_temp: f64,
        max_temp: f64,
        min_temp: f64,
        humidity: f64,
        wind_speed: f64,
    ) -> Self {
        Self {
            date,
            day_name: date.format("%A").to_string(),
            condition,
            predicted_temp: round_one_decimal(predicted_temp),
            max_temp: round_one_decimal(max_temp),
            min_temp: round_one_decimal(min_temp),
            humidity: round_one_decimal(humidity),
            wind_speed: round_one_decimal(wind_speed),
        }
    }
}

/// Rounds half away from zero to one decimal place.
pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Exactly seven consecutive daily forecasts, starting with the requested day.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSequence {
    location: Location,
    source: SourceKind,
    days: [DailyForecast; FORECAST_DAYS],
}

impl ForecastSequence {
    pub(crate) fn new(
        location: Location,
        source: SourceKind,
        days: [DailyForecast; FORECAST_DAYS],
    ) -> Self {
        Self {
            location,
            source,
            days,
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Callers may surface a soft warning when this is [`SourceKind::Historical`].
    pub fn source(&self) -> SourceKind {
        self.source
    }

    pub fn days(&self) -> &[DailyForecast; FORECAST_DAYS] {
        &self.days
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyForecast> {
        self.days.iter()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<'a> IntoIterator for &'a ForecastSequence {
    type Item = &'a DailyForecast;
    type IntoIter = std::slice::Iter<'a, DailyForecast>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

/// Renders a plain-text table, one line per day.
impl fmt::Display for ForecastSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "7-day forecast for {} ({} data)",
            self.location.name, self.source
        )?;
        for day in &self.days {
            writeln!(
                f,
                "{:<10} {:<14} {:>6.1}°C {:>6.1}°C  (pred {:.1}°C, {:.1}% humidity, {:.1} km/h)",
                day.day_name,
                day.condition.to_string(),
                day.max_temp,
                day.min_temp,
                day.predicted_temp,
                day.humidity,
                day.wind_speed
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(21.34), 21.3);
        assert_eq!(round_one_decimal(21.36), 21.4);
        assert_eq!(round_one_decimal(-3.26), -3.3);
        assert_eq!(round_one_decimal(0.0), 0.0);
    }

    #[test]
    fn test_daily_forecast_rounds_and_names_weekday() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(); // a Monday
        let day = DailyForecast::new(date, Condition::Sunny, 24.449, 30.06, 12.94, 55.55, 3.33);

        assert_eq!(day.day_name, "Monday");
        assert_eq!(day.predicted_temp, 24.4);
        assert_eq!(day.max_temp, 30.1);
        assert_eq!(day.min_temp, 12.9);
        assert_eq!(day.wind_speed, 3.3);
    }
}
