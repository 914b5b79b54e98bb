//! Resolves a location and a start date into a seven-day [`ForecastSequence`].
//!
//! The data source is chosen once per resolution: either every day comes from
//! the live bundle or every day comes from historical estimates. The two are
//! never mixed within one sequence.

use crate::classifier::{classify_api_category, classify_estimate, no_data_condition};
use crate::historical::estimator::{HistoricalEstimate, HistoricalEstimator};
use crate::live::fetcher::{LiveFetch, LiveSource};
use crate::live::response::{LiveDailyEntry, LiveForecastBundle};
use crate::types::forecast::{DailyForecast, ForecastSequence, SourceKind, FORECAST_DAYS};
use crate::types::location::Location;
use chrono::{Days, NaiveDate};
use log::{debug, info};
use std::sync::Arc;

/// The data source selected for one resolution call.
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastSource {
    /// A live bundle holding at least [`FORECAST_DAYS`] entries.
    Live(LiveForecastBundle),
    Historical,
}

impl ForecastSource {
    /// Picks the live bundle only when it covers the full week.
    pub fn select(fetch: LiveFetch) -> Self {
        match fetch.into_bundle() {
            Some(bundle) if bundle.len() >= FORECAST_DAYS => ForecastSource::Live(bundle),
            Some(bundle) => {
                debug!(
                    "Live bundle has {} entries, need {}; using historical data",
                    bundle.len(),
                    FORECAST_DAYS
                );
                ForecastSource::Historical
            }
            None => ForecastSource::Historical,
        }
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            ForecastSource::Live(_) => SourceKind::Live,
            ForecastSource::Historical => SourceKind::Historical,
        }
    }
}

/// Produces seven-day forecasts from a live source with a historical fallback.
#[derive(Clone)]
pub struct ForecastResolver {
    estimator: HistoricalEstimator,
    live: Arc<dyn LiveSource>,
}

impl ForecastResolver {
    pub fn new(estimator: HistoricalEstimator, live: Arc<dyn LiveSource>) -> Self {
        Self { estimator, live }
    }

    /// The seven target dates, `today` first.
    ///
    /// Saturates at [`NaiveDate::MAX`]: days that would fall past the last
    /// representable date repeat it.
    pub fn target_dates(today: NaiveDate) -> [NaiveDate; FORECAST_DAYS] {
        std::array::from_fn(|offset| {
            today
                .checked_add_days(Days::new(offset as u64))
                .unwrap_or(NaiveDate::MAX)
        })
    }

    /// Resolves the forecast for `location` starting at `today`.
    ///
    /// Calls the live source exactly once. Never fails: when live data is
    /// unavailable every day is estimated from historical records.
    pub fn resolve(&self, location: &Location, today: NaiveDate) -> ForecastSequence {
        let dates = Self::target_dates(today);
        let source = ForecastSource::select(self.live.fetch(location.coordinates));
        info!(
            "Resolving forecast for {} from {} using {} data",
            location.name,
            today,
            source.kind()
        );

        let days = match &source {
            ForecastSource::Live(bundle) => {
                let entries = bundle.days();
                std::array::from_fn(|i| live_day(dates[i], &entries[i]))
            }
            ForecastSource::Historical => {
                dates.map(|date| historical_day(date, &self.estimator.estimate(location, date)))
            }
        };

        ForecastSequence::new(location.clone(), source.kind(), days)
    }
}

fn live_day(date: NaiveDate, entry: &LiveDailyEntry) -> DailyForecast {
    DailyForecast::new(
        date,
        classify_api_category(&entry.condition),
        entry.temp_day,
        entry.temp_max,
        entry.temp_min,
        entry.humidity,
        entry.wind_speed,
    )
}

fn historical_day(date: NaiveDate, estimate: &HistoricalEstimate) -> DailyForecast {
    let condition = if estimate.has_data() {
        classify_estimate(
            estimate.predicted_temp,
            estimate.humidity(),
            estimate.wind_speed(),
        )
    } else {
        no_data_condition()
    };
    DailyForecast::new(
        date,
        condition,
        estimate.predicted_temp,
        estimate.max_temp(),
        estimate.min_temp(),
        estimate.humidity(),
        estimate.wind_speed(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::historical::dataset::HistoricalDataset;
    use crate::live::error::LiveWeatherError;
    use crate::test_fixtures::{features, temp_passthrough_model, write_dataset, DatasetRow};
    use crate::types::condition::Condition;
    use crate::types::feature::Feature;
    use crate::types::location::LatLon;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns a canned bundle (or unavailability) and counts calls.
    struct StubSource {
        days: Option<usize>,
        calls: AtomicUsize,
    }

    impl StubSource {
        fn with_days(days: usize) -> Self {
            Self {
                days: Some(days),
                calls: AtomicUsize::new(0),
            }
        }

        fn unavailable() -> Self {
            Self {
                days: None,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl LiveSource for StubSource {
        fn fetch(&self, _location: LatLon) -> LiveFetch {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.days {
                Some(n) => LiveFetch::Available(LiveForecastBundle::new(
                    (0..n)
                        .map(|i| LiveDailyEntry {
                            temp_day: 100.0 + i as f64 + 0.04,
                            temp_max: 110.0,
                            temp_min: 90.0,
                            humidity: 55.0,
                            wind_speed: 4.26,
                            condition: if i == 0 { "Drizzle" } else { "Volcano" }.to_string(),
                        })
                        .collect(),
                )),
                None => LiveFetch::Unavailable(LiveWeatherError::MissingApiKey),
            }
        }
    }

    fn pokhara() -> Location {
        Location::new("Pokhara", LatLon(28.2096, 83.9856))
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 30).unwrap() // a Sunday
    }

    fn resolver(live: Arc<StubSource>) -> Result<ForecastResolver, Box<dyn std::error::Error>> {
        let mut humid = features(18.0);
        humid[Feature::Humidity2m.index()] = Some(85.0);
        let mut hot_dry = features(31.0);
        hot_dry[Feature::Humidity2m.index()] = Some(30.0);

        let file = write_dataset(&[
            // 30th and 31st have exact day matches
            DatasetRow::new("Pokhara", "2020-03-30", humid),
            DatasetRow::new("Pokhara", "2020-03-31", hot_dry),
            // April days fall back to this month match
            DatasetRow::new("Pokhara", "2020-04-15", features(18.0)),
        ])?;
        let dataset = HistoricalDataset::from_csv(file.path())?;
        let estimator = HistoricalEstimator::new(
            Arc::new(dataset),
            Arc::new(temp_passthrough_model(0.0)),
        );
        Ok(ForecastResolver::new(estimator, live))
    }

    #[test]
    fn test_target_dates_are_consecutive() {
        let dates = ForecastResolver::target_dates(today());
        assert_eq!(dates[0], today());
        assert_eq!(dates[6], NaiveDate::from_ymd_opt(2025, 4, 5).unwrap());
    }

    #[test]
    fn test_target_dates_saturate_at_calendar_end() {
        let eve = NaiveDate::MAX.pred_opt().unwrap();
        let dates = ForecastResolver::target_dates(eve);
        assert_eq!(dates[0], eve);
        assert_eq!(dates[1], NaiveDate::MAX);
        assert!(dates[2..].iter().all(|d| *d == NaiveDate::MAX));
    }

    #[test]
    fn test_full_live_bundle_is_used_for_every_day() -> Result<(), Box<dyn std::error::Error>> {
        let live = Arc::new(StubSource::with_days(8));
        let forecast = resolver(live.clone())?.resolve(&pokhara(), today());

        assert_eq!(forecast.len(), 7);
        assert_eq!(forecast.source(), SourceKind::Live);
        assert_eq!(live.calls.load(Ordering::SeqCst), 1);

        for (i, day) in forecast.iter().enumerate() {
            assert_eq!(day.predicted_temp, 100.0 + i as f64);
            assert_eq!(day.max_temp, 110.0);
            assert_eq!(day.wind_speed, 4.3);
        }
        assert_eq!(forecast.days()[0].condition, Condition::LightRain);
        assert_eq!(forecast.days()[1].condition, Condition::Clear);
        assert_eq!(forecast.days()[0].day_name, "Sunday");
        assert_eq!(forecast.days()[6].day_name, "Saturday");
        Ok(())
    }

    #[test]
    fn test_short_bundle_falls_back_for_every_day() -> Result<(), Box<dyn std::error::Error>> {
        let forecast =
            resolver(Arc::new(StubSource::with_days(6)))?.resolve(&pokhara(), today());

        assert_eq!(forecast.len(), 7);
        assert_eq!(forecast.source(), SourceKind::Historical);
        assert!(forecast.iter().all(|d| d.max_temp < 100.0));
        Ok(())
    }

    #[test]
    fn test_unavailable_live_data_uses_historical_rules() -> Result<(), Box<dyn std::error::Error>> {
        let forecast = resolver(Arc::new(StubSource::unavailable()))?.resolve(&pokhara(), today());

        assert_eq!(forecast.source(), SourceKind::Historical);
        let days = forecast.days();

        // 30 March: exact day match, humidity 85 -> rainy
        assert_eq!(days[0].condition, Condition::Rainy);
        assert_eq!(days[0].humidity, 85.0);
        assert_eq!(days[0].predicted_temp, 18.0);

        // 31 March: exact day match, 31 °C and dry -> sunny
        assert_eq!(days[1].condition, Condition::Sunny);
        assert_eq!(days[1].predicted_temp, 31.0);

        // 1-5 April: month match on the single April record, humidity 18 -> default sunny
        for day in &days[2..] {
            assert_eq!(day.predicted_temp, 18.0);
            assert_eq!(day.condition, Condition::Sunny);
        }
        Ok(())
    }

    #[test]
    fn test_location_without_records_yields_zero_forecast() -> Result<(), Box<dyn std::error::Error>> {
        let nowhere = Location::new("Mustang", LatLon(28.9, 83.8));
        let forecast = resolver(Arc::new(StubSource::unavailable()))?.resolve(&nowhere, today());

        assert_eq!(forecast.len(), 7);
        for day in &forecast {
            assert_eq!(day.condition, Condition::Cloudy);
            assert_eq!(day.predicted_temp, 0.0);
            assert_eq!(day.max_temp, 0.0);
            assert_eq!(day.min_temp, 0.0);
            assert_eq!(day.humidity, 0.0);
            assert_eq!(day.wind_speed, 0.0);
        }
        Ok(())
    }

    #[test]
    fn test_source_selection() {
        let full = LiveForecastBundle::new(vec![
            LiveDailyEntry {
                temp_day: 0.0,
                temp_max: 0.0,
                temp_min: 0.0,
                humidity: 0.0,
                wind_speed: 0.0,
                condition: "Clear".to_string(),
            };
            7
        ]);
        assert_eq!(
            ForecastSource::select(LiveFetch::Available(full)).kind(),
            SourceKind::Live
        );
        assert_eq!(
            ForecastSource::select(LiveFetch::Available(LiveForecastBundle::default())),
            ForecastSource::Historical
        );
        assert_eq!(
            ForecastSource::select(LiveFetch::Unavailable(LiveWeatherError::MissingApiKey)),
            ForecastSource::Historical
        );
    }
}
