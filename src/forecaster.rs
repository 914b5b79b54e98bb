//! This module provides the main entry point: a [`Forecaster`] that loads the
//! historical dataset and temperature model once, then produces seven-day
//! forecasts for named districts on demand.

use crate::error::ForecasterError;
use crate::historical::dataset::HistoricalDataset;
use crate::historical::estimator::HistoricalEstimator;
use crate::live::fetcher::{LiveSource, LiveWeatherFetcher};
use crate::model::pipeline::TemperatureModel;
use crate::resolver::ForecastResolver;
use crate::types::forecast::ForecastSequence;
use crate::types::location::LocationRegistry;
use crate::utils::{get_data_dir, DATASET_FILE_NAME, MODEL_FILE_NAME};
use bon::bon;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;
use std::sync::Arc;

/// The main forecasting client.
///
/// Holds the location registry, the shared read-only historical dataset and
/// model, and the live weather source. All loading happens at construction;
/// a constructed `Forecaster` always produces a forecast.
///
/// Create an instance using [`Forecaster::new()`] for the default data folder,
/// [`Forecaster::with_data_folder()`] for a custom one, or
/// [`Forecaster::from_parts()`] to inject already loaded components.
///
/// # Examples
///
/// ```no_run
/// # use district_forecast::{Forecaster, ForecasterError};
/// # fn main() -> Result<(), ForecasterError> {
/// let forecaster = Forecaster::new()?;
/// let forecast = forecaster.forecast().location("Pokhara").call();
/// assert_eq!(forecast.len(), 7);
/// println!("{}", forecast);
/// # Ok(())
/// # }
/// ```
pub struct Forecaster {
    registry: LocationRegistry,
    dataset: Arc<HistoricalDataset>,
    resolver: ForecastResolver,
}

#[bon]
impl Forecaster {
    /// Creates a `Forecaster` from a data folder.
    ///
    /// The folder must contain `dailyclimate.csv` and `weather_model.json`.
    /// The live source is configured from the environment, see
    /// [`LiveWeatherFetcher::from_env`].
    ///
    /// # Errors
    ///
    /// Returns [`ForecasterError::DataDirMissing`] if `data_folder` is not a directory,
    /// [`ForecasterError::HistoricalData`] if the dataset cannot be loaded, and
    /// [`ForecasterError::Model`] if the model file is unusable.
    pub fn with_data_folder(data_folder: PathBuf) -> Result<Self, ForecasterError> {
        if !data_folder.is_dir() {
            return Err(ForecasterError::DataDirMissing(data_folder));
        }
        let dataset = HistoricalDataset::from_csv(&data_folder.join(DATASET_FILE_NAME))?;
        let model = TemperatureModel::from_json_file(&data_folder.join(MODEL_FILE_NAME))?;

        Ok(Self::from_parts()
            .dataset(dataset)
            .model(model)
            .live_source(Arc::new(LiveWeatherFetcher::from_env()))
            .call())
    }

    /// Creates a `Forecaster` from the default data folder
    /// (e.g. `~/.local/share/district_forecast` on Linux).
    ///
    /// # Errors
    ///
    /// Returns [`ForecasterError::DataDirResolution`] if no data directory exists
    /// for this platform, otherwise the same errors as [`Forecaster::with_data_folder`].
    pub fn new() -> Result<Self, ForecasterError> {
        let data_folder = get_data_dir().ok_or(ForecasterError::DataDirResolution)?;
        Self::with_data_folder(data_folder)
    }

    /// Assembles a `Forecaster` from already loaded parts.
    ///
    /// * `.dataset(HistoricalDataset)`: **Required.**
    /// * `.model(TemperatureModel)`: **Required.**
    /// * `.registry(LocationRegistry)`: Optional. Defaults to [`LocationRegistry::nepal_districts`].
    /// * `.live_source(Arc<dyn LiveSource>)`: Optional. Defaults to [`LiveWeatherFetcher::from_env`].
    #[builder]
    pub fn from_parts(
        dataset: HistoricalDataset,
        model: TemperatureModel,
        registry: Option<LocationRegistry>,
        live_source: Option<Arc<dyn LiveSource>>,
    ) -> Self {
        let dataset = Arc::new(dataset);
        let live_source =
            live_source.unwrap_or_else(|| Arc::new(LiveWeatherFetcher::from_env()));
        let estimator = HistoricalEstimator::new(dataset.clone(), Arc::new(model));

        Self {
            registry: registry.unwrap_or_default(),
            dataset,
            resolver: ForecastResolver::new(estimator, live_source),
        }
    }

    /// Produces the seven-day forecast for a named location.
    ///
    /// * `.location(&str)`: **Required.** Unknown names use the registry's
    ///   default coordinates for the live query, and are still looked up by
    ///   name in the historical dataset.
    /// * `.today(NaiveDate)`: Optional. First forecast day, defaults to the local date.
    #[builder]
    pub fn forecast(&self, location: &str, today: Option<NaiveDate>) -> ForecastSequence {
        let today = today.unwrap_or_else(|| Local::now().date_naive());
        let location = self.registry.resolve(location);
        self.resolver.resolve(&location, today)
    }

    /// District names present in the historical dataset, in first-seen order.
    pub fn districts(&self) -> Result<Vec<String>, ForecasterError> {
        Ok(self.dataset.districts()?)
    }

    pub fn registry(&self) -> &LocationRegistry {
        &self.registry
    }
}
