mod classifier;
mod error;
mod forecaster;
mod historical;
mod live;
mod model;
mod resolver;
mod types;
mod utils;

#[cfg(test)]
mod test_fixtures;

pub use error::ForecasterError;
pub use forecaster::*;

pub use classifier::{classify_api_category, classify_estimate, no_data_condition};
pub use resolver::{ForecastResolver, ForecastSource};

pub use historical::dataset::{HistoricalDataset, RecordMatch};
pub use historical::error::HistoricalDataError;
pub use historical::estimator::{HistoricalEstimate, HistoricalEstimator};

pub use live::error::LiveWeatherError;
pub use live::fetcher::{LiveFetch, LiveSource, LiveWeatherFetcher};
pub use live::response::{LiveDailyEntry, LiveForecastBundle};

pub use model::error::ModelError;
pub use model::pipeline::{LinearRegressor, Regressor, Scaler, StandardScaler, TemperatureModel};

pub use types::condition::Condition;
pub use types::feature::{Feature, FeatureVector};
pub use types::forecast::{DailyForecast, ForecastSequence, SourceKind, FORECAST_DAYS};
pub use types::location::{LatLon, Location, LocationRegistry};

pub use utils::get_data_dir;
