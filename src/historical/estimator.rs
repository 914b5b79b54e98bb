use crate::historical::dataset::{HistoricalDataset, RecordMatch};
use crate::model::pipeline::TemperatureModel;
use crate::types::feature::{Feature, FeatureVector};
use crate::types::location::Location;
use chrono::NaiveDate;
use log::error;
use std::sync::Arc;

/// Result of estimating one day from historical records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoricalEstimate {
    /// Mean of each feature over the matched records (unrounded).
    pub features: FeatureVector,
    /// Model output for `features`; zero when no records matched.
    pub predicted_temp: f64,
    pub matched: RecordMatch,
}

impl HistoricalEstimate {
    fn no_records() -> Self {
        Self {
            features: FeatureVector::zeroed(),
            predicted_temp: 0.0,
            matched: RecordMatch::NoRecords,
        }
    }

    pub fn has_data(&self) -> bool {
        self.matched != RecordMatch::NoRecords
    }

    pub fn humidity(&self) -> f64 {
        self.features[Feature::Humidity2m]
    }

    pub fn wind_speed(&self) -> f64 {
        self.features[Feature::WindSpeed10m]
    }

    pub fn max_temp(&self) -> f64 {
        self.features[Feature::MaxTemp2m]
    }

    pub fn min_temp(&self) -> f64 {
        self.features[Feature::MinTemp2m]
    }
}

/// Estimates a day's weather for a location from the historical dataset and
/// the temperature model. Both are shared, read-only state.
#[derive(Clone)]
pub struct HistoricalEstimator {
    dataset: Arc<HistoricalDataset>,
    model: Arc<TemperatureModel>,
}

impl HistoricalEstimator {
    pub fn new(dataset: Arc<HistoricalDataset>, model: Arc<TemperatureModel>) -> Self {
        Self { dataset, model }
    }

    /// The averaged feature vector for `location` on `date`.
    ///
    /// Querying the validated in-memory frame is not expected to fail; if it
    /// does, the failure is logged and treated as "no records".
    pub fn feature_vector(&self, location: &Location, date: NaiveDate) -> (RecordMatch, FeatureVector) {
        match self.dataset.average_features(&location.name, date) {
            Ok(result) => result,
            Err(e) => {
                error!(
                    "Historical query for {} on {} failed, treating as no data: {}",
                    location.name, date, e
                );
                (RecordMatch::NoRecords, FeatureVector::zeroed())
            }
        }
    }

    /// Averages the matching records and runs the model on the means.
    pub fn estimate(&self, location: &Location, date: NaiveDate) -> HistoricalEstimate {
        let (matched, features) = self.feature_vector(location, date);
        if matched == RecordMatch::NoRecords {
            return HistoricalEstimate::no_records();
        }
        HistoricalEstimate {
            features,
            predicted_temp: self.model.predict(&features),
            matched,
        }
    }
}
