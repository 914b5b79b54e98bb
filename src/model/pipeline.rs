//! The temperature model: a feature scaler followed by a regressor, loaded once
//! at startup and shared read-only afterwards.

use crate::model::error::ModelError;
use crate::types::feature::{Feature, FeatureVector};
use log::info;
use serde::Deserialize;
use std::path::Path;

/// Normalizes a raw [`FeatureVector`] into the space the regressor was fitted in.
pub trait Scaler: Send + Sync {
    fn transform(&self, features: &FeatureVector) -> [f64; Feature::COUNT];
}

/// Predicts a single temperature from a scaled feature vector.
pub trait Regressor: Send + Sync {
    fn predict(&self, scaled: &[f64; Feature::COUNT]) -> f64;
}

/// Standard scaling: `(x - mean) / scale` per feature.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: [f64; Feature::COUNT],
    scale: [f64; Feature::COUNT],
}

impl StandardScaler {
    /// Fails with [`ModelError::InvalidScale`] if any scale is zero or not finite.
    pub fn new(
        mean: [f64; Feature::COUNT],
        scale: [f64; Feature::COUNT],
    ) -> Result<Self, ModelError> {
        for (feature, value) in Feature::ALL.iter().zip(scale.iter()) {
            if *value == 0.0 || !value.is_finite() {
                return Err(ModelError::InvalidScale {
                    feature: feature.column_name().to_string(),
                    value: *value,
                });
            }
        }
        Ok(Self { mean, scale })
    }
}

impl Scaler for StandardScaler {
    fn transform(&self, features: &FeatureVector) -> [f64; Feature::COUNT] {
        let raw = features.as_array();
        std::array::from_fn(|i| (raw[i] - self.mean[i]) / self.scale[i])
    }
}

/// Ordinary linear regression: `intercept + Σ coefficient·x`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegressor {
    coefficients: [f64; Feature::COUNT],
    intercept: f64,
}

impl LinearRegressor {
    pub fn new(coefficients: [f64; Feature::COUNT], intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }
}

impl Regressor for LinearRegressor {
    fn predict(&self, scaled: &[f64; Feature::COUNT]) -> f64 {
        self.coefficients
            .iter()
            .zip(scaled.iter())
            .fold(self.intercept, |acc, (c, x)| acc + c * x)
    }
}

/// On-disk model definition, see `TemperatureModel::from_json_file`.
#[derive(Debug, Deserialize)]
struct ModelFile {
    features: Vec<String>,
    scaler: ScalerFile,
    regressor: RegressorFile,
}

#[derive(Debug, Deserialize)]
struct ScalerFile {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct RegressorFile {
    coefficients: Vec<f64>,
    intercept: f64,
}

fn to_feature_array(
    name: &'static str,
    values: Vec<f64>,
) -> Result<[f64; Feature::COUNT], ModelError> {
    let found = values.len();
    values
        .try_into()
        .map_err(|_| ModelError::DimensionMismatch {
            name,
            expected: Feature::COUNT,
            found,
        })
}

/// Scaler and regressor applied in sequence to an averaged [`FeatureVector`].
pub struct TemperatureModel {
    scaler: Box<dyn Scaler>,
    regressor: Box<dyn Regressor>,
}

impl TemperatureModel {
    pub fn new(scaler: Box<dyn Scaler>, regressor: Box<dyn Regressor>) -> Self {
        Self { scaler, regressor }
    }

    /// Loads a standard-scaler + linear-regression model from a JSON file:
    ///
    /// ```json
    /// {
    ///   "features": ["Precip", "Pressure", "Humidity_2m", "WindSpeed_10m",
    ///                "MaxWindSpeed_10m", "MinWindSpeed_10m", "Temp_2m",
    ///                "RH_2m", "MaxTemp_2m", "MinTemp_2m"],
    ///   "scaler": { "mean": [...], "scale": [...] },
    ///   "regressor": { "coefficients": [...], "intercept": 0.0 }
    /// }
    /// ```
    ///
    /// The `features` list must match [`Feature::ALL`] exactly, in order.
    pub fn from_json_file(path: &Path) -> Result<Self, ModelError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ModelError::FileRead(path.to_path_buf(), e))?;
        let file: ModelFile = serde_json::from_str(&contents)
            .map_err(|e| ModelError::FileDecode(path.to_path_buf(), e))?;
        let model = Self::from_definition(file)?;
        info!("Loaded temperature model from {}", path.display());
        Ok(model)
    }

    /// Same as [`TemperatureModel::from_json_file`], from an in-memory string.
    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        let file: ModelFile = serde_json::from_str(json)?;
        Self::from_definition(file)
    }

    fn from_definition(file: ModelFile) -> Result<Self, ModelError> {
        let expected = Feature::column_names();
        if file.features.iter().map(String::as_str).ne(expected.iter().copied()) {
            return Err(ModelError::FeatureOrderMismatch {
                expected: expected.iter().map(|s| s.to_string()).collect(),
                found: file.features,
            });
        }

        let scaler = StandardScaler::new(
            to_feature_array("scaler.mean", file.scaler.mean)?,
            to_feature_array("scaler.scale", file.scaler.scale)?,
        )?;
        let regressor = LinearRegressor::new(
            to_feature_array("regressor.coefficients", file.regressor.coefficients)?,
            file.regressor.intercept,
        );
        Ok(Self::new(Box::new(scaler), Box::new(regressor)))
    }

    /// Scales `features` and runs them through the regressor.
    pub fn predict(&self, features: &FeatureVector) -> f64 {
        let scaled = self.scaler.transform(features);
        self.regressor.predict(&scaled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn model_json(features: &[&str], scale: &[f64]) -> String {
        let mean = [0.0; Feature::COUNT];
        serde_json::json!({
            "features": features,
            "scaler": { "mean": mean, "scale": scale },
            "regressor": {
                "coefficients": [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0],
                "intercept": 0.5
            }
        })
        .to_string()
    }

    #[test]
    fn test_linear_pipeline_prediction() -> Result<(), ModelError> {
        let mut mean = [0.0; Feature::COUNT];
        let mut scale = [1.0; Feature::COUNT];
        mean[Feature::Temp2m.index()] = 10.0;
        scale[Feature::Temp2m.index()] = 2.0;
        let mut coefficients = [0.0; Feature::COUNT];
        coefficients[Feature::Temp2m.index()] = 4.0;

        let model = TemperatureModel::new(
            Box::new(StandardScaler::new(mean, scale)?),
            Box::new(LinearRegressor::new(coefficients, 20.0)),
        );

        let mut values = [0.0; Feature::COUNT];
        values[Feature::Temp2m.index()] = 14.0;
        // (14 - 10) / 2 * 4 + 20
        assert_eq!(model.predict(&FeatureVector::new(values)), 28.0);
        Ok(())
    }

    #[test]
    fn test_loads_model_from_file() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = NamedTempFile::new()?;
        file.write_all(model_json(&Feature::column_names(), &[1.0; Feature::COUNT]).as_bytes())?;

        let model = TemperatureModel::from_json_file(file.path())?;
        let mut values = [0.0; Feature::COUNT];
        values[Feature::Temp2m.index()] = 18.0;
        assert_eq!(model.predict(&FeatureVector::new(values)), 18.5);
        Ok(())
    }

    #[test]
    fn test_rejects_reordered_features() {
        let mut names = Feature::column_names();
        names.swap(0, 1);
        let result = TemperatureModel::from_json_str(&model_json(&names, &[1.0; Feature::COUNT]));
        assert!(matches!(result, Err(ModelError::FeatureOrderMismatch { .. })));
    }

    #[test]
    fn test_rejects_wrong_dimension() {
        let result = TemperatureModel::from_json_str(&model_json(&Feature::column_names(), &[1.0; 3]));
        assert!(matches!(
            result,
            Err(ModelError::DimensionMismatch {
                name: "scaler.scale",
                expected: 10,
                found: 3
            })
        ));
    }

    #[test]
    fn test_rejects_zero_scale() {
        let mut scale = [1.0; Feature::COUNT];
        scale[Feature::Rh2m.index()] = 0.0;
        let result = TemperatureModel::from_json_str(&model_json(&Feature::column_names(), &scale));
        match result {
            Err(ModelError::InvalidScale { feature, .. }) => assert_eq!(feature, "RH_2m"),
            _ => panic!("expected InvalidScale"),
        }
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = TemperatureModel::from_json_file(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(ModelError::FileRead(..))));
    }

    #[test]
    fn test_malformed_file_is_decode_error() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = NamedTempFile::new()?;
        file.write_all(b"{ not json")?;
        let result = TemperatureModel::from_json_file(file.path());
        assert!(matches!(result, Err(ModelError::FileDecode(..))));
        Ok(())
    }
}
