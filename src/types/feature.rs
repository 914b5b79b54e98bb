//! Defines the ten historical climate features used as model input, and the
//! [`FeatureVector`] holding one averaged value per feature.

use std::fmt;
use std::ops::Index;

/// One numeric column of the historical climate dataset.
///
/// The declaration order is the column order the scaler and regression model
/// were fitted with, so [`Feature::ALL`] doubles as the model's input layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Daily precipitation (mm).
    Precip,
    /// Surface pressure (kPa).
    Pressure,
    /// Humidity at 2 metres.
    Humidity2m,
    /// Mean wind speed at 10 metres.
    WindSpeed10m,
    /// Maximum wind speed at 10 metres.
    MaxWindSpeed10m,
    /// Minimum wind speed at 10 metres.
    MinWindSpeed10m,
    /// Mean temperature at 2 metres (°C).
    Temp2m,
    /// Relative humidity at 2 metres (%).
    Rh2m,
    /// Maximum temperature at 2 metres (°C).
    MaxTemp2m,
    /// Minimum temperature at 2 metres (°C).
    MinTemp2m,
}

impl Feature {
    /// Number of features in a [`FeatureVector`].
    pub const COUNT: usize = 10;

    /// All features, in model input order.
    pub const ALL: [Feature; Feature::COUNT] = [
        Feature::Precip,
        Feature::Pressure,
        Feature::Humidity2m,
        Feature::WindSpeed10m,
        Feature::MaxWindSpeed10m,
        Feature::MinWindSpeed10m,
        Feature::Temp2m,
        Feature::Rh2m,
        Feature::MaxTemp2m,
        Feature::MinTemp2m,
    ];

    /// The column header of this feature in the historical CSV and model file.
    pub fn column_name(&self) -> &'static str {
        match self {
            Feature::Precip => "Precip",
            Feature::Pressure => "Pressure",
            Feature::Humidity2m => "Humidity_2m",
            Feature::WindSpeed10m => "WindSpeed_10m",
            Feature::MaxWindSpeed10m => "MaxWindSpeed_10m",
            Feature::MinWindSpeed10m => "MinWindSpeed_10m",
            Feature::Temp2m => "Temp_2m",
            Feature::Rh2m => "RH_2m",
            Feature::MaxTemp2m => "MaxTemp_2m",
            Feature::MinTemp2m => "MinTemp_2m",
        }
    }

    /// Position of this feature inside a [`FeatureVector`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub(crate) fn column_names() -> [&'static str; Feature::COUNT] {
        Feature::ALL.map(|f| f.column_name())
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

/// Averaged historical values for the ten [`Feature`]s, in model input order.
///
/// Produced by [`crate::HistoricalEstimator`] for one location and one date
/// criterion. A vector built from no records at all is all zeros.
///
/// # Examples
///
/// ```
/// use district_forecast::{Feature, FeatureVector};
///
/// let zeros = FeatureVector::zeroed();
/// assert_eq!(zeros[Feature::Temp2m], 0.0);
///
/// let mut values = [0.0; Feature::COUNT];
/// values[Feature::Humidity2m.index()] = 72.5;
/// let vector = FeatureVector::new(values);
/// assert_eq!(vector.get(Feature::Humidity2m), 72.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; Feature::COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; Feature::COUNT]) -> Self {
        Self(values)
    }

    pub fn zeroed() -> Self {
        Self([0.0; Feature::COUNT])
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.0[feature.index()]
    }

    pub fn as_array(&self) -> &[f64; Feature::COUNT] {
        &self.0
    }

    /// Iterates `(feature, value)` pairs in model input order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        Feature::ALL.iter().copied().zip(self.0.iter().copied())
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl Index<Feature> for FeatureVector {
    type Output = f64;

    fn index(&self, feature: Feature) -> &f64 {
        &self.0[feature.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_order_matches_dataset_headers() {
        assert_eq!(
            Feature::column_names(),
            [
                "Precip",
                "Pressure",
                "Humidity_2m",
                "WindSpeed_10m",
                "MaxWindSpeed_10m",
                "MinWindSpeed_10m",
                "Temp_2m",
                "RH_2m",
                "MaxTemp_2m",
                "MinTemp_2m",
            ]
        );
    }

    #[test]
    fn test_index_follows_declaration_order() {
        for (position, feature) in Feature::ALL.iter().enumerate() {
            assert_eq!(feature.index(), position);
        }
    }

    #[test]
    fn test_iter_pairs_features_with_values() {
        let mut values = [0.0; Feature::COUNT];
        values[Feature::MaxTemp2m.index()] = 31.0;
        let vector = FeatureVector::new(values);

        let max_temp = vector
            .iter()
            .find(|(feature, _)| *feature == Feature::MaxTemp2m)
            .map(|(_, value)| value);
        assert_eq!(max_temp, Some(31.0));
        assert_eq!(vector.iter().count(), Feature::COUNT);
    }
}
