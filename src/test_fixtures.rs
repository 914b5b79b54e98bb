//! Shared builders for on-disk datasets and models used by unit tests.

use crate::model::pipeline::{LinearRegressor, StandardScaler, TemperatureModel};
use crate::types::feature::Feature;
use std::io::Write;
use tempfile::NamedTempFile;

pub(crate) struct DatasetRow {
    district: &'static str,
    date: &'static str,
    values: [Option<f64>; Feature::COUNT],
}

impl DatasetRow {
    pub(crate) fn new(
        district: &'static str,
        date: &'static str,
        values: [Option<f64>; Feature::COUNT],
    ) -> Self {
        Self {
            district,
            date,
            values,
        }
    }
}

/// Every feature set to `value`.
pub(crate) fn features(value: f64) -> [Option<f64>; Feature::COUNT] {
    [Some(value); Feature::COUNT]
}

pub(crate) fn write_dataset(rows: &[DatasetRow]) -> std::io::Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "District,Date,{}", Feature::column_names().join(","))?;
    for row in rows {
        let values: Vec<String> = row
            .values
            .iter()
            .map(|v| v.map(|v| format!("{:.3}", v)).unwrap_or_default())
            .collect();
        writeln!(file, "{},{},{}", row.district, row.date, values.join(","))?;
    }
    file.flush()?;
    Ok(file)
}

/// A model whose prediction is the mean `Temp_2m` plus `offset`.
pub(crate) fn temp_passthrough_model(offset: f64) -> TemperatureModel {
    let mut coefficients = [0.0; Feature::COUNT];
    coefficients[Feature::Temp2m.index()] = 1.0;
    let scaler = StandardScaler::new([0.0; Feature::COUNT], [1.0; Feature::COUNT])
        .expect("unit scale is valid");
    TemperatureModel::new(
        Box::new(scaler),
        Box::new(LinearRegressor::new(coefficients, offset)),
    )
}
