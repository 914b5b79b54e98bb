use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoricalDataError {
    #[error("Failed to read historical dataset '{0}'")]
    CsvRead(PathBuf, #[source] PolarsError),

    #[error("Required column '{0}' not found in historical dataset")]
    ColumnNotFound(String, #[source] PolarsError),

    #[error("Column 'Date' contains values that are not calendar dates")]
    DateParse(#[source] PolarsError),

    #[error("Failed processing historical DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
