use crate::historical::error::HistoricalDataError;
use crate::model::error::ModelError;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal startup errors. Once a [`crate::Forecaster`] exists, forecasts never fail.
#[derive(Debug, Error)]
pub enum ForecasterError {
    #[error(transparent)]
    HistoricalData(#[from] HistoricalDataError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Failed to determine data directory")]
    DataDirResolution,

    #[error("Data folder '{0}' does not exist or is not a directory")]
    DataDirMissing(PathBuf),
}
