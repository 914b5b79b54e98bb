use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to read model file '{0}'")]
    FileRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to decode model file '{0}'")]
    FileDecode(PathBuf, #[source] serde_json::Error),

    #[error("Failed to decode model definition")]
    Decode(#[from] serde_json::Error),

    #[error("Model expects features {found:?}, but the dataset provides {expected:?}")]
    FeatureOrderMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Model parameter '{name}' has {found} values, expected {expected}")]
    DimensionMismatch {
        name: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Scaler scale for feature '{feature}' must be finite and non-zero, got {value}")]
    InvalidScale { feature: String, value: f64 },
}
