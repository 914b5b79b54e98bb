use std::path::PathBuf;

const DATA_DIR_NAME: &str = "district_forecast";
pub(crate) const DATASET_FILE_NAME: &str = "dailyclimate.csv";
pub(crate) const MODEL_FILE_NAME: &str = "weather_model.json";

/// Default folder holding the historical dataset and the model file.
pub fn get_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join(DATA_DIR_NAME))
}
