// demos/forecast.rs
use district_forecast::{Forecaster, ForecasterError, SourceKind};

fn main() -> Result<(), ForecasterError> {
    // Set RUST_LOG=info (or debug) to see which data source was used and why.
    env_logger::init();

    let district = std::env::args().nth(1).unwrap_or_else(|| "Kathmandu".to_string());

    // Expects dailyclimate.csv and weather_model.json in the default data folder,
    // and OPENWEATHER_API_KEY in the environment for live data.
    let forecaster = Forecaster::new()?;

    let forecast = forecaster.forecast().location(&district).call();
    if forecast.source() == SourceKind::Historical {
        println!("⚠️ Live weather data not available, showing historical estimates.");
    }
    print!("{}", forecast);

    Ok(())
}
