//! Condition classification for both forecast sources.
//!
//! The two rule sets are independent: a live forecast day is labelled only by
//! [`classify_api_category`], an estimated day only by [`classify_estimate`].

use crate::types::condition::Condition;

/// Maps a weather-service condition category (`weather[0].main`) to a [`Condition`].
///
/// Matching is exact and case-sensitive. Unknown categories map to
/// [`Condition::Clear`].
///
/// # Examples
///
/// ```
/// use district_forecast::{classify_api_category, Condition};
///
/// assert_eq!(classify_api_category("Thunderstorm"), Condition::Stormy);
/// assert_eq!(classify_api_category("Tornado"), Condition::Clear);
/// ```
pub fn classify_api_category(category: &str) -> Condition {
    match category {
        "Clear" => Condition::Sunny,
        "Clouds" => Condition::Cloudy,
        "Rain" => Condition::Rainy,
        "Drizzle" => Condition::LightRain,
        "Thunderstorm" => Condition::Stormy,
        "Snow" => Condition::Snowy,
        "Mist" => Condition::Misty,
        "Haze" => Condition::Hazy,
        _ => Condition::Clear,
    }
}

/// Labels an estimated day from its predicted temperature (°C), mean humidity
/// and mean wind speed. Rules are checked top to bottom, first match wins.
///
/// | # | rule                                   | label  |
/// |---|----------------------------------------|--------|
/// | 1 | temp > 30 and humidity < 50            | Sunny  |
/// | 2 | humidity > 80                          | Rainy  |
/// | 3 | wind > 20                              | Windy  |
/// | 4 | temp < 5                               | Snowy  |
/// | 5 | humidity > 60 and temp < 25            | Cloudy |
/// | 6 | otherwise                              | Sunny  |
///
/// # Examples
///
/// ```
/// use district_forecast::{classify_estimate, Condition};
///
/// assert_eq!(classify_estimate(32.0, 40.0, 5.0), Condition::Sunny);
/// assert_eq!(classify_estimate(32.0, 85.0, 5.0), Condition::Rainy);
/// ```
pub fn classify_estimate(predicted_temp: f64, humidity: f64, wind_speed: f64) -> Condition {
    if predicted_temp > 30.0 && humidity < 50.0 {
        Condition::Sunny
    } else if humidity > 80.0 {
        Condition::Rainy
    } else if wind_speed > 20.0 {
        Condition::Windy
    } else if predicted_temp < 5.0 {
        Condition::Snowy
    } else if humidity > 60.0 && predicted_temp < 25.0 {
        Condition::Cloudy
    } else {
        Condition::Sunny
    }
}

/// Label for a day with no historical information at all.
pub fn no_data_condition() -> Condition {
    Condition::Cloudy
}
