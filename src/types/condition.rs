//! Defines the `Condition` enum, the coarse weather label attached to every
//! daily forecast.

use std::fmt;

/// A coarse weather condition label.
///
/// Live forecasts are labelled from the weather service's condition category,
/// historical estimates from a threshold rule set; see
/// [`crate::classify_api_category`] and [`crate::classify_estimate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Sunny,
    Cloudy,
    Rainy,
    LightRain,
    Stormy,
    Snowy,
    Misty,
    Hazy,
    /// Only produced by the historical rule set (strong mean wind).
    Windy,
    /// Fallback for categories the weather service reports that are not mapped.
    Clear,
}

impl Condition {
    /// The symbol shown on a forecast card.
    pub fn emoji(&self) -> &'static str {
        match self {
            Condition::Sunny => "☀️",
            Condition::Cloudy => "⛅",
            Condition::Rainy => "🌧️",
            Condition::LightRain => "🌦️",
            Condition::Stormy => "⛈️",
            Condition::Snowy => "❄️",
            Condition::Misty => "🌫️",
            Condition::Hazy => "🌁",
            Condition::Windy => "🌬️",
            Condition::Clear => "⛅️",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::Cloudy => "Cloudy",
            Condition::Rainy => "Rainy",
            Condition::LightRain => "Light Rain",
            Condition::Stormy => "Stormy",
            Condition::Snowy => "Snowy",
            Condition::Misty => "Misty",
            Condition::Hazy => "Hazy",
            Condition::Windy => "Windy",
            Condition::Clear => "Clear",
        }
    }
}

/// Formats as `"<emoji> <label>"`.
///
/// # Examples
///
/// ```
/// use district_forecast::Condition;
///
/// assert_eq!(Condition::LightRain.to_string(), "🌦️ Light Rain");
/// ```
impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.label())
    }
}
