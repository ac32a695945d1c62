//! Categorical types used across the platform
//!
//! These are closed enumerations with fixed integer encodings that must
//! match the training data of the external demand models. Unknown labels
//! arriving over the API fall back to the code-1 variant instead of
//! rejecting the request.

use serde::{Deserialize, Serialize};

use crate::normalize;

/// Season of the year, encoded 1-4 in the training data
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Integer code used by the trained models
    pub fn code(&self) -> u8 {
        match self {
            Season::Spring => 1,
            Season::Summer => 2,
            Season::Fall => 3,
            Season::Winter => 4,
        }
    }
}

impl From<String> for Season {
    fn from(s: String) -> Self {
        normalize::season_from_token(&s).unwrap_or(Season::Spring)
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Spring => write!(f, "Spring"),
            Season::Summer => write!(f, "Summer"),
            Season::Fall => write!(f, "Fall"),
            Season::Winter => write!(f, "Winter"),
        }
    }
}

/// Weather situation, encoded 1-4 in the training data
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum WeatherCondition {
    Clear,
    MistCloudy,
    LightRainSnow,
    HeavyRainSnow,
}

impl WeatherCondition {
    /// Integer code used by the trained models
    pub fn code(&self) -> u8 {
        match self {
            WeatherCondition::Clear => 1,
            WeatherCondition::MistCloudy => 2,
            WeatherCondition::LightRainSnow => 3,
            WeatherCondition::HeavyRainSnow => 4,
        }
    }
}

impl From<String> for WeatherCondition {
    fn from(s: String) -> Self {
        normalize::weather_from_label(&s).unwrap_or(WeatherCondition::Clear)
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherCondition::Clear => write!(f, "Clear"),
            WeatherCondition::MistCloudy => write!(f, "Mist/Cloudy"),
            WeatherCondition::LightRainSnow => write!(f, "Light Rain/Snow"),
            WeatherCondition::HeavyRainSnow => write!(f, "Heavy Rain/Snow"),
        }
    }
}

/// Weekday/weekend classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum DayType {
    Weekday,
    Weekend,
}

impl From<String> for DayType {
    fn from(s: String) -> Self {
        normalize::day_type_from_token(&s).unwrap_or(DayType::Weekday)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Weekend => write!(f, "Weekend"),
        }
    }
}
