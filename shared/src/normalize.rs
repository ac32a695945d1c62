//! Unit and category normalization
//!
//! Maps free-form tokens captured from document text (or submitted through
//! the API) onto the canonical encodings the demand models were trained on,
//! and converts physical units: Fahrenheit to Celsius, mph to km/h, and
//! 12-hour clock readings to 24-hour.

use crate::types::{DayType, Season, WeatherCondition};

/// Readings above this are assumed to be Fahrenheit. A legitimate Celsius
/// temperature never exceeds 50 in the model's operating range.
pub const FAHRENHEIT_THRESHOLD: f64 = 50.0;

/// Miles per hour to kilometers per hour
pub const MPH_TO_KMH: f64 = 1.60934;

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Convert a Fahrenheit reading to Celsius
pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

/// Normalize a raw temperature reading to Celsius, rounded to one decimal.
/// Values above [`FAHRENHEIT_THRESHOLD`] are reinterpreted as Fahrenheit.
pub fn normalize_temperature(raw: f64) -> f64 {
    let celsius = if raw > FAHRENHEIT_THRESHOLD {
        fahrenheit_to_celsius(raw)
    } else {
        raw
    };
    (celsius * 10.0).round() / 10.0
}

/// Normalize a wind-speed reading to whole km/h. A captured "mph" unit
/// token triggers conversion; the result is truncated, not rounded.
pub fn normalize_wind_speed(value: f64, unit: Option<&str>) -> i32 {
    let kmh = if unit.is_some_and(|u| u.contains("mph")) {
        value * MPH_TO_KMH
    } else {
        value
    };
    kmh as i32
}

/// Apply a 12-hour meridiem token to an hour reading: "pm" adds 12 unless
/// the reading is already 12 or later, and "12 am" wraps to 0.
pub fn normalize_hour(hour: u32, meridiem: Option<&str>) -> u32 {
    match meridiem {
        Some(m) if m.contains("pm") && hour < 12 => hour + 12,
        Some(m) if m.contains("am") && hour == 12 => 0,
        _ => hour,
    }
}

/// Map a season token to its canonical variant; "autumn" is an alias for
/// Fall. Unknown tokens yield no value rather than a default.
pub fn season_from_token(token: &str) -> Option<Season> {
    match token.trim().to_lowercase().as_str() {
        "spring" => Some(Season::Spring),
        "summer" => Some(Season::Summer),
        "fall" | "autumn" => Some(Season::Fall),
        "winter" => Some(Season::Winter),
        _ => None,
    }
}

/// Bucket a weather vocabulary token into one of the four coarse
/// conditions. Precedence is fixed: Clear, then Mist/Cloudy, then
/// Heavy Rain/Snow, and anything else lands in Light Rain/Snow.
pub fn classify_weather_token(token: &str) -> WeatherCondition {
    let t = token.to_lowercase();
    if t.contains("clear") || t.contains("sunny") {
        WeatherCondition::Clear
    } else if t.contains("mist") || t.contains("cloud") || t.contains("fog") {
        WeatherCondition::MistCloudy
    } else if t.contains("heavy") || t.contains("snow") {
        WeatherCondition::HeavyRainSnow
    } else {
        WeatherCondition::LightRainSnow
    }
}

/// Resolve a weather label from the API: canonical names first, then the
/// bucket classifier for anything that looks like weather vocabulary.
pub fn weather_from_label(label: &str) -> Option<WeatherCondition> {
    let t = label.trim().to_lowercase();
    match t.as_str() {
        "clear" => return Some(WeatherCondition::Clear),
        "mist_cloudy" | "mist/cloudy" => return Some(WeatherCondition::MistCloudy),
        "light_rain_snow" | "light rain/snow" => return Some(WeatherCondition::LightRainSnow),
        "heavy_rain_snow" | "heavy rain/snow" => return Some(WeatherCondition::HeavyRainSnow),
        _ => {}
    }
    let vocabulary = [
        "sunny", "cloud", "mist", "fog", "rain", "snow", "drizzle",
    ];
    if vocabulary.iter().any(|w| t.contains(w)) {
        Some(classify_weather_token(&t))
    } else {
        None
    }
}

/// Interpret boolean-like tokens: "yes"/"true" affirm, "no"/"false"/"not"
/// negate, anything else yields no value.
pub fn parse_yes_no(token: &str) -> Option<bool> {
    let t = token.to_lowercase();
    if t.contains("yes") || t.contains("true") {
        Some(true)
    } else if t.contains("no") || t.contains("false") || t.contains("not") {
        Some(false)
    } else {
        None
    }
}

/// Map a day token (weekday/weekend or a day name) to its classification
pub fn day_type_from_token(token: &str) -> Option<DayType> {
    match token.trim().to_lowercase().as_str() {
        "weekend" | "saturday" | "sunday" => Some(DayType::Weekend),
        "weekday" | "monday" | "tuesday" | "wednesday" | "thursday" | "friday" => {
            Some(DayType::Weekday)
        }
        _ => None,
    }
}

/// Map a full English month name to its 1-based number
pub fn month_from_name(name: &str) -> Option<u32> {
    let n = name.trim().to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|m| *m == n)
        .map(|i| i as u32 + 1)
}
