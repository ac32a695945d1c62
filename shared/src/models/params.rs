//! Prediction parameter records
//!
//! [`ParameterRecord`] is what the extractor produces: every field is
//! independently present or absent. [`ResolvedParameters`] is a fully
//! concrete set, ready for feature building; the gap between the two is
//! closed by merging a record with caller-side defaults.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{DayType, Season, WeatherCondition};

/// A partial set of prediction parameters, as recovered from document text.
/// An all-`None` record is a valid outcome for text containing nothing
/// recognizable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterRecord {
    pub season: Option<Season>,
    pub weather: Option<WeatherCondition>,
    /// Degrees Celsius
    pub temperature: Option<f64>,
    /// Relative humidity, percent
    pub humidity: Option<i32>,
    /// Whole km/h
    pub wind_speed: Option<i32>,
    pub year: Option<i32>,
    /// 1-12
    pub month: Option<u32>,
    /// 0-23, hourly predictions only
    pub hour: Option<u32>,
    pub holiday: Option<bool>,
    pub working_day: Option<bool>,
    pub day_type: Option<DayType>,
}

impl ParameterRecord {
    /// True if at least one field was recovered
    pub fn any_present(&self) -> bool {
        self.season.is_some()
            || self.weather.is_some()
            || self.temperature.is_some()
            || self.humidity.is_some()
            || self.wind_speed.is_some()
            || self.year.is_some()
            || self.month.is_some()
            || self.hour.is_some()
            || self.holiday.is_some()
            || self.working_day.is_some()
            || self.day_type.is_some()
    }

    /// Merge with defaults: an extracted value wins when present, the
    /// caller-supplied default fills the rest.
    pub fn resolve(&self, defaults: &ResolvedParameters) -> ResolvedParameters {
        ResolvedParameters {
            season: self.season.unwrap_or(defaults.season),
            weather: self.weather.unwrap_or(defaults.weather),
            temperature: self.temperature.unwrap_or(defaults.temperature),
            humidity: self.humidity.unwrap_or(defaults.humidity),
            wind_speed: self.wind_speed.unwrap_or(defaults.wind_speed),
            year: self.year.unwrap_or(defaults.year),
            month: self.month.unwrap_or(defaults.month),
            hour: self.hour.unwrap_or(defaults.hour),
            holiday: self.holiday.unwrap_or(defaults.holiday),
            working_day: self.working_day.unwrap_or(defaults.working_day),
            day_type: self.day_type.unwrap_or(defaults.day_type),
        }
    }
}

/// A fully-resolved parameter set for one prediction request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedParameters {
    pub season: Season,
    pub weather: WeatherCondition,
    pub temperature: f64,
    pub humidity: i32,
    pub wind_speed: i32,
    pub year: i32,
    pub month: u32,
    pub hour: u32,
    pub holiday: bool,
    pub working_day: bool,
    pub day_type: DayType,
}

impl ResolvedParameters {
    /// The form defaults used to prefill anything extraction left absent
    pub fn baseline(current_year: i32) -> Self {
        Self {
            season: Season::Spring,
            weather: WeatherCondition::Clear,
            temperature: 18.0,
            humidity: 60,
            wind_speed: 10,
            year: current_year,
            month: 1,
            hour: 12,
            holiday: false,
            working_day: true,
            day_type: DayType::Weekday,
        }
    }

    /// View as a record with every field present, e.g. for validating a
    /// manually entered parameter set.
    pub fn to_record(&self) -> ParameterRecord {
        ParameterRecord {
            season: Some(self.season),
            weather: Some(self.weather),
            temperature: Some(self.temperature),
            humidity: Some(self.humidity),
            wind_speed: Some(self.wind_speed),
            year: Some(self.year),
            month: Some(self.month),
            hour: Some(self.hour),
            holiday: Some(self.holiday),
            working_day: Some(self.working_day),
            day_type: Some(self.day_type),
        }
    }
}

impl Default for ResolvedParameters {
    fn default() -> Self {
        Self::baseline(Utc::now().year())
    }
}
