//! Model feature vectors
//!
//! The column order here is a hard contract with the externally trained
//! regression models: any reordering silently produces wrong predictions
//! rather than an error. Features are therefore typed, named structs and
//! the row assembly is the single place the order is spelled out.

use serde::Serialize;

use crate::models::ResolvedParameters;
use crate::types::DayType;

/// Training-time normalization divisors. These must never change
/// independently of the deployed models.
pub const TEMPERATURE_SCALE: f64 = 41.0;
pub const FEELS_LIKE_OFFSET: f64 = 5.0;
pub const FEELS_LIKE_SCALE: f64 = 50.0;
pub const HUMIDITY_SCALE: f64 = 100.0;
pub const WIND_SPEED_SCALE: f64 = 67.0;

/// The training data spans 2011-2012; the year feature is a flag for the
/// second year onward.
const YEAR_FLAG_PIVOT: i32 = 2012;

/// Feature vector for the daily demand model, in training column order
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyFeatures {
    pub season: f64,
    pub yr: f64,
    pub mnth: f64,
    pub holiday: f64,
    pub weekday: f64,
    pub workingday: f64,
    pub weathersit: f64,
    pub temp: f64,
    pub atemp: f64,
    pub hum: f64,
    pub windspeed: f64,
}

impl DailyFeatures {
    /// Column names in the exact order the daily model was trained with
    pub const COLUMNS: [&'static str; 11] = [
        "season",
        "yr",
        "mnth",
        "holiday",
        "weekday",
        "workingday",
        "weathersit",
        "temp",
        "atemp",
        "hum",
        "windspeed",
    ];

    pub fn from_params(p: &ResolvedParameters) -> Self {
        Self {
            season: f64::from(p.season.code()),
            yr: if p.year >= YEAR_FLAG_PIVOT { 1.0 } else { 0.0 },
            mnth: f64::from(p.month),
            holiday: if p.holiday { 1.0 } else { 0.0 },
            weekday: if p.day_type == DayType::Weekday { 1.0 } else { 0.0 },
            workingday: if p.working_day { 1.0 } else { 0.0 },
            weathersit: f64::from(p.weather.code()),
            temp: p.temperature / TEMPERATURE_SCALE,
            atemp: (p.temperature + FEELS_LIKE_OFFSET) / FEELS_LIKE_SCALE,
            hum: f64::from(p.humidity) / HUMIDITY_SCALE,
            windspeed: f64::from(p.wind_speed) / WIND_SPEED_SCALE,
        }
    }

    /// The row sent to the model, matching [`Self::COLUMNS`]
    pub fn to_row(&self) -> [f64; 11] {
        [
            self.season,
            self.yr,
            self.mnth,
            self.holiday,
            self.weekday,
            self.workingday,
            self.weathersit,
            self.temp,
            self.atemp,
            self.hum,
            self.windspeed,
        ]
    }
}

/// Feature vector for the hourly demand model: the daily columns with the
/// hour of day appended strictly last.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourlyFeatures {
    #[serde(flatten)]
    pub base: DailyFeatures,
    pub hr: f64,
}

impl HourlyFeatures {
    /// Column names in the exact order the hourly model was trained with;
    /// `hr` must stay last.
    pub const COLUMNS: [&'static str; 12] = [
        "season",
        "yr",
        "mnth",
        "holiday",
        "weekday",
        "workingday",
        "weathersit",
        "temp",
        "atemp",
        "hum",
        "windspeed",
        "hr",
    ];

    pub fn from_params(p: &ResolvedParameters) -> Self {
        Self {
            base: DailyFeatures::from_params(p),
            hr: f64::from(p.hour),
        }
    }

    /// The row sent to the model, matching [`Self::COLUMNS`]
    pub fn to_row(&self) -> [f64; 12] {
        let b = self.base.to_row();
        [
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7], b[8], b[9], b[10], self.hr,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Season, WeatherCondition};

    fn sample_params() -> ResolvedParameters {
        ResolvedParameters {
            season: Season::Winter,
            weather: WeatherCondition::HeavyRainSnow,
            temperature: 5.0,
            humidity: 80,
            wind_speed: 15,
            year: 2024,
            month: 12,
            hour: 17,
            holiday: true,
            working_day: false,
            day_type: DayType::Weekend,
        }
    }

    #[test]
    fn test_daily_feature_values() {
        let f = DailyFeatures::from_params(&sample_params());
        assert_eq!(f.season, 4.0);
        assert_eq!(f.yr, 1.0);
        assert_eq!(f.mnth, 12.0);
        assert_eq!(f.holiday, 1.0);
        assert_eq!(f.weekday, 0.0);
        assert_eq!(f.workingday, 0.0);
        assert_eq!(f.weathersit, 4.0);
        assert_eq!(f.temp, 5.0 / 41.0);
        assert_eq!(f.atemp, 10.0 / 50.0);
        assert_eq!(f.hum, 0.8);
        assert_eq!(f.windspeed, 15.0 / 67.0);
    }

    #[test]
    fn test_year_flag_pivot() {
        let mut p = sample_params();
        p.year = 2011;
        assert_eq!(DailyFeatures::from_params(&p).yr, 0.0);
        p.year = 2012;
        assert_eq!(DailyFeatures::from_params(&p).yr, 1.0);
    }

    #[test]
    fn test_daily_row_matches_column_order() {
        let f = DailyFeatures::from_params(&sample_params());
        let row = f.to_row();
        assert_eq!(row.len(), DailyFeatures::COLUMNS.len());
        assert_eq!(row[0], f.season);
        assert_eq!(row[6], f.weathersit);
        assert_eq!(row[10], f.windspeed);
    }

    #[test]
    fn test_hourly_row_has_hour_last() {
        let f = HourlyFeatures::from_params(&sample_params());
        let row = f.to_row();
        assert_eq!(row.len(), 12);
        assert_eq!(*HourlyFeatures::COLUMNS.last().unwrap(), "hr");
        assert_eq!(row[11], 17.0);
        // Everything before hr matches the daily layout
        assert_eq!(row[..11], DailyFeatures::from_params(&sample_params()).to_row());
    }
}
