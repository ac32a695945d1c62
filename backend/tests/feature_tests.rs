//! Feature vector contract tests
//!
//! The trained models consume positional vectors, so these properties
//! guard the column order and normalization:
//! - Row length always equals the column list length
//! - The hourly vector is the daily vector with `hr` appended last
//! - Normalized continuous features land in their expected ranges

use proptest::prelude::*;
use shared::{DailyFeatures, DayType, HourlyFeatures, ResolvedParameters, Season, WeatherCondition};

// ============================================================================
// Property Test Strategies
// ============================================================================

fn season_strategy() -> impl Strategy<Value = Season> {
    prop_oneof![
        Just(Season::Spring),
        Just(Season::Summer),
        Just(Season::Fall),
        Just(Season::Winter),
    ]
}

fn weather_strategy() -> impl Strategy<Value = WeatherCondition> {
    prop_oneof![
        Just(WeatherCondition::Clear),
        Just(WeatherCondition::MistCloudy),
        Just(WeatherCondition::LightRainSnow),
        Just(WeatherCondition::HeavyRainSnow),
    ]
}

fn day_type_strategy() -> impl Strategy<Value = DayType> {
    prop_oneof![Just(DayType::Weekday), Just(DayType::Weekend)]
}

fn params_strategy() -> impl Strategy<Value = ResolvedParameters> {
    (
        season_strategy(),
        weather_strategy(),
        -10.0f64..=40.0,
        0i32..=100,
        0i32..=60,
        2020i32..=2030,
        1u32..=12,
        0u32..=23,
        any::<bool>(),
        any::<bool>(),
        day_type_strategy(),
    )
        .prop_map(
            |(
                season,
                weather,
                temperature,
                humidity,
                wind_speed,
                year,
                month,
                hour,
                holiday,
                working_day,
                day_type,
            )| ResolvedParameters {
                season,
                weather,
                temperature,
                humidity,
                wind_speed,
                year,
                month,
                hour,
                holiday,
                working_day,
                day_type,
            },
        )
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn test_daily_column_contract() {
    assert_eq!(
        DailyFeatures::COLUMNS,
        [
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
        ]
    );
}

#[test]
fn test_hourly_columns_extend_daily_with_hr_last() {
    assert_eq!(HourlyFeatures::COLUMNS.len(), DailyFeatures::COLUMNS.len() + 1);
    assert_eq!(
        &HourlyFeatures::COLUMNS[..DailyFeatures::COLUMNS.len()],
        &DailyFeatures::COLUMNS
    );
    assert_eq!(*HourlyFeatures::COLUMNS.last().unwrap(), "hr");
}

#[test]
fn test_baseline_feature_values() {
    let params = ResolvedParameters::baseline(2024);
    let f = DailyFeatures::from_params(&params);

    assert_eq!(f.season, 1.0);
    assert_eq!(f.yr, 1.0);
    assert_eq!(f.mnth, 1.0);
    assert_eq!(f.holiday, 0.0);
    assert_eq!(f.weekday, 1.0);
    assert_eq!(f.workingday, 1.0);
    assert_eq!(f.weathersit, 1.0);
    assert_eq!(f.temp, 18.0 / 41.0);
    assert_eq!(f.atemp, 23.0 / 50.0);
    assert_eq!(f.hum, 0.6);
    assert_eq!(f.windspeed, 10.0 / 67.0);
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Row length always matches the column list
    #[test]
    fn prop_row_lengths_match_columns(params in params_strategy()) {
        let daily = DailyFeatures::from_params(&params);
        prop_assert_eq!(daily.to_row().len(), DailyFeatures::COLUMNS.len());

        let hourly = HourlyFeatures::from_params(&params);
        prop_assert_eq!(hourly.to_row().len(), HourlyFeatures::COLUMNS.len());
    }

    /// The hourly row is the daily row plus the hour, strictly last
    #[test]
    fn prop_hourly_row_is_daily_plus_hour(params in params_strategy()) {
        let daily = DailyFeatures::from_params(&params).to_row();
        let hourly = HourlyFeatures::from_params(&params).to_row();

        prop_assert_eq!(&hourly[..daily.len()], &daily[..]);
        prop_assert_eq!(hourly[daily.len()], f64::from(params.hour));
    }

    /// Normalized continuous features stay in their expected bands for
    /// in-range inputs, and categorical codes stay in 1-4
    #[test]
    fn prop_normalized_feature_ranges(params in params_strategy()) {
        let f = DailyFeatures::from_params(&params);

        prop_assert!((1.0..=4.0).contains(&f.season));
        prop_assert!(f.yr == 0.0 || f.yr == 1.0);
        prop_assert!((1.0..=12.0).contains(&f.mnth));
        prop_assert!((1.0..=4.0).contains(&f.weathersit));
        prop_assert!((0.0..=1.0).contains(&f.hum));
        prop_assert!((0.0..=1.0).contains(&f.windspeed));
        // temp spans negative Celsius; atemp's offset keeps it non-negative
        prop_assert!((-0.25..=1.0).contains(&f.temp));
        prop_assert!((-0.1..=1.0).contains(&f.atemp));
    }

    /// The year flag is exactly a pivot comparison
    #[test]
    fn prop_year_flag(year in 2000i32..=2040) {
        let mut params = ResolvedParameters::baseline(2024);
        params.year = year;
        let f = DailyFeatures::from_params(&params);
        prop_assert_eq!(f.yr, if year >= 2012 { 1.0 } else { 0.0 });
    }
}
