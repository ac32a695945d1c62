//! Parameter validation tests
//!
//! Property-based tests for the plausibility validator:
//! - The verdict is false iff some populated field is out of range
//! - Wind speed findings are warnings and never flip the verdict
//! - Absent fields never produce findings

use proptest::prelude::*;
use shared::{validate_parameters_at, ParameterRecord};

const CURRENT_YEAR: i32 = 2026;

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn test_valid_record_gets_affirmative_message() {
    let record = ParameterRecord {
        temperature: Some(22.0),
        humidity: Some(55),
        wind_speed: Some(12),
        year: Some(2025),
        month: Some(6),
        hour: Some(9),
        ..Default::default()
    };
    let report = validate_parameters_at(&record, CURRENT_YEAR);
    assert!(report.overall_valid);
    assert_eq!(report.messages, vec!["All extracted parameters are valid"]);
}

#[test]
fn test_each_failure_produces_its_own_message() {
    let record = ParameterRecord {
        temperature: Some(50.0),
        humidity: Some(150),
        month: Some(0),
        hour: Some(24),
        year: Some(2019),
        ..Default::default()
    };
    let report = validate_parameters_at(&record, CURRENT_YEAR);
    assert!(!report.overall_valid);
    assert_eq!(report.messages.len(), 5);
}

#[test]
fn test_year_upper_bound_tracks_current_year() {
    let record = ParameterRecord {
        year: Some(CURRENT_YEAR + 5),
        ..Default::default()
    };
    assert!(validate_parameters_at(&record, CURRENT_YEAR).overall_valid);

    let record = ParameterRecord {
        year: Some(CURRENT_YEAR + 6),
        ..Default::default()
    };
    assert!(!validate_parameters_at(&record, CURRENT_YEAR).overall_valid);
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The verdict is false exactly when some populated field violates
    /// its bounds; the wind-speed rule never participates
    #[test]
    fn prop_verdict_iff_out_of_range(
        temperature in proptest::option::of(-50.0f64..=80.0),
        humidity in proptest::option::of(-50i32..=200),
        wind_speed in proptest::option::of(0i32..=120),
        year in proptest::option::of(2000i32..=2040),
        month in proptest::option::of(0u32..=20),
        hour in proptest::option::of(0u32..=40),
    ) {
        let record = ParameterRecord {
            temperature,
            humidity,
            wind_speed,
            year,
            month,
            hour,
            ..Default::default()
        };
        let report = validate_parameters_at(&record, CURRENT_YEAR);

        let expect_valid = temperature.map_or(true, |t| (-10.0..=40.0).contains(&t))
            && humidity.map_or(true, |h| (0..=100).contains(&h))
            && year.map_or(true, |y| (2020..=CURRENT_YEAR + 5).contains(&y))
            && month.map_or(true, |m| (1..=12).contains(&m))
            && hour.map_or(true, |h| h <= 23);

        prop_assert_eq!(report.overall_valid, expect_valid);
    }

    /// High wind always leaves a message but never flips the verdict
    #[test]
    fn prop_wind_is_warning_only(wind in 61i32..=200) {
        let record = ParameterRecord {
            wind_speed: Some(wind),
            ..Default::default()
        };
        let report = validate_parameters_at(&record, CURRENT_YEAR);
        prop_assert!(report.overall_valid);
        prop_assert!(report.messages.iter().any(|m| m.contains("Wind speed")));
    }

    /// An absent field never produces a finding: a record with only one
    /// populated in-range field is always fully valid
    #[test]
    fn prop_absent_fields_are_silent(humidity in 0i32..=100) {
        let record = ParameterRecord {
            humidity: Some(humidity),
            ..Default::default()
        };
        let report = validate_parameters_at(&record, CURRENT_YEAR);
        prop_assert!(report.overall_valid);
        prop_assert_eq!(
            report.messages,
            vec!["All extracted parameters are valid".to_string()]
        );
    }
}
