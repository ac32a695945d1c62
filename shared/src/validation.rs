//! Plausibility validation for prediction parameters
//!
//! Only populated fields are checked; an absent field never produces a
//! finding. The wind-speed rule is deliberately warning-only: the models
//! extrapolate on wind speed, while an out-of-range humidity or hour is
//! physically meaningless.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ParameterRecord;

pub const TEMPERATURE_MIN_C: f64 = -10.0;
pub const TEMPERATURE_MAX_C: f64 = 40.0;
pub const WIND_SPEED_MAX_KMH: i32 = 60;
pub const YEAR_MIN: i32 = 2020;

/// Outcome of validating one parameter record: an overall verdict plus one
/// human-readable message per finding. Recomputed fresh on every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub overall_valid: bool,
    pub messages: Vec<String>,
}

/// Validate against plausibility bounds, using the current year for the
/// year window.
pub fn validate_parameters(params: &ParameterRecord) -> ValidationReport {
    validate_parameters_at(params, Utc::now().year())
}

/// Validate against plausibility bounds with an explicit current year
pub fn validate_parameters_at(params: &ParameterRecord, current_year: i32) -> ValidationReport {
    let mut messages = Vec::new();
    let mut overall_valid = true;

    if let Some(t) = params.temperature {
        if !(TEMPERATURE_MIN_C..=TEMPERATURE_MAX_C).contains(&t) {
            messages.push(format!(
                "Temperature {t}°C is outside typical range (-10°C to 40°C)"
            ));
            overall_valid = false;
        }
    }

    if let Some(h) = params.humidity {
        if !(0..=100).contains(&h) {
            messages.push(format!("Humidity {h}% is invalid (must be 0-100%)"));
            overall_valid = false;
        }
    }

    // Warning only: an unusual wind speed never flips the verdict
    if let Some(w) = params.wind_speed {
        if !(0..=WIND_SPEED_MAX_KMH).contains(&w) {
            messages.push(format!("Wind speed {w} km/h seems unusual"));
        }
    }

    if let Some(y) = params.year {
        if y < YEAR_MIN || y > current_year + 5 {
            messages.push(format!("Year {y} is outside expected range"));
            overall_valid = false;
        }
    }

    if let Some(m) = params.month {
        if !(1..=12).contains(&m) {
            messages.push(format!("Month {m} is invalid"));
            overall_valid = false;
        }
    }

    if let Some(h) = params.hour {
        if h > 23 {
            messages.push(format!("Hour {h} is invalid (must be 0-23)"));
            overall_valid = false;
        }
    }

    if messages.is_empty() {
        messages.push("All extracted parameters are valid".to_string());
    }

    ValidationReport {
        overall_valid,
        messages,
    }
}
