//! Pattern-based parameter extraction from document text
//!
//! Each parameter owns an ordered table of `(pattern, capture-to-value)`
//! rows, tried against the lower-cased text. The first row whose pattern
//! matches ends the search for that field, even when its capture is then
//! discarded as out of range; fields are fully independent of one another.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::models::ParameterRecord;
use crate::normalize;
use crate::types::{DayType, Season, WeatherCondition};

/// One row of a field's strategy table
struct PatternRow<T: 'static> {
    regex: Regex,
    parse: fn(&Captures) -> Option<T>,
}

impl<T> PatternRow<T> {
    fn new(pattern: &str, parse: fn(&Captures) -> Option<T>) -> Self {
        Self {
            regex: Regex::new(pattern).expect("extraction pattern must compile"),
            parse,
        }
    }
}

/// First-match-wins over a field's table. A match that parses to `None`
/// (a range-rejected capture) still stops the search.
fn first_match<T>(text: &str, rows: &[PatternRow<T>]) -> Option<T> {
    for row in rows {
        if let Some(caps) = row.regex.captures(text) {
            return (row.parse)(&caps);
        }
    }
    None
}

static SEASON_ROWS: Lazy<Vec<PatternRow<Season>>> = Lazy::new(|| {
    let parse: fn(&Captures) -> Option<Season> =
        |caps| normalize::season_from_token(&caps[1]);
    vec![
        PatternRow::new(r"season[:\s-]*(spring|summer|fall|winter|autumn)", parse),
        PatternRow::new(r"(spring|summer|fall|winter|autumn)\s+season", parse),
        PatternRow::new(r"in\s+(spring|summer|fall|winter|autumn)", parse),
    ]
});

const WEATHER_VOCAB: &str =
    "clear|sunny|cloudy|mist|misty|fog|foggy|rain|rainy|snow|snowy|light rain|heavy rain|drizzle";

static WEATHER_ROWS: Lazy<Vec<PatternRow<WeatherCondition>>> = Lazy::new(|| {
    let parse: fn(&Captures) -> Option<WeatherCondition> =
        |caps| Some(normalize::classify_weather_token(&caps[1]));
    vec![
        PatternRow::new(&format!(r"weather[:\s-]*({WEATHER_VOCAB})"), parse),
        PatternRow::new(&format!(r"condition[:\s-]*({WEATHER_VOCAB})"), parse),
        PatternRow::new(
            r"(clear|sunny|cloudy|mist|misty|fog|foggy|rain|rainy|snow|snowy)\s+(weather|day|condition)",
            parse,
        ),
    ]
});

static TEMPERATURE_ROWS: Lazy<Vec<PatternRow<f64>>> = Lazy::new(|| {
    let parse: fn(&Captures) -> Option<f64> = |caps| {
        caps[1]
            .parse::<f64>()
            .ok()
            .map(normalize::normalize_temperature)
    };
    vec![
        PatternRow::new(r"temperature[:\s-]*(\d+\.?\d*)\s*°?[cf]?", parse),
        PatternRow::new(r"temp[:\s-]*(\d+\.?\d*)\s*°?[cf]?", parse),
        PatternRow::new(r"(\d+\.?\d*)\s*°c", parse),
        PatternRow::new(r"(\d+\.?\d*)\s*degrees?", parse),
    ]
});

static HUMIDITY_ROWS: Lazy<Vec<PatternRow<i32>>> = Lazy::new(|| {
    // Out-of-range readings are discarded here, not coerced; only values
    // that arrive by other means reach the validator's range complaint.
    let parse: fn(&Captures) -> Option<i32> = |caps| {
        caps[1]
            .parse::<i32>()
            .ok()
            .filter(|h| (0..=100).contains(h))
    };
    vec![
        PatternRow::new(r"humidity[:\s-]*(\d+)\s*%?", parse),
        PatternRow::new(r"(\d+)\s*%\s*humidity", parse),
        PatternRow::new(r"relative\s+humidity[:\s-]*(\d+)", parse),
    ]
});

static WIND_ROWS: Lazy<Vec<PatternRow<i32>>> = Lazy::new(|| {
    let parse_plain: fn(&Captures) -> Option<i32> = |caps| {
        caps[1]
            .parse::<f64>()
            .ok()
            .map(|w| normalize::normalize_wind_speed(w, None))
    };
    let parse_with_unit: fn(&Captures) -> Option<i32> = |caps| {
        let unit = caps.get(2).map(|m| m.as_str());
        caps[1]
            .parse::<f64>()
            .ok()
            .map(|w| normalize::normalize_wind_speed(w, unit))
    };
    vec![
        PatternRow::new(r"wind\s+speed[:\s-]*(\d+\.?\d*)", parse_plain),
        PatternRow::new(r"wind[:\s-]*(\d+\.?\d*)\s*(km/h|mph|m/s)?", parse_with_unit),
        PatternRow::new(r"(\d+\.?\d*)\s*(km/h|mph)\s+wind", parse_with_unit),
    ]
});

static YEAR_ROWS: Lazy<Vec<PatternRow<i32>>> = Lazy::new(|| {
    let parse: fn(&Captures) -> Option<i32> = |caps| {
        caps[1]
            .parse::<i32>()
            .ok()
            .filter(|y| (2020..=2030).contains(y))
    };
    vec![
        PatternRow::new(r"year[:\s-]*(\d{4})", parse),
        PatternRow::new(r"in\s+(\d{4})", parse),
        PatternRow::new(r"(\d{4})\s+year", parse),
    ]
});

static MONTH_ROWS: Lazy<Vec<PatternRow<u32>>> = Lazy::new(|| {
    let parse_digit: fn(&Captures) -> Option<u32> = |caps| {
        caps[1]
            .parse::<u32>()
            .ok()
            .filter(|m| (1..=12).contains(m))
    };
    let parse_name: fn(&Captures) -> Option<u32> =
        |caps| normalize::month_from_name(&caps[1]);
    vec![
        PatternRow::new(r"month[:\s-]*(\d{1,2})", parse_digit),
        PatternRow::new(
            r"(january|february|march|april|may|june|july|august|september|october|november|december)",
            parse_name,
        ),
        // MM/YYYY or MM-YYYY
        PatternRow::new(r"(\d{1,2})[/-](\d{4})", parse_digit),
    ]
});

static HOUR_ROWS: Lazy<Vec<PatternRow<u32>>> = Lazy::new(|| {
    let parse_plain: fn(&Captures) -> Option<u32> = |caps| {
        caps[1].parse::<u32>().ok().filter(|h| *h <= 23)
    };
    let parse_meridiem: fn(&Captures) -> Option<u32> = |caps| {
        let hour = caps[1].parse::<u32>().ok()?;
        let meridiem = caps.get(2).map(|m| m.as_str());
        Some(normalize::normalize_hour(hour, meridiem)).filter(|h| *h <= 23)
    };
    vec![
        PatternRow::new(r"hour[:\s-]*(\d{1,2})", parse_plain),
        PatternRow::new(r"time[:\s-]*(\d{1,2})[:h]", parse_plain),
        PatternRow::new(r"at\s+(\d{1,2})\s*(am|pm|:00)?", parse_meridiem),
    ]
});

static HOLIDAY_ROWS: Lazy<Vec<PatternRow<bool>>> = Lazy::new(|| {
    let parse_flag: fn(&Captures) -> Option<bool> =
        |caps| normalize::parse_yes_no(&caps[1]);
    // Lexical-only fallback: "not a holiday" negates, bare "holiday"
    // leaves the field absent.
    let parse_mention: fn(&Captures) -> Option<bool> = |caps| {
        let token = caps.get(1).map_or(&caps[0], |m| m.as_str());
        normalize::parse_yes_no(token)
    };
    vec![
        PatternRow::new(r"holiday[:\s-]*(yes|no|true|false)", parse_flag),
        PatternRow::new(r"is\s+holiday[:\s-]*(yes|no|true|false)", parse_flag),
        PatternRow::new(r"(not\s+a\s+)?holiday", parse_mention),
    ]
});

static WORKING_DAY_ROWS: Lazy<Vec<PatternRow<bool>>> = Lazy::new(|| {
    let parse: fn(&Captures) -> Option<bool> = |caps| {
        let token = &caps[1];
        Some(token.contains("yes") || token.contains("true"))
    };
    vec![
        PatternRow::new(r"working\s+day[:\s-]*(yes|no|true|false)", parse),
        PatternRow::new(r"workday[:\s-]*(yes|no|true|false)", parse),
        PatternRow::new(r"is\s+working\s+day[:\s-]*(yes|no)", parse),
    ]
});

static DAY_TYPE_ROWS: Lazy<Vec<PatternRow<DayType>>> = Lazy::new(|| {
    let parse: fn(&Captures) -> Option<DayType> =
        |caps| normalize::day_type_from_token(&caps[1]);
    vec![
        PatternRow::new(r"(weekday|weekend)", parse),
        PatternRow::new(r"day\s+type[:\s-]*(weekday|weekend)", parse),
        PatternRow::new(
            r"(monday|tuesday|wednesday|thursday|friday|saturday|sunday)",
            parse,
        ),
    ]
});

/// Extract every recognizable prediction parameter from raw document text.
/// A pure function: identical text always yields an identical record, and
/// text with nothing recognizable yields an all-`None` record.
pub fn extract_parameters(text: &str) -> ParameterRecord {
    if text.is_empty() {
        return ParameterRecord::default();
    }

    let lower = text.to_lowercase();

    ParameterRecord {
        season: first_match(&lower, &SEASON_ROWS),
        weather: first_match(&lower, &WEATHER_ROWS),
        temperature: first_match(&lower, &TEMPERATURE_ROWS),
        humidity: first_match(&lower, &HUMIDITY_ROWS),
        wind_speed: first_match(&lower, &WIND_ROWS),
        year: first_match(&lower, &YEAR_ROWS),
        month: first_match(&lower, &MONTH_ROWS),
        hour: first_match(&lower, &HOUR_ROWS),
        holiday: first_match(&lower, &HOLIDAY_ROWS),
        working_day: first_match(&lower, &WORKING_DAY_ROWS),
        day_type: first_match(&lower, &DAY_TYPE_ROWS),
    }
}
