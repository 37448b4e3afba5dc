//! English grammar helpers shared by every sentence

use crate::app::services::sentinel_codec::{Precision, format_number, round_to};

pub fn above_below(above: bool) -> &'static str {
    if above { "above" } else { "below" }
}

pub fn breaks_ties(breaks: bool) -> &'static str {
    if breaks { "breaks" } else { "ties" }
}

pub fn was_were(count: i64) -> &'static str {
    if count == 1 { "was" } else { "were" }
}

pub fn day_days(count: i64) -> &'static str {
    if count == 1 { "day" } else { "days" }
}

pub fn mile_miles(count: i64) -> &'static str {
    if count == 1 { "mile" } else { "miles" }
}

/// `inch` only for an amount of exactly one
pub fn inch_inches(amount: f64) -> &'static str {
    if (amount - 1.0).abs() < f64::EPSILON {
        "inch"
    } else {
        "inches"
    }
}

/// A temperature difference with its unit, e.g. `1 degree`, `12 degrees`
pub fn degree_degrees(degrees: i64) -> String {
    if degrees == 1 {
        "1 degree".to_string()
    } else {
        format!("{} degrees", degrees)
    }
}

/// A day count with its unit, e.g. `1 day`, `3 days`
pub fn count_days(count: i64) -> String {
    format!("{} {}", count, day_days(count))
}

/// An amount in inches with its unit, e.g. `1.00 inch`, `0.25 inches`
pub fn amount_inches(amount: f64, precision: Precision) -> String {
    let rounded = round_to(amount, precision);
    format!("{} {}", format_number(rounded, precision), inch_inches(rounded))
}

/// Fahrenheit to Celsius, rounded to a whole degree
pub fn celsius(fahrenheit: f64) -> String {
    format_number((fahrenheit - 32.0) * 5.0 / 9.0, Precision::Integer)
}

/// Whole-number count from a value, rounded half away from zero
pub fn whole(value: f64) -> i64 {
    round_to(value, Precision::Integer) as i64
}
