//! Sentinel-aware numeric formatting
//!
//! Turns an [`ObservationValue`] into the token painted into a table cell.
//! Present values become numerals at the requested precision, missing data
//! becomes the two-character missing token, not-applicable values stay blank,
//! and trace amounts become the trace token.
//!
//! Presentation policy (record-marker symbol, minus-sign symbol, colons and
//! letter case) is deliberately absent here. It is applied once to the
//! finished product by the assembler's post-processing pass.

use crate::app::models::ObservationValue;
use crate::constants::{MISSING_TOKEN, TRACE_TOKEN};
use serde::{Deserialize, Serialize};

/// Number of decimal places a value is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    /// Whole numbers: temperatures, degree days, day counts
    Integer,
    /// Tenths: snowfall, mean temperatures
    OneDecimal,
    /// Hundredths: precipitation
    TwoDecimal,
}

impl Precision {
    pub fn decimals(self) -> usize {
        match self {
            Precision::Integer => 0,
            Precision::OneDecimal => 1,
            Precision::TwoDecimal => 2,
        }
    }
}

/// Formatted content of one cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayToken {
    /// Text to paint into the cell
    Text(String),
    /// Nothing is painted; the cell stays blank
    Blank,
}

impl DisplayToken {
    pub fn text(text: impl Into<String>) -> Self {
        DisplayToken::Text(text.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            DisplayToken::Text(text) => text,
            DisplayToken::Blank => "",
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, DisplayToken::Blank)
    }

    /// Token padded on the left to `width` characters
    ///
    /// Tokens longer than `width` are returned unchanged.
    pub fn right_justified(&self, width: usize) -> String {
        format!("{:>width$}", self.as_str(), width = width)
    }
}

/// Format one value for a table cell
///
/// A trace renders as the trace token at every precision.
pub fn format(value: ObservationValue, precision: Precision) -> DisplayToken {
    match value {
        ObservationValue::Trace => DisplayToken::text(TRACE_TOKEN),
        other => format_temperature(other, precision),
    }
}

/// Format one value for a temperature-style cell
///
/// Temperatures never show the trace token; a trace renders as zero at the
/// requested precision.
pub fn format_temperature(value: ObservationValue, precision: Precision) -> DisplayToken {
    match value {
        ObservationValue::Present(number) => DisplayToken::Text(format_number(number, precision)),
        ObservationValue::Missing => DisplayToken::text(MISSING_TOKEN),
        ObservationValue::NotApplicable => DisplayToken::Blank,
        ObservationValue::Trace => DisplayToken::Text(format_number(0.0, precision)),
    }
}

/// Format the departure of `actual` from `normal`
///
/// Blank when either side does not apply, the missing token when either side
/// is missing, otherwise the difference with a trace counted as zero.
pub fn format_departure(
    actual: ObservationValue,
    normal: ObservationValue,
    precision: Precision,
) -> DisplayToken {
    if actual.is_not_applicable() || normal.is_not_applicable() {
        return DisplayToken::Blank;
    }

    match (actual.amount(), normal.amount()) {
        (Some(actual), Some(normal)) => {
            DisplayToken::Text(format_number(actual - normal, precision))
        }
        _ => DisplayToken::text(MISSING_TOKEN),
    }
}

/// Render a number at a fixed precision, rounding half away from zero
pub fn format_number(value: f64, precision: Precision) -> String {
    let rounded = round_to(value, precision);
    format!("{:.*}", precision.decimals(), rounded)
}

/// Round half away from zero, normalizing negative zero
pub fn round_to(value: f64, precision: Precision) -> f64 {
    let scale = 10f64.powi(precision.decimals() as i32);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 { 0.0 } else { rounded }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_values_at_each_precision() {
        let value = ObservationValue::Present(1.256);
        assert_eq!(format(value, Precision::Integer).as_str(), "1");
        assert_eq!(format(value, Precision::OneDecimal).as_str(), "1.3");
        assert_eq!(format(value, Precision::TwoDecimal).as_str(), "1.26");
    }

    #[test]
    fn test_integer_rounds_half_away_from_zero() {
        assert_eq!(format_number(72.5, Precision::Integer), "73");
        assert_eq!(format_number(-3.5, Precision::Integer), "-4");
        assert_eq!(format_number(0.125, Precision::TwoDecimal), "0.13");
    }

    #[test]
    fn test_negative_zero_is_normalized() {
        assert_eq!(format_number(-0.4, Precision::Integer), "0");
        assert_eq!(format_number(-0.04, Precision::OneDecimal), "0.0");
    }

    #[test]
    fn test_missing_renders_missing_token() {
        for precision in [Precision::Integer, Precision::OneDecimal, Precision::TwoDecimal] {
            assert_eq!(format(ObservationValue::Missing, precision).as_str(), "MM");
        }
    }

    #[test]
    fn test_not_applicable_is_blank_not_missing() {
        let token = format(ObservationValue::NotApplicable, Precision::TwoDecimal);
        assert!(token.is_blank());
        assert_eq!(token.right_justified(6), "      ");
    }

    #[test]
    fn test_trace_token_at_every_precision() {
        for precision in [Precision::Integer, Precision::OneDecimal, Precision::TwoDecimal] {
            assert_eq!(format(ObservationValue::Trace, precision).as_str(), "T");
        }
        assert_ne!(format(ObservationValue::Trace, Precision::TwoDecimal).as_str(), "0.00");
    }

    #[test]
    fn test_temperature_trace_renders_zero() {
        assert_eq!(format_temperature(ObservationValue::Trace, Precision::Integer).as_str(), "0");
        assert_eq!(
            format_temperature(ObservationValue::Trace, Precision::OneDecimal).as_str(),
            "0.0"
        );
        assert_eq!(format_temperature(ObservationValue::Missing, Precision::Integer).as_str(), "MM");
        assert_eq!(
            format_temperature(ObservationValue::Present(41.6), Precision::Integer).as_str(),
            "42"
        );
    }

    #[test]
    fn test_departure_rules() {
        let precision = Precision::Integer;
        let present = |v| ObservationValue::Present(v);

        assert_eq!(format_departure(present(78.0), present(52.0), precision).as_str(), "26");
        assert_eq!(format_departure(present(40.0), present(52.0), precision).as_str(), "-12");
        assert_eq!(
            format_departure(ObservationValue::Missing, present(52.0), precision).as_str(),
            "MM"
        );
        assert_eq!(
            format_departure(present(78.0), ObservationValue::Missing, precision).as_str(),
            "MM"
        );
        assert!(format_departure(ObservationValue::NotApplicable, present(52.0), precision).is_blank());
    }

    #[test]
    fn test_departure_counts_trace_as_zero() {
        let token = format_departure(
            ObservationValue::Trace,
            ObservationValue::Present(0.12),
            Precision::TwoDecimal,
        );
        assert_eq!(token.as_str(), "-0.12");
    }

    #[test]
    fn test_right_justified_alignment() {
        for (value, expected) in [(3.0, "    3"), (30.0, "   30"), (300.0, "  300")] {
            let token = format(ObservationValue::Present(value), Precision::Integer);
            assert_eq!(token.right_justified(5), expected);
        }
    }
}
