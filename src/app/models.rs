//! Data models for bulletin rendering
//!
//! This module contains the core value types shared by every rendering
//! component: sentinel-tagged observation values, field capabilities,
//! calendar dates and clock times, and the catalogue of reportable elements.
//! The upstream statistics bundle lives in [`bundle`] and record
//! notifications in [`record`].

pub mod bundle;
pub mod record;

pub use bundle::{ElementRow, ProductBundle, RowSpan, StationBundle, ThresholdCount};
pub use record::{RecordEvent, RecordOutcome};

use crate::{Error, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Observation Values
// =============================================================================

/// A numeric quantity tagged with its sentinel state
///
/// Every comparison and formatting decision dispatches on the variant, so no
/// numeric value ever doubles as a sentinel.
///
/// In JSON a number is `Present`, `"MM"` (or `"M"`) is `Missing`, `"T"` is
/// `Trace`, and `null` or an absent field is `NotApplicable`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawObservation", into = "RawObservation")]
pub enum ObservationValue {
    /// A measured value
    Present(f64),

    /// Data is unavailable
    Missing,

    /// The sub-field does not apply to this row and stays blank
    #[default]
    NotApplicable,

    /// A measurable but too-small-to-measure amount, distinct from zero
    Trace,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawObservation {
    Number(f64),
    Token(String),
    Blank,
}

impl TryFrom<RawObservation> for ObservationValue {
    type Error = String;

    fn try_from(raw: RawObservation) -> std::result::Result<Self, Self::Error> {
        match raw {
            RawObservation::Number(value) => Ok(ObservationValue::Present(value)),
            RawObservation::Blank => Ok(ObservationValue::NotApplicable),
            RawObservation::Token(token) => match token.trim() {
                "MM" | "M" => Ok(ObservationValue::Missing),
                "T" => Ok(ObservationValue::Trace),
                "" => Ok(ObservationValue::NotApplicable),
                other => Err(format!(
                    "invalid observation token '{}': expected a number, \"MM\", \"T\" or null",
                    other
                )),
            },
        }
    }
}

impl From<ObservationValue> for RawObservation {
    fn from(value: ObservationValue) -> Self {
        match value {
            ObservationValue::Present(number) => RawObservation::Number(number),
            ObservationValue::Missing => RawObservation::Token("MM".to_string()),
            ObservationValue::Trace => RawObservation::Token("T".to_string()),
            ObservationValue::NotApplicable => RawObservation::Blank,
        }
    }
}

impl ObservationValue {
    /// The measured value, if present
    pub fn present(self) -> Option<f64> {
        match self {
            ObservationValue::Present(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_missing(self) -> bool {
        matches!(self, ObservationValue::Missing)
    }

    pub fn is_trace(self) -> bool {
        matches!(self, ObservationValue::Trace)
    }

    pub fn is_not_applicable(self) -> bool {
        matches!(self, ObservationValue::NotApplicable)
    }

    /// True when the value carries a quantity that can be compared
    pub fn is_comparable(self) -> bool {
        matches!(self, ObservationValue::Present(_) | ObservationValue::Trace)
    }

    /// Quantity for arithmetic, with a trace counted as zero
    pub fn amount(self) -> Option<f64> {
        match self {
            ObservationValue::Present(value) => Some(value),
            ObservationValue::Trace => Some(0.0),
            ObservationValue::Missing | ObservationValue::NotApplicable => None,
        }
    }
}

impl From<f64> for ObservationValue {
    fn from(value: f64) -> Self {
        ObservationValue::Present(value)
    }
}

// =============================================================================
// Field Capabilities
// =============================================================================

/// One optional sub-field of a reportable element
///
/// Variants are declared in display order, so the derived ordering is the
/// order in which columns appear in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// The observed value itself
    Measured,
    /// Time (daily) or date (period) of occurrence
    TimeOfMeasured,
    /// Historical record value
    Record,
    /// Year(s) the record was set
    RecordYear,
    /// Climatological normal
    Norm,
    /// Observed minus normal
    Departure,
    /// Value for the same period last year
    LastYear,
    /// Date of last year's value
    DateOfLast,
}

impl Capability {
    /// All capabilities in display order
    pub const ALL: [Capability; 8] = [
        Capability::Measured,
        Capability::TimeOfMeasured,
        Capability::Record,
        Capability::RecordYear,
        Capability::Norm,
        Capability::Departure,
        Capability::LastYear,
        Capability::DateOfLast,
    ];
}

/// Set of capabilities enabled across every field of one table
pub type CapabilitySet = BTreeSet<Capability>;

/// Immutable set of sub-field switches attached to one reportable element
///
/// Missing keys in configuration default to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDescriptor {
    pub measured: bool,
    pub time_of_measured: bool,
    pub norm: bool,
    pub departure: bool,
    pub record: bool,
    pub record_year: bool,
    pub last_year: bool,
    pub date_of_last: bool,
}

impl FieldDescriptor {
    /// Descriptor with every capability enabled
    pub fn all() -> Self {
        Self {
            measured: true,
            time_of_measured: true,
            norm: true,
            departure: true,
            record: true,
            record_year: true,
            last_year: true,
            date_of_last: true,
        }
    }

    /// Descriptor showing only the observed value
    pub fn measured_only() -> Self {
        Self {
            measured: true,
            ..Self::default()
        }
    }

    /// Whether the given capability is enabled
    pub fn enables(&self, capability: Capability) -> bool {
        match capability {
            Capability::Measured => self.measured,
            Capability::TimeOfMeasured => self.time_of_measured,
            Capability::Record => self.record,
            Capability::RecordYear => self.record_year,
            Capability::Norm => self.norm,
            Capability::Departure => self.departure,
            Capability::LastYear => self.last_year,
            Capability::DateOfLast => self.date_of_last,
        }
    }

    /// Enabled capabilities in display order
    pub fn capabilities(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::ALL
            .into_iter()
            .filter(move |capability| self.enables(*capability))
    }

    /// Copy of this descriptor with one capability switched
    pub fn with(mut self, capability: Capability, enabled: bool) -> Self {
        let slot = match capability {
            Capability::Measured => &mut self.measured,
            Capability::TimeOfMeasured => &mut self.time_of_measured,
            Capability::Record => &mut self.record,
            Capability::RecordYear => &mut self.record_year,
            Capability::Norm => &mut self.norm,
            Capability::Departure => &mut self.departure,
            Capability::LastYear => &mut self.last_year,
            Capability::DateOfLast => &mut self.date_of_last,
        };
        *slot = enabled;
        self
    }

    /// True when nothing at all would be rendered for the element
    pub fn is_silent(&self) -> bool {
        !self.measured
    }
}

// =============================================================================
// Dates and Times
// =============================================================================

/// A calendar date as delivered by the data layer
///
/// Fields are public because upstream data is not trusted; call
/// [`ClimateDate::validate`] (or any renderer, which does) before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClimateDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl ClimateDate {
    /// Create a new date with validation
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        let date = Self { year, month, day };
        date.validate()?;
        Ok(date)
    }

    /// Validate month and day ranges, including month lengths and leap years
    pub fn validate(&self) -> Result<()> {
        self.to_naive().map(|_| ())
    }

    /// Convert to a chrono date
    pub fn to_naive(&self) -> Result<NaiveDate> {
        if !(1..=12).contains(&self.month) {
            return Err(Error::invalid_date(
                self.year,
                self.month,
                self.day,
                "month must be between 1 and 12",
            ));
        }

        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or_else(|| {
            Error::invalid_date(
                self.year,
                self.month,
                self.day,
                "day is not valid for the month",
            )
        })
    }

    /// Month and day of this date
    pub fn month_day(&self) -> MonthDay {
        MonthDay {
            month: self.month,
            day: self.day,
        }
    }
}

impl From<NaiveDate> for ClimateDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

/// A date slot that may carry the missing-date sentinel
///
/// In JSON a date object is `Known` and `null` is `Missing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    Known(ClimateDate),
    Missing,
}

impl DateValue {
    pub fn known(self) -> Option<ClimateDate> {
        match self {
            DateValue::Known(date) => Some(date),
            DateValue::Missing => None,
        }
    }
}

impl From<ClimateDate> for DateValue {
    fn from(date: ClimateDate) -> Self {
        DateValue::Known(date)
    }
}

/// A begin/end pair of date slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateValue,
    pub end: DateValue,
}

impl DateRange {
    pub fn new(start: impl Into<DateValue>, end: impl Into<DateValue>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// A month and day without a year, used for season windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// Validate against a leap year so that February 29 is accepted
    pub fn validate(&self) -> Result<()> {
        ClimateDate {
            year: 2000,
            month: self.month,
            day: self.day,
        }
        .validate()
    }
}

impl From<(u32, u32)> for MonthDay {
    fn from((month, day): (u32, u32)) -> Self {
        Self { month, day }
    }
}

/// Local clock time of an occurrence
///
/// In JSON this is an `"HH:MM"` string on the 24-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// Create a new clock time with validation
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(Error::configuration(format!(
                "Invalid clock time {}:{:02}: hour must be 0-23 and minute 0-59",
                hour, minute
            )));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Twelve-hour rendering with a space-padded hour, e.g. `" 3:52 PM"`
    pub fn to_meridiem_string(&self) -> String {
        let meridiem = if self.hour < 12 { "AM" } else { "PM" };
        let hour = match self.hour % 12 {
            0 => 12,
            hour => hour,
        };
        format!("{:2}:{:02} {}", hour, self.minute, meridiem)
    }
}

impl FromStr for ClockTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (hour, minute) = s.trim().split_once(':').ok_or_else(|| {
            Error::configuration(format!("Invalid clock time '{}': expected HH:MM", s))
        })?;
        let parse = |part: &str| {
            part.parse::<u32>().map_err(|_| {
                Error::configuration(format!("Invalid clock time '{}': expected HH:MM", s))
            })
        };
        ClockTime::new(parse(hour)?, parse(minute)?)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

// =============================================================================
// Reportable Elements
// =============================================================================

/// Reportable climate elements
///
/// Rendering rules for each element (precision, record direction, label)
/// live in the row builder's field specification table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    MaximumTemperature,
    MinimumTemperature,
    AverageTemperature,
    MeanMaximumTemperature,
    MeanMinimumTemperature,
    MeanTemperature,
    #[serde(rename = "days_max_ge_90")]
    DaysMaxAtOrAbove90,
    #[serde(rename = "days_max_le_32")]
    DaysMaxAtOrBelow32,
    #[serde(rename = "days_min_le_32")]
    DaysMinAtOrBelow32,
    #[serde(rename = "days_min_le_0")]
    DaysMinAtOrBelow0,
    Precipitation,
    #[serde(rename = "days_precip_ge_01")]
    DaysPrecipAtOrAbove01,
    #[serde(rename = "days_precip_ge_10")]
    DaysPrecipAtOrAbove10,
    #[serde(rename = "days_precip_ge_50")]
    DaysPrecipAtOrAbove50,
    #[serde(rename = "days_precip_ge_100")]
    DaysPrecipAtOrAbove100,
    Snowfall,
    SnowDepth,
    #[serde(rename = "days_snow_ge_1")]
    DaysSnowAtOrAbove1,
    HeatingDegreeDays,
    CoolingDegreeDays,
}

impl Element {
    /// All elements in bulletin order
    pub const ALL: [Element; 20] = [
        Element::MaximumTemperature,
        Element::MinimumTemperature,
        Element::AverageTemperature,
        Element::MeanMaximumTemperature,
        Element::MeanMinimumTemperature,
        Element::MeanTemperature,
        Element::DaysMaxAtOrAbove90,
        Element::DaysMaxAtOrBelow32,
        Element::DaysMinAtOrBelow32,
        Element::DaysMinAtOrBelow0,
        Element::Precipitation,
        Element::DaysPrecipAtOrAbove01,
        Element::DaysPrecipAtOrAbove10,
        Element::DaysPrecipAtOrAbove50,
        Element::DaysPrecipAtOrAbove100,
        Element::Snowfall,
        Element::SnowDepth,
        Element::DaysSnowAtOrAbove1,
        Element::HeatingDegreeDays,
        Element::CoolingDegreeDays,
    ];

    /// Identifier used in configuration files and record events
    pub fn key(&self) -> &'static str {
        match self {
            Element::MaximumTemperature => "maximum_temperature",
            Element::MinimumTemperature => "minimum_temperature",
            Element::AverageTemperature => "average_temperature",
            Element::MeanMaximumTemperature => "mean_maximum_temperature",
            Element::MeanMinimumTemperature => "mean_minimum_temperature",
            Element::MeanTemperature => "mean_temperature",
            Element::DaysMaxAtOrAbove90 => "days_max_ge_90",
            Element::DaysMaxAtOrBelow32 => "days_max_le_32",
            Element::DaysMinAtOrBelow32 => "days_min_le_32",
            Element::DaysMinAtOrBelow0 => "days_min_le_0",
            Element::Precipitation => "precipitation",
            Element::DaysPrecipAtOrAbove01 => "days_precip_ge_01",
            Element::DaysPrecipAtOrAbove10 => "days_precip_ge_10",
            Element::DaysPrecipAtOrAbove50 => "days_precip_ge_50",
            Element::DaysPrecipAtOrAbove100 => "days_precip_ge_100",
            Element::Snowfall => "snowfall",
            Element::SnowDepth => "snow_depth",
            Element::DaysSnowAtOrAbove1 => "days_snow_ge_1",
            Element::HeatingDegreeDays => "heating_degree_days",
            Element::CoolingDegreeDays => "cooling_degree_days",
        }
    }

    pub fn is_temperature(&self) -> bool {
        matches!(
            self,
            Element::MaximumTemperature
                | Element::MinimumTemperature
                | Element::AverageTemperature
                | Element::MeanMaximumTemperature
                | Element::MeanMinimumTemperature
                | Element::MeanTemperature
        )
    }

    /// True for elements that count days meeting a threshold
    pub fn is_day_count(&self) -> bool {
        matches!(
            self,
            Element::DaysMaxAtOrAbove90
                | Element::DaysMaxAtOrBelow32
                | Element::DaysMinAtOrBelow32
                | Element::DaysMinAtOrBelow0
                | Element::DaysPrecipAtOrAbove01
                | Element::DaysPrecipAtOrAbove10
                | Element::DaysPrecipAtOrAbove50
                | Element::DaysPrecipAtOrAbove100
                | Element::DaysSnowAtOrAbove1
        )
    }
}

/// Comparison used by a user-configured day-count threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdKind {
    MaxAtOrAbove,
    MaxAtOrBelow,
    MinAtOrAbove,
    MinAtOrBelow,
}

impl ThresholdKind {
    /// True for thresholds on the daily maximum temperature
    pub fn is_maximum(&self) -> bool {
        matches!(self, ThresholdKind::MaxAtOrAbove | ThresholdKind::MaxAtOrBelow)
    }

    /// True for at-or-above comparisons
    pub fn is_above(&self) -> bool {
        matches!(self, ThresholdKind::MaxAtOrAbove | ThresholdKind::MinAtOrAbove)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Element {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Element::ALL
            .into_iter()
            .find(|element| element.key() == s.trim())
            .ok_or_else(|| Error::configuration(format!("Unknown element '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observation_value_from_json() {
        let values: Vec<ObservationValue> =
            serde_json::from_str(r#"[12.5, "MM", "M", "T", null, ""]"#).unwrap();

        assert_eq!(values[0], ObservationValue::Present(12.5));
        assert_eq!(values[1], ObservationValue::Missing);
        assert_eq!(values[2], ObservationValue::Missing);
        assert_eq!(values[3], ObservationValue::Trace);
        assert_eq!(values[4], ObservationValue::NotApplicable);
        assert_eq!(values[5], ObservationValue::NotApplicable);
    }

    #[test]
    fn test_observation_value_rejects_unknown_token() {
        let result: std::result::Result<ObservationValue, _> = serde_json::from_str(r#""X""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_observation_value_serializes_tokens() {
        let json = serde_json::to_string(&vec![
            ObservationValue::Present(3.0),
            ObservationValue::Missing,
            ObservationValue::Trace,
            ObservationValue::NotApplicable,
        ])
        .unwrap();
        assert_eq!(json, r#"[3.0,"MM","T",null]"#);
    }

    #[test]
    fn test_observation_value_amount_counts_trace_as_zero() {
        assert_eq!(ObservationValue::Trace.amount(), Some(0.0));
        assert_eq!(ObservationValue::Present(1.5).amount(), Some(1.5));
        assert_eq!(ObservationValue::Missing.amount(), None);
        assert_eq!(ObservationValue::NotApplicable.amount(), None);
        assert!(ObservationValue::Trace.is_comparable());
        assert!(!ObservationValue::Missing.is_comparable());
    }

    #[test]
    fn test_field_descriptor_capabilities_in_display_order() {
        let descriptor = FieldDescriptor::measured_only()
            .with(Capability::DateOfLast, true)
            .with(Capability::Record, true)
            .with(Capability::Norm, true);

        let enabled: Vec<Capability> = descriptor.capabilities().collect();
        assert_eq!(
            enabled,
            vec![
                Capability::Measured,
                Capability::Record,
                Capability::Norm,
                Capability::DateOfLast
            ]
        );
    }

    #[test]
    fn test_field_descriptor_missing_keys_default_to_false() {
        let descriptor: FieldDescriptor =
            serde_json::from_str(r#"{"measured": true, "norm": true}"#).unwrap();
        assert!(descriptor.measured);
        assert!(descriptor.norm);
        assert!(!descriptor.record);
        assert!(!descriptor.departure);
    }

    #[test]
    fn test_climate_date_validation() {
        assert!(ClimateDate::new(2024, 2, 29).is_ok());
        assert!(ClimateDate::new(2023, 2, 29).is_err());
        assert!(ClimateDate::new(2024, 13, 1).is_err());
        assert!(ClimateDate::new(2024, 0, 1).is_err());
        assert!(ClimateDate::new(2024, 4, 31).is_err());
    }

    #[test]
    fn test_date_value_null_is_missing() {
        let values: Vec<DateValue> =
            serde_json::from_str(r#"[{"year": 2024, "month": 3, "day": 1}, null]"#).unwrap();
        assert_eq!(
            values[0],
            DateValue::Known(ClimateDate {
                year: 2024,
                month: 3,
                day: 1
            })
        );
        assert_eq!(values[1], DateValue::Missing);
    }

    #[test]
    fn test_month_day_accepts_leap_day() {
        assert!(MonthDay::new(2, 29).validate().is_ok());
        assert!(MonthDay::new(2, 30).validate().is_err());
    }

    #[test]
    fn test_clock_time_meridiem_rendering() {
        assert_eq!(ClockTime::new(15, 52).unwrap().to_meridiem_string(), " 3:52 PM");
        assert_eq!(ClockTime::new(0, 5).unwrap().to_meridiem_string(), "12:05 AM");
        assert_eq!(ClockTime::new(12, 0).unwrap().to_meridiem_string(), "12:00 PM");
        assert_eq!(ClockTime::new(9, 7).unwrap().to_meridiem_string(), " 9:07 AM");
    }

    #[test]
    fn test_clock_time_parsing() {
        let time: ClockTime = "06:45".parse().unwrap();
        assert_eq!((time.hour(), time.minute()), (6, 45));
        assert!("24:00".parse::<ClockTime>().is_err());
        assert!("noon".parse::<ClockTime>().is_err());

        let json: ClockTime = serde_json::from_str(r#""18:30""#).unwrap();
        assert_eq!(json.to_string(), "18:30");
    }

    #[test]
    fn test_element_keys_round_trip_through_serde() {
        for element in Element::ALL {
            let json = serde_json::to_string(&element).unwrap();
            assert_eq!(json, format!("\"{}\"", element.key()));
            assert_eq!(element.key().parse::<Element>().unwrap(), element);
        }
    }
}
