//! Data models for the upstream statistics bundle
//!
//! The data layer delivers one bundle per product run. It contains every
//! configured station's pre-computed statistics; nothing in this crate
//! computes climate statistics itself.

use super::{
    ClimateDate, ClockTime, DateRange, DateValue, Element, ObservationValue, ThresholdKind,
};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

// =============================================================================
// Row Spans
// =============================================================================

/// Accumulation window a row of statistics covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowSpan {
    /// The report day (yesterday for morning reports, today otherwise)
    Day,
    /// From the first of the month through the report day
    MonthToDate,
    /// From the element's season start through the report day
    SeasonToDate,
    /// From January 1 through the report day
    YearToDate,
    /// The whole month, season or year of a period report
    Period,
}

// =============================================================================
// Element Rows
// =============================================================================

/// Statistics for one element over one span
///
/// Multi-valued fields (`dates`, `record_years`, `last_year_dates`) list the
/// most recent entry first. A `null` entry is the missing sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRow {
    /// Reportable element
    pub element: Element,

    /// Accumulation window
    pub span: RowSpan,

    /// Observed value
    #[serde(default)]
    pub actual: ObservationValue,

    /// Local time of occurrence (daily reports)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<ClockTime>,

    /// Date(s) of occurrence (period reports)
    #[serde(default)]
    pub dates: Vec<DateValue>,

    /// Climatological normal
    #[serde(default)]
    pub normal: ObservationValue,

    /// Historical record value
    #[serde(default)]
    pub record: ObservationValue,

    /// Every year the record was set or tied, most recent first
    #[serde(default)]
    pub record_years: Vec<Option<i32>>,

    /// Value for the same span last year
    #[serde(default)]
    pub last_year: ObservationValue,

    /// Date(s) of last year's value
    #[serde(default)]
    pub last_year_dates: Vec<DateValue>,
}

impl ElementRow {
    /// Create a row with every value not applicable
    pub fn new(element: Element, span: RowSpan) -> Self {
        Self {
            element,
            span,
            actual: ObservationValue::NotApplicable,
            time: None,
            dates: Vec::new(),
            normal: ObservationValue::NotApplicable,
            record: ObservationValue::NotApplicable,
            record_years: Vec::new(),
            last_year: ObservationValue::NotApplicable,
            last_year_dates: Vec::new(),
        }
    }

    pub fn with_actual(mut self, actual: impl Into<ObservationValue>) -> Self {
        self.actual = actual.into();
        self
    }

    pub fn with_time(mut self, time: ClockTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_dates(mut self, dates: Vec<DateValue>) -> Self {
        self.dates = dates;
        self
    }

    pub fn with_normal(mut self, normal: impl Into<ObservationValue>) -> Self {
        self.normal = normal.into();
        self
    }

    pub fn with_record(mut self, record: impl Into<ObservationValue>, years: Vec<i32>) -> Self {
        self.record = record.into();
        self.record_years = years.into_iter().map(Some).collect();
        self
    }

    pub fn with_last_year(mut self, last_year: impl Into<ObservationValue>) -> Self {
        self.last_year = last_year.into();
        self
    }

    pub fn with_last_year_dates(mut self, dates: Vec<DateValue>) -> Self {
        self.last_year_dates = dates;
        self
    }

    /// Record years with missing and zero entries removed
    pub fn valid_record_years(&self) -> impl Iterator<Item = i32> + '_ {
        self.record_years
            .iter()
            .filter_map(|year| *year)
            .filter(|year| *year != 0)
    }
}

/// Number of days a temperature met a user-configured threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdCount {
    pub kind: ThresholdKind,

    /// Threshold in degrees Fahrenheit
    pub degrees: i32,

    /// Days meeting the threshold over the report period
    #[serde(default)]
    pub days: ObservationValue,
}

// =============================================================================
// Station and Product Bundles
// =============================================================================

/// All statistics for one station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationBundle {
    /// Station identifier (e.g., "KBOS")
    pub station_id: String,

    /// Human-readable station name
    pub name: String,

    /// Rows in the order the data layer produced them
    #[serde(default)]
    pub rows: Vec<ElementRow>,

    /// Day counts for user-configured thresholds
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub threshold_counts: Vec<ThresholdCount>,
}

impl StationBundle {
    pub fn new(station_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            station_id: station_id.into(),
            name: name.into(),
            rows: Vec::new(),
            threshold_counts: Vec::new(),
        }
    }

    pub fn with_row(mut self, row: ElementRow) -> Self {
        self.rows.push(row);
        self
    }

    pub fn with_threshold_count(mut self, count: ThresholdCount) -> Self {
        self.threshold_counts.push(count);
        self
    }

    /// Day count for a user threshold, if the data layer supplied one
    pub fn threshold_count(&self, kind: ThresholdKind, degrees: i32) -> Option<&ThresholdCount> {
        self.threshold_counts
            .iter()
            .find(|count| count.kind == kind && count.degrees == degrees)
    }

    /// Find the row for an element and span
    pub fn row(&self, element: Element, span: RowSpan) -> Option<&ElementRow> {
        self.rows
            .iter()
            .find(|row| row.element == element && row.span == span)
    }

    /// All rows for one element, in bundle order
    pub fn rows_for(&self, element: Element) -> impl Iterator<Item = &ElementRow> + '_ {
        self.rows.iter().filter(move |row| row.element == element)
    }
}

/// Everything the data layer hands over for one product run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductBundle {
    /// Date the report describes
    pub report_date: ClimateDate,

    /// Begin and end of the reporting period (period reports)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<DateRange>,

    /// Time the data is valid as of (intermediate reports)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_time: Option<DateTime<Utc>>,

    /// Per-station statistics
    #[serde(default)]
    pub stations: Vec<StationBundle>,
}

impl ProductBundle {
    pub fn new(report_date: ClimateDate) -> Self {
        Self {
            report_date,
            period: None,
            valid_time: None,
            stations: Vec::new(),
        }
    }

    pub fn with_station(mut self, station: StationBundle) -> Self {
        self.stations.push(station);
        self
    }

    pub fn with_period(mut self, period: DateRange) -> Self {
        self.period = Some(period);
        self
    }

    /// Parse a bundle from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let bundle: ProductBundle = serde_json::from_str(json)
            .map_err(|e| Error::bundle_parse("Failed to parse statistics bundle", e))?;
        bundle.validate()?;
        Ok(bundle)
    }

    /// Read and parse a bundle file
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read statistics bundle '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json_str(&json)
    }

    /// Validate the dates every product needs
    pub fn validate(&self) -> Result<()> {
        self.report_date.validate()?;
        if let Some(period) = &self.period {
            for slot in [period.start, period.end] {
                if let DateValue::Known(date) = slot {
                    date.validate()?;
                }
            }
        }
        Ok(())
    }

    /// Find a station by identifier
    pub fn station(&self, station_id: &str) -> Option<&StationBundle> {
        self.stations
            .iter()
            .find(|station| station.station_id == station_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "report_date": {"year": 2024, "month": 3, "day": 20},
        "stations": [{
            "station_id": "KBOS",
            "name": "Boston",
            "rows": [{
                "element": "maximum_temperature",
                "span": "day",
                "actual": 78,
                "time": "15:52",
                "normal": 52,
                "record": 76,
                "record_years": [1998, null, 1945],
                "last_year": "MM"
            }]
        }]
    }"#;

    #[test]
    fn test_parse_bundle() {
        let bundle = ProductBundle::from_json_str(SAMPLE).unwrap();
        let station = bundle.station("KBOS").unwrap();
        let row = station
            .row(Element::MaximumTemperature, RowSpan::Day)
            .unwrap();

        assert_eq!(row.actual, ObservationValue::Present(78.0));
        assert_eq!(row.time.unwrap().to_string(), "15:52");
        assert_eq!(row.last_year, ObservationValue::Missing);
        assert_eq!(row.record, ObservationValue::Present(76.0));

        // Absent fields are not applicable
        assert_eq!(row.last_year_dates.len(), 0);
        assert!(row.dates.is_empty());
        assert_eq!(row.valid_record_years().collect::<Vec<_>>(), vec![1998, 1945]);
    }

    #[test]
    fn test_missing_station_lookup() {
        let bundle = ProductBundle::from_json_str(SAMPLE).unwrap();
        assert!(bundle.station("KORD").is_none());
    }

    #[test]
    fn test_invalid_report_date_rejected() {
        let json = r#"{"report_date": {"year": 2024, "month": 13, "day": 1}}"#;
        let result = ProductBundle::from_json_str(json);
        assert!(matches!(result, Err(Error::InvalidDate { month: 13, .. })));
    }

    #[test]
    fn test_malformed_json_is_bundle_parse_error() {
        let result = ProductBundle::from_json_str("{not json");
        assert!(matches!(result, Err(Error::BundleParse { .. })));
    }

    #[test]
    fn test_zero_record_years_are_skipped() {
        let mut row = ElementRow::new(Element::Precipitation, RowSpan::Day);
        row.record_years = vec![Some(0), Some(2001), None];
        assert_eq!(row.valid_record_years().collect::<Vec<_>>(), vec![2001]);
    }
}
