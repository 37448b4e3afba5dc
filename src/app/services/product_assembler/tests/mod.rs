//! Tests for the product assembler module

pub mod labels_tests;

use crate::app::models::{
    ClimateDate, ClockTime, DateValue, Element, ElementRow, ObservationValue, ProductBundle,
    RowSpan, StationBundle,
};
use crate::config::{FormatterConfig, ProductConfig};
use crate::constants::FOOTNOTE_LINES;

/// Report date used by every fixture
pub fn report_date() -> ClimateDate {
    ClimateDate {
        year: 2024,
        month: 3,
        day: 20,
    }
}

/// Known date slot
pub fn on(year: i32, month: u32, day: u32) -> DateValue {
    DateValue::Known(ClimateDate { year, month, day })
}

/// A station with a full set of daily rows and one broken record
pub fn boston() -> StationBundle {
    StationBundle::new("KBOS", "Boston")
        .with_row(
            ElementRow::new(Element::MaximumTemperature, RowSpan::Day)
                .with_actual(78.0)
                .with_time(ClockTime::new(15, 52).unwrap())
                .with_record(76.0, vec![1998])
                .with_normal(52.0)
                .with_last_year(60.0)
                .with_last_year_dates(vec![on(2023, 3, 20)]),
        )
        .with_row(
            ElementRow::new(Element::MinimumTemperature, RowSpan::Day)
                .with_actual(31.0)
                .with_time(ClockTime::new(6, 10).unwrap())
                .with_record(10.0, vec![1916])
                .with_normal(34.0)
                .with_last_year(40.0)
                .with_last_year_dates(vec![on(2023, 3, 20)]),
        )
        .with_row(
            ElementRow::new(Element::Precipitation, RowSpan::Day)
                .with_actual(ObservationValue::Trace)
                .with_record(1.5, vec![1936])
                .with_normal(0.12)
                .with_last_year(0.0),
        )
        .with_row(
            ElementRow::new(Element::Precipitation, RowSpan::MonthToDate)
                .with_actual(2.1)
                .with_normal(2.6)
                .with_last_year(3.4),
        )
        .with_row(
            ElementRow::new(Element::Snowfall, RowSpan::Day)
                .with_actual(0.0)
                .with_record(6.0, vec![1956])
                .with_normal(0.2)
                .with_last_year(0.0),
        )
        .with_row(
            ElementRow::new(Element::Snowfall, RowSpan::SeasonToDate)
                .with_actual(30.5)
                .with_normal(40.0)
                .with_last_year(12.0),
        )
        .with_row(
            ElementRow::new(Element::HeatingDegreeDays, RowSpan::Day)
                .with_actual(20.0)
                .with_normal(18.0)
                .with_last_year(25.0),
        )
        .with_row(
            ElementRow::new(Element::HeatingDegreeDays, RowSpan::MonthToDate)
                .with_actual(400.0)
                .with_normal(420.0)
                .with_last_year(450.0),
        )
        .with_row(
            ElementRow::new(Element::CoolingDegreeDays, RowSpan::Day)
                .with_actual(0.0)
                .with_normal(0.0)
                .with_last_year(0.0),
        )
}

/// A station with only temperatures
pub fn worcester() -> StationBundle {
    StationBundle::new("KORH", "Worcester")
        .with_row(ElementRow::new(Element::MaximumTemperature, RowSpan::Day).with_actual(70.0))
        .with_row(ElementRow::new(Element::MinimumTemperature, RowSpan::Day).with_actual(28.0))
}

/// Daily bundle with both stations in bundle order
pub fn daily_bundle() -> ProductBundle {
    ProductBundle::new(report_date())
        .with_station(boston())
        .with_station(worcester())
}

/// Configuration with the given product settings and default globals
pub fn config_with(product: ProductConfig) -> FormatterConfig {
    FormatterConfig::default().with_product(product)
}

/// True for lines that are not part of a table: titles, blanks, footnotes
pub fn is_free_text(line: &str) -> bool {
    line.is_empty() || line.starts_with("...") || FOOTNOTE_LINES.contains(&line)
}

/// The first line starting with `prefix`
pub fn line_starting<'a>(text: &'a str, prefix: &str) -> &'a str {
    text.lines()
        .find(|line| line.starts_with(prefix))
        .unwrap_or_else(|| panic!("no line starting with {:?} in:\n{}", prefix, text))
}
