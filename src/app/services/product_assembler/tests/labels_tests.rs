//! Tests for row labels, spoken spans and season windows

use super::*;
use crate::app::models::MonthDay;
use crate::app::services::product_assembler::labels::{in_season, report_phrase};
use crate::app::services::product_assembler::{report_window, row_label, span_phrase};
use crate::app::services::row_builder::field_spec;
use crate::config::{ReportKind, SeasonConfig};

fn date(month: u32, day: u32) -> ClimateDate {
    ClimateDate {
        year: 2024,
        month,
        day,
    }
}

#[test]
fn test_window_within_one_year() {
    let start = MonthDay::new(3, 1);
    let end = MonthDay::new(5, 31);

    assert!(report_window(start, end, &date(3, 1)));
    assert!(report_window(start, end, &date(4, 15)));
    assert!(report_window(start, end, &date(5, 31)));
    assert!(!report_window(start, end, &date(2, 29)));
    assert!(!report_window(start, end, &date(6, 1)));
}

#[test]
fn test_window_wrapping_the_year_end() {
    let start = MonthDay::new(11, 1);
    let end = MonthDay::new(2, 28);

    assert!(report_window(start, end, &date(11, 1)));
    assert!(report_window(start, end, &date(12, 25)));
    assert!(report_window(start, end, &date(1, 15)));
    assert!(report_window(start, end, &date(2, 28)));
    assert!(!report_window(start, end, &date(3, 20)));
    assert!(!report_window(start, end, &date(10, 31)));
}

#[test]
fn test_default_snow_season_covers_every_date() {
    let seasons = SeasonConfig::default();
    for (month, day) in [(1, 1), (3, 20), (6, 30), (7, 1), (12, 31)] {
        assert!(report_window(seasons.snow_start, seasons.snow_end, &date(month, day)));
    }
}

#[test]
fn test_snow_season_gates_only_season_rows() {
    let seasons = SeasonConfig {
        snow_start: MonthDay::new(11, 1),
        snow_end: MonthDay::new(2, 28),
        ..SeasonConfig::default()
    };
    let season_row = ElementRow::new(Element::Snowfall, RowSpan::SeasonToDate);
    let day_row = ElementRow::new(Element::Snowfall, RowSpan::Day);
    let precip_row = ElementRow::new(Element::Precipitation, RowSpan::SeasonToDate);
    let spec = field_spec(Element::Snowfall);

    assert!(!in_season(&season_row, &spec, &seasons, &date(3, 20)));
    assert!(in_season(&season_row, &spec, &seasons, &date(1, 20)));
    assert!(in_season(&day_row, &spec, &seasons, &date(3, 20)));
    assert!(in_season(
        &precip_row,
        &field_spec(Element::Precipitation),
        &seasons,
        &date(3, 20)
    ));
}

#[test]
fn test_row_labels() {
    let seasons = SeasonConfig::default();
    let label = |element: Element, span: RowSpan, report: ReportKind| {
        row_label(&ElementRow::new(element, span), &field_spec(element), report, &seasons)
    };

    assert_eq!(label(Element::MaximumTemperature, RowSpan::Day, ReportKind::Morning), "Maximum");
    assert_eq!(label(Element::Precipitation, RowSpan::Day, ReportKind::Morning), "Yesterday");
    assert_eq!(label(Element::Precipitation, RowSpan::Day, ReportKind::Evening), "Today");
    assert_eq!(
        label(Element::Precipitation, RowSpan::MonthToDate, ReportKind::Morning),
        "Month to Date"
    );
    assert_eq!(
        label(Element::HeatingDegreeDays, RowSpan::SeasonToDate, ReportKind::Morning),
        "Since Jul 1"
    );
    assert_eq!(
        label(Element::CoolingDegreeDays, RowSpan::SeasonToDate, ReportKind::Morning),
        "Since Jan 1"
    );
    assert_eq!(
        label(Element::Snowfall, RowSpan::YearToDate, ReportKind::Morning),
        "Since Jan 1"
    );
    assert_eq!(label(Element::SnowDepth, RowSpan::Day, ReportKind::Morning), "Snow Depth");
    assert_eq!(label(Element::Precipitation, RowSpan::Period, ReportKind::Monthly), "Total");
    assert_eq!(
        label(Element::DaysPrecipAtOrAbove01, RowSpan::Period, ReportKind::Monthly),
        "Days >= .01"
    );
}

#[test]
fn test_span_phrases() {
    let seasons = SeasonConfig::default();
    let phrase = |element: Element, span: RowSpan, report: ReportKind| {
        span_phrase(&ElementRow::new(element, span), report, &seasons)
    };

    assert_eq!(phrase(Element::MaximumTemperature, RowSpan::Day, ReportKind::Morning), "yesterday");
    assert_eq!(phrase(Element::MaximumTemperature, RowSpan::Day, ReportKind::Intermediate), "today");
    assert_eq!(
        phrase(Element::Precipitation, RowSpan::MonthToDate, ReportKind::Morning),
        "so far this month"
    );
    assert_eq!(
        phrase(Element::Snowfall, RowSpan::SeasonToDate, ReportKind::Morning),
        "since July 1"
    );
    assert_eq!(
        phrase(Element::Precipitation, RowSpan::YearToDate, ReportKind::Morning),
        "since January 1"
    );
    assert_eq!(phrase(Element::Precipitation, RowSpan::Period, ReportKind::Seasonal), "this season");
    assert_eq!(report_phrase(ReportKind::Annual), "this year");
}
