//! Row labels, spoken time spans and season windows

use crate::Result;
use crate::app::models::{
    ClimateDate, ClockTime, Element, ElementRow, MonthDay, ProductBundle, RowSpan,
};
use crate::app::services::row_builder::{DataKind, FieldSpec};
use crate::config::{ReportKind, ReportTimeZone, SeasonConfig};
use crate::constants::SHORT_MONTH_NAMES;
use chrono::Timelike;

/// Whether a date falls inside a month/day window
///
/// Both ends are inclusive. A window whose start is later in the year than
/// its end wraps across the new year, so July 1 to June 30 covers every
/// date.
pub fn report_window(start: MonthDay, end: MonthDay, date: &ClimateDate) -> bool {
    let day = date.month_day();
    if start <= end {
        start <= day && day <= end
    } else {
        day >= start || day <= end
    }
}

/// First day of the season a season-to-date row accumulates from
pub fn season_start(element: Element, seasons: &SeasonConfig) -> MonthDay {
    match element {
        Element::HeatingDegreeDays => seasons.heating_start,
        Element::CoolingDegreeDays => seasons.cooling_start,
        Element::Snowfall | Element::SnowDepth | Element::DaysSnowAtOrAbove1 => seasons.snow_start,
        _ => seasons.precipitation_start,
    }
}

/// Whether a season-to-date row belongs in a report for `date`
///
/// Snow rows are only reported during the snow season.
pub fn in_season(row: &ElementRow, spec: &FieldSpec, seasons: &SeasonConfig, date: &ClimateDate) -> bool {
    if row.span != RowSpan::SeasonToDate || spec.kind != DataKind::Snow {
        return true;
    }
    report_window(seasons.snow_start, seasons.snow_end, date)
}

fn short_month_day(day: MonthDay) -> String {
    let month = SHORT_MONTH_NAMES
        .get(day.month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("???");
    format!("{} {}", month, day.day)
}

/// Label printed in the table's label column, without indentation
///
/// Temperatures, snow depth and threshold counts are labelled by element;
/// accumulating amounts are labelled by the span they cover.
pub fn row_label(row: &ElementRow, spec: &FieldSpec, report: ReportKind, seasons: &SeasonConfig) -> String {
    let by_element = match spec.kind {
        DataKind::Temperature => true,
        DataKind::Count => !matches!(
            spec.element,
            Element::HeatingDegreeDays | Element::CoolingDegreeDays
        ),
        DataKind::Precipitation | DataKind::Snow => spec.element == Element::SnowDepth,
    };
    if by_element {
        return spec.label.to_string();
    }

    match row.span {
        RowSpan::Day if report == ReportKind::Morning => "Yesterday".to_string(),
        RowSpan::Day => "Today".to_string(),
        RowSpan::MonthToDate => "Month to Date".to_string(),
        RowSpan::SeasonToDate => format!("Since {}", short_month_day(season_start(spec.element, seasons))),
        RowSpan::YearToDate => "Since Jan 1".to_string(),
        RowSpan::Period => "Total".to_string(),
    }
}

/// Spoken phrase for the time a row covers, e.g. `yesterday`
pub fn span_phrase(row: &ElementRow, report: ReportKind, seasons: &SeasonConfig) -> String {
    match row.span {
        RowSpan::Day if report == ReportKind::Morning => "yesterday".to_string(),
        RowSpan::Day => "today".to_string(),
        RowSpan::MonthToDate => "so far this month".to_string(),
        RowSpan::SeasonToDate => {
            let start = season_start(row.element, seasons);
            match chrono::Month::try_from(start.month as u8) {
                Ok(month) => format!("since {} {}", month.name(), start.day),
                Err(_) => "so far this season".to_string(),
            }
        }
        RowSpan::YearToDate => "since January 1".to_string(),
        RowSpan::Period => report_phrase(report).to_string(),
    }
}

/// Spoken phrase for the whole time a report covers
pub fn report_phrase(report: ReportKind) -> &'static str {
    match report {
        ReportKind::Morning => "yesterday",
        ReportKind::Evening | ReportKind::Intermediate => "today",
        ReportKind::Monthly => "this month",
        ReportKind::Seasonal => "this season",
        ReportKind::Annual => "this year",
    }
}

/// The bundle's valid time on the local clock of the report timezone
pub fn valid_clock(bundle: &ProductBundle, zone: &ReportTimeZone) -> Result<Option<ClockTime>> {
    let Some(valid) = bundle.valid_time else {
        return Ok(None);
    };
    let local = valid.with_timezone(&zone.offset);
    ClockTime::new(local.hour(), local.minute()).map(Some)
}
