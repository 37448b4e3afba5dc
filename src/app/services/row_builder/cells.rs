//! Text of the non-numeric table cells

use crate::Result;
use crate::app::models::{ClockTime, DateValue, ObservationValue};
use crate::app::services::date_sentence::short_date;
use crate::app::services::sentinel_codec::DisplayToken;
use crate::constants::MISSING_TOKEN;

/// Time of occurrence in a daily table
///
/// Blank unless the observed value carries a quantity; the missing token when
/// the value is known but its time is not.
pub fn time_cell(actual: ObservationValue, time: Option<ClockTime>) -> DisplayToken {
    if !actual.is_comparable() {
        return DisplayToken::Blank;
    }
    match time {
        Some(time) => DisplayToken::Text(time.to_meridiem_string().trim_start().to_string()),
        None => DisplayToken::text(MISSING_TOKEN),
    }
}

/// First occurrence date in a period table, as `MM/DD`
pub fn first_date_cell(actual: ObservationValue, dates: &[DateValue]) -> Result<DisplayToken> {
    if !actual.is_comparable() {
        return Ok(DisplayToken::Blank);
    }
    date_cell(dates.first().copied().unwrap_or(DateValue::Missing))
}

/// A single date slot as `MM/DD`, or the missing token
pub fn date_cell(slot: DateValue) -> Result<DisplayToken> {
    match slot {
        DateValue::Known(date) => Ok(DisplayToken::Text(short_date(&date)?)),
        DateValue::Missing => Ok(DisplayToken::text(MISSING_TOKEN)),
    }
}

/// Date of last year's value
///
/// Blank when last year's value does not apply to the row.
pub fn last_date_cell(last_year: ObservationValue, dates: &[DateValue]) -> Result<DisplayToken> {
    if last_year.is_not_applicable() {
        return Ok(DisplayToken::Blank);
    }
    date_cell(dates.first().copied().unwrap_or(DateValue::Missing))
}

/// Most recent year of record
///
/// Blank when the row has no record; the missing token when a record exists
/// but no year is known.
pub fn year_cell(record: ObservationValue, first_year: Option<i32>) -> DisplayToken {
    if record.is_not_applicable() {
        return DisplayToken::Blank;
    }
    match first_year {
        Some(year) => DisplayToken::Text(year.to_string()),
        None => DisplayToken::text(MISSING_TOKEN),
    }
}

/// Known dates beyond the first, formatted for continuation lines
///
/// The list ends at the first missing slot; later slots are not shown.
pub fn extra_dates(dates: &[DateValue]) -> Result<Vec<String>> {
    dates
        .iter()
        .map_while(|slot| slot.known())
        .skip(1)
        .map(|date| short_date(&date))
        .collect()
}
