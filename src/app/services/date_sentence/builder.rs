//! Date phrases, date lists and date ranges

use crate::Result;
use crate::app::models::{ClimateDate, DateRange, DateValue};
use tracing::debug;

/// English ordinal suffix for a day number
pub fn ordinal_suffix(n: u32) -> &'static str {
    if (11..=13).contains(&(n % 100)) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// A number with its ordinal suffix, e.g. `21st`
pub fn ordinal(n: u32) -> String {
    format!("{}{}", n, ordinal_suffix(n))
}

/// Two-digit month and day, e.g. `03/01`
pub fn short_date(date: &ClimateDate) -> Result<String> {
    Ok(date.to_naive()?.format("%m/%d").to_string())
}

/// Full month name and day, e.g. `March 1`
pub fn month_day(date: &ClimateDate) -> Result<String> {
    Ok(date.to_naive()?.format("%B %-d").to_string())
}

/// Abbreviated month name and day, e.g. `Mar 1`
pub fn short_month_day(date: &ClimateDate) -> Result<String> {
    Ok(date.to_naive()?.format("%b %-d").to_string())
}

/// Full month name, day and year, e.g. `March 1 2024`
pub fn long_date(date: &ClimateDate) -> Result<String> {
    Ok(date.to_naive()?.format("%B %-d %Y").to_string())
}

/// Full month name and year, e.g. `March 2024`
pub fn month_year(date: &ClimateDate) -> Result<String> {
    Ok(date.to_naive()?.format("%B %Y").to_string())
}

/// Join phrases as an English list: `a`, `a and b`, `a, b and c`
pub fn join_list(parts: &[String]) -> String {
    match parts {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

/// Day of a later date, spelled relative to the month of an anchor date
fn relative_day(anchor: &ClimateDate, date: &ClimateDate, ordinal_style: bool) -> Result<String> {
    date.validate()?;
    if anchor.month == date.month && anchor.year == date.year {
        Ok(if ordinal_style {
            ordinal(date.day)
        } else {
            date.day.to_string()
        })
    } else {
        month_day(date)
    }
}

/// Render a list of occurrence dates
///
/// The first date is written out in full; later dates in the same month give
/// only the day (as an ordinal when `ordinal_style` is set) and dates in
/// other months repeat the month name. The first missing entry ends the
/// list.
///
/// # Arguments
///
/// * `dates` - Occurrence dates, in the order they should be read
/// * `ordinal_style` - Whether repeated days read as ordinals
///
/// # Returns
///
/// The phrase, or an empty string when the first entry is missing
pub fn render_single(dates: &[DateValue], ordinal_style: bool) -> Result<String> {
    let known: Vec<ClimateDate> = dates.iter().map_while(|slot| slot.known()).collect();
    if known.len() < dates.len() {
        debug!(
            "Date list truncated at missing entry {} of {}",
            known.len(),
            dates.len()
        );
    }

    let Some((first, rest)) = known.split_first() else {
        return Ok(String::new());
    };

    let mut parts = Vec::with_capacity(known.len());
    parts.push(month_day(first)?);
    for date in rest {
        parts.push(relative_day(first, date, ordinal_style)?);
    }

    Ok(join_list(&parts))
}

/// Render one date range as `on March 1` or `between March 1 and 3rd`
///
/// A missing end reads as a single day.
pub fn render_range_phrase(start: &ClimateDate, end: DateValue) -> Result<String> {
    match end {
        DateValue::Known(end) if end != *start => Ok(format!(
            "between {} and {}",
            month_day(start)?,
            relative_day(start, &end, true)?
        )),
        _ => Ok(format!("on {}", month_day(start)?)),
    }
}

/// Render a list of date ranges joined as an English list
///
/// The first range with a missing start ends the list.
pub fn render_range(ranges: &[DateRange]) -> Result<String> {
    let mut parts = Vec::with_capacity(ranges.len());
    for range in ranges {
        let DateValue::Known(start) = range.start else {
            break;
        };
        parts.push(render_range_phrase(&start, range.end)?);
    }
    Ok(join_list(&parts))
}
