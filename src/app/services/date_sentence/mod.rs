//! English date phrases for narrative and tabular products
//!
//! Renders single dates, lists of occurrence dates and date ranges the way a
//! forecaster would read them aloud, plus the short numeric and abbreviated
//! forms used in table cells and row labels.
//!
//! # Architecture
//!
//! - [`builder`] - Date formatting, ordinals, list joining and range phrases
//!
//! # List Rules
//!
//! The first date in a list always carries its month name. Later dates in the
//! same month give only the day, and dates in another month repeat the month.
//! A missing entry ends the list, so `[Mar 1, missing, Mar 20]` reads
//! `March 1`.
//!
//! # Example Usage
//!
//! ```rust
//! use climate_formatter::app::models::{ClimateDate, DateValue};
//! use climate_formatter::app::services::date_sentence;
//!
//! # fn example() -> climate_formatter::Result<()> {
//! let dates = vec![
//!     DateValue::Known(ClimateDate::new(2024, 3, 1)?),
//!     DateValue::Known(ClimateDate::new(2024, 3, 15)?),
//! ];
//! assert_eq!(date_sentence::render_single(&dates, false)?, "March 1 and 15");
//! assert_eq!(date_sentence::ordinal(22), "22nd");
//! # Ok(())
//! # }
//! ```

pub mod builder;

#[cfg(test)]
pub mod tests;

pub use builder::{
    join_list, long_date, month_day, month_year, ordinal, ordinal_suffix, render_range,
    render_range_phrase, render_single, short_date, short_month_day,
};
