//! Table header and separator lines

use super::layout::{ColumnName, ColumnSet, TableFamily};
use crate::Result;
use crate::app::services::line_buffer::Span;
use crate::constants::{HEADER_LINE_COUNT, LABEL_HEADER, SEPARATOR_CHAR};

/// Header words for a column, one per header line
fn header_words(family: TableFamily, name: ColumnName) -> [&'static str; HEADER_LINE_COUNT] {
    match (family, name) {
        (TableFamily::Daily, ColumnName::Value) => ["Observed", "Value", ""],
        (TableFamily::Period, ColumnName::Value) => ["Value", "", ""],
        (_, ColumnName::RecordMarker) => ["", "", ""],
        (TableFamily::Daily, ColumnName::TimeOf) => ["Time", "(LST)", ""],
        (TableFamily::Period, ColumnName::TimeOf) => ["Date", "", ""],
        (_, ColumnName::Record) => ["Record", "Value", ""],
        (_, ColumnName::RecordYear) => ["Year", "", ""],
        (TableFamily::Daily, ColumnName::Normal) => ["Normal", "Value", ""],
        (TableFamily::Period, ColumnName::Normal) => ["Normal", "", ""],
        (_, ColumnName::Departure) => ["Departure", "From", "Normal"],
        (_, ColumnName::LastYear) => ["Last", "Year", ""],
        (_, ColumnName::DateOfLast) => ["Last", "Date", ""],
    }
}

/// Render the three header lines of a table
///
/// Every header word is right-justified within its column so that it lines
/// up with the values painted beneath it.
pub fn header_lines(columns: &ColumnSet) -> Result<Vec<String>> {
    let mut lines = Vec::with_capacity(HEADER_LINE_COUNT);

    for row in 0..HEADER_LINE_COUNT {
        let mut line = columns.new_line();
        if row == 0 {
            line.paint(columns.label_span(), LABEL_HEADER)?;
        }
        for column in columns.columns() {
            let word = header_words(columns.family(), column.name)[row];
            if !word.is_empty() {
                line.paint_right(column.span(), word)?;
            }
        }
        lines.push(line.into_string());
    }

    Ok(lines)
}

/// Render the separator line under the headers
///
/// The run of separator characters is exactly as long as the last column
/// stop; the rest of the line stays blank.
pub fn separator_line(columns: &ColumnSet) -> Result<String> {
    let mut line = columns.new_line();
    line.fill(Span::new(0, columns.last_stop()), SEPARATOR_CHAR)?;
    Ok(line.into_string())
}
