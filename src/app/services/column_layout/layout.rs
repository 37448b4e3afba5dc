//! Column set computation
//!
//! Walks the capabilities in display order and reserves a fixed-width column
//! for each one enabled by any field in the table. Disabled capabilities
//! collapse without leaving a gap.

use crate::app::models::{Capability, CapabilitySet, FieldDescriptor};
use crate::app::services::line_buffer::{LineBuffer, Span};
use crate::constants::{DAILY_LINE_WIDTH, PERIOD_LINE_WIDTH, daily_columns, period_columns};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Table families with their own widths and placement rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableFamily {
    /// Daily tables (morning, evening and intermediate reports)
    Daily,
    /// Monthly, seasonal and annual tables
    Period,
}

impl TableFamily {
    /// Declared width of every line in the table
    pub fn line_width(self) -> usize {
        match self {
            TableFamily::Daily => DAILY_LINE_WIDTH,
            TableFamily::Period => PERIOD_LINE_WIDTH,
        }
    }

    /// Width of the leading label column
    pub fn label_width(self) -> usize {
        match self {
            TableFamily::Daily => daily_columns::LABEL,
            TableFamily::Period => period_columns::LABEL,
        }
    }

    /// Base width reserved for a column in this family
    pub fn column_width(self, name: ColumnName) -> usize {
        match self {
            TableFamily::Daily => match name {
                ColumnName::Value => daily_columns::VALUE,
                ColumnName::RecordMarker => daily_columns::MARKER,
                ColumnName::TimeOf => daily_columns::TIME_OF,
                ColumnName::Record => daily_columns::RECORD,
                ColumnName::RecordYear => daily_columns::RECORD_YEAR,
                ColumnName::Normal => daily_columns::NORMAL,
                ColumnName::Departure => daily_columns::DEPARTURE,
                ColumnName::LastYear => daily_columns::LAST_YEAR,
                ColumnName::DateOfLast => daily_columns::DATE_OF_LAST,
            },
            TableFamily::Period => match name {
                ColumnName::Value => period_columns::VALUE,
                ColumnName::RecordMarker => period_columns::MARKER,
                ColumnName::TimeOf => period_columns::TIME_OF,
                ColumnName::Record => period_columns::RECORD,
                ColumnName::RecordYear => period_columns::RECORD_YEAR,
                ColumnName::Normal => period_columns::NORMAL,
                ColumnName::Departure => period_columns::DEPARTURE,
                ColumnName::LastYear => period_columns::LAST_YEAR,
                ColumnName::DateOfLast => period_columns::DATE_OF_LAST,
            },
        }
    }
}

/// Named cells of a table line, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnName {
    Value,
    /// One-character cell right of the value holding the record marker
    RecordMarker,
    TimeOf,
    Record,
    RecordYear,
    Normal,
    Departure,
    LastYear,
    DateOfLast,
}

impl ColumnName {
    /// Column that displays a capability
    pub fn for_capability(capability: Capability) -> Self {
        match capability {
            Capability::Measured => ColumnName::Value,
            Capability::TimeOfMeasured => ColumnName::TimeOf,
            Capability::Record => ColumnName::Record,
            Capability::RecordYear => ColumnName::RecordYear,
            Capability::Norm => ColumnName::Normal,
            Capability::Departure => ColumnName::Departure,
            Capability::LastYear => ColumnName::LastYear,
            Capability::DateOfLast => ColumnName::DateOfLast,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ColumnName::Value => "value",
            ColumnName::RecordMarker => "record_marker",
            ColumnName::TimeOf => "time_of",
            ColumnName::Record => "record",
            ColumnName::RecordYear => "record_year",
            ColumnName::Normal => "normal",
            ColumnName::Departure => "departure",
            ColumnName::LastYear => "last_year",
            ColumnName::DateOfLast => "date_of_last",
        }
    }
}

/// One reserved column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: ColumnName,
    pub start: usize,
    pub width: usize,
}

impl Column {
    /// First offset after the column; right-justified cells end just before it
    pub fn end(&self) -> usize {
        self.start + self.width
    }

    pub fn span(&self) -> Span {
        Span::at(self.start, self.width)
    }
}

/// Ordered named columns of one table
///
/// Computed once per table and reused for every row. Columns absent from the
/// set are disabled for every field in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSet {
    family: TableFamily,
    columns: Vec<Column>,
}

impl ColumnSet {
    pub fn family(&self) -> TableFamily {
        self.family
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn get(&self, name: ColumnName) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn contains(&self, name: ColumnName) -> bool {
        self.get(name).is_some()
    }

    pub fn label_span(&self) -> Span {
        Span::at(0, self.family.label_width())
    }

    /// End of the widest rendered column, or of the label when none exist
    pub fn last_stop(&self) -> usize {
        self.columns
            .last()
            .map(Column::end)
            .unwrap_or_else(|| self.family.label_width())
    }

    pub fn line_width(&self) -> usize {
        self.family.line_width()
    }

    /// A blank line of the table's declared width
    pub fn new_line(&self) -> LineBuffer {
        LineBuffer::new(self.line_width())
    }
}

/// Union of the capabilities enabled by any of the descriptors
pub fn union_capabilities<'a>(
    descriptors: impl IntoIterator<Item = &'a FieldDescriptor>,
) -> CapabilitySet {
    descriptors
        .into_iter()
        .flat_map(|descriptor| descriptor.capabilities().collect::<Vec<_>>())
        .collect()
}

/// Compute the column set for a table
///
/// # Arguments
///
/// * `enabled` - Capabilities enabled by at least one field in the table
/// * `family` - Table family, selecting widths and placement rules
///
/// # Returns
///
/// Column set whose offsets strictly increase in display order
pub fn compute(enabled: &CapabilitySet, family: TableFamily) -> Result<ColumnSet> {
    let mut columns = Vec::new();
    let mut cursor = family.label_width();

    for capability in Capability::ALL {
        if !enabled.contains(&capability) {
            continue;
        }

        let name = ColumnName::for_capability(capability);
        let mut width = family.column_width(name);
        if family == TableFamily::Daily
            && name == ColumnName::LastYear
            && !enabled.contains(&Capability::Departure)
        {
            width += daily_columns::LAST_YEAR_WIDENING;
        }

        columns.push(Column {
            name,
            start: cursor,
            width,
        });
        cursor += width;

        if capability == Capability::Measured && enabled.contains(&Capability::Record) {
            let marker_width = family.column_width(ColumnName::RecordMarker);
            columns.push(Column {
                name: ColumnName::RecordMarker,
                start: cursor,
                width: marker_width,
            });
            cursor += marker_width;
        }
    }

    if cursor > family.line_width() {
        return Err(Error::layout(format!(
            "{:?} columns need {} characters but lines are {} wide",
            family,
            cursor,
            family.line_width()
        )));
    }

    debug!(
        "Computed {:?} layout: {} columns ending at {}",
        family,
        columns.len(),
        cursor
    );

    Ok(ColumnSet { family, columns })
}
