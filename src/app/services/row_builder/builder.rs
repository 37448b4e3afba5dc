//! Generic row rendering driven by the per-element `FieldSpec` table

use super::cells::{extra_dates, first_date_cell, last_date_cell, time_cell, year_cell};
use super::field_spec::FieldSpec;
use crate::Result;
use crate::app::models::{Capability, ElementRow, FieldDescriptor, RecordEvent, RecordOutcome};
use crate::app::services::column_layout::{Column, ColumnName, ColumnSet, TableFamily};
use crate::app::services::record_evaluator::{RecordEvaluation, RecordEvaluator, RecordQuery};
use crate::app::services::sentinel_codec::{self, DisplayToken};
use crate::config::Tolerances;
use crate::constants::RECORD_MARKER;
use tracing::debug;

/// One rendered table row: the primary line plus continuation lines
///
/// Every line has the table's declared width.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    pub lines: Vec<String>,
    pub outcome: RecordOutcome,
    /// Record notification to hand downstream, after tie suppression
    pub event: Option<RecordEvent>,
}

impl RenderedRow {
    pub fn primary(&self) -> &str {
        self.lines.first().map(String::as_str).unwrap_or_default()
    }

    pub fn continuation(&self) -> &[String] {
        self.lines.get(1..).unwrap_or_default()
    }
}

/// Compare a row's observation against its record
///
/// Elements without records and observations that carry no quantity are
/// never records.
pub fn evaluate_row(
    evaluator: &RecordEvaluator,
    spec: &FieldSpec,
    row: &ElementRow,
    tolerances: &Tolerances,
) -> RecordEvaluation {
    let Some(direction) = spec.direction.filter(|_| row.actual.is_comparable()) else {
        return RecordEvaluation {
            outcome: RecordOutcome::NoRecord,
            event: None,
        };
    };

    let years: Vec<i32> = row.valid_record_years().collect();
    evaluator.evaluate(&RecordQuery {
        element: spec.element,
        observed: row.actual,
        record: row.record,
        record_years: &years,
        current_year: evaluator.date().year,
        direction,
        tolerance: spec.tolerance(tolerances),
    })
}

/// Renders element rows into a table's column set
pub struct RowBuilder<'a> {
    columns: &'a ColumnSet,
    evaluator: &'a RecordEvaluator,
    tolerances: Tolerances,
}

impl<'a> RowBuilder<'a> {
    pub fn new(
        columns: &'a ColumnSet,
        evaluator: &'a RecordEvaluator,
        tolerances: Tolerances,
    ) -> Self {
        Self {
            columns,
            evaluator,
            tolerances,
        }
    }

    pub fn columns(&self) -> &ColumnSet {
        self.columns
    }

    /// Render one row of statistics
    ///
    /// Cells are painted in capability display order, each right-justified
    /// against its column's right edge. Capabilities the descriptor enables
    /// but the table has no column for are skipped.
    ///
    /// # Arguments
    ///
    /// * `label` - Row label, already indented
    /// * `descriptor` - Sub-fields enabled for the element
    /// * `spec` - Rendering rules for the element
    /// * `row` - Upstream statistics
    ///
    /// # Returns
    ///
    /// The rendered lines with the record outcome and any record event
    pub fn render(
        &self,
        label: &str,
        descriptor: &FieldDescriptor,
        spec: &FieldSpec,
        row: &ElementRow,
    ) -> Result<RenderedRow> {
        let mut line = self.columns.new_line();
        line.paint(self.columns.label_span(), label)?;

        let years: Vec<i32> = row.valid_record_years().collect();
        let mut outcome = RecordOutcome::NoRecord;
        let mut event = None;

        for capability in descriptor.capabilities() {
            let Some(column) = self.columns.get(ColumnName::for_capability(capability)) else {
                continue;
            };

            let token = match capability {
                Capability::Measured => spec.format_value(row.actual),
                Capability::TimeOfMeasured if !spec.has_occurrence => DisplayToken::Blank,
                Capability::TimeOfMeasured => match self.columns.family() {
                    TableFamily::Daily => time_cell(row.actual, row.time),
                    TableFamily::Period => first_date_cell(row.actual, &row.dates)?,
                },
                Capability::Record => {
                    let evaluation = evaluate_row(self.evaluator, spec, row, &self.tolerances);
                    outcome = evaluation.outcome;
                    event = evaluation.event;
                    spec.format_value(row.record)
                }
                Capability::RecordYear => year_cell(row.record, years.first().copied()),
                Capability::Norm => spec.format_value(row.normal),
                Capability::Departure => {
                    sentinel_codec::format_departure(row.actual, row.normal, spec.precision)
                }
                Capability::LastYear => spec.format_value(row.last_year),
                Capability::DateOfLast => last_date_cell(row.last_year, &row.last_year_dates)?,
            };

            if !token.is_blank() {
                line.paint_right(column.span(), token.as_str())?;
            }
        }

        let marked = outcome.is_record() && descriptor.measured;
        if let Some(marker) = self.columns.get(ColumnName::RecordMarker).filter(|_| marked) {
            line.paint(marker.span(), &RECORD_MARKER.to_string())?;
        }

        let mut lines = vec![line.into_string()];
        lines.extend(self.continuation_lines(descriptor, spec, row, &years)?);

        debug!(
            "Rendered {} row '{}' ({:?}, {} continuation lines)",
            spec.element,
            label.trim(),
            outcome,
            lines.len() - 1
        );

        Ok(RenderedRow {
            lines,
            outcome,
            event,
        })
    }

    /// Lines carrying the extra entries of multi-valued cells
    ///
    /// Line `i` holds the `i`-th extra entry of every multi-valued column;
    /// missing entries are dropped before counting.
    fn continuation_lines(
        &self,
        descriptor: &FieldDescriptor,
        spec: &FieldSpec,
        row: &ElementRow,
        years: &[i32],
    ) -> Result<Vec<String>> {
        let mut extras: Vec<(&Column, Vec<String>)> = Vec::new();

        let shows_years = descriptor.record_year && !row.record.is_not_applicable();
        if let Some(column) = self.columns.get(ColumnName::RecordYear).filter(|_| shows_years) {
            let later: Vec<String> = years.iter().skip(1).map(i32::to_string).collect();
            extras.push((column, later));
        }

        let shows_dates = descriptor.time_of_measured
            && spec.has_occurrence
            && self.columns.family() == TableFamily::Period
            && row.actual.is_comparable();
        if let Some(column) = self.columns.get(ColumnName::TimeOf).filter(|_| shows_dates) {
            extras.push((column, extra_dates(&row.dates)?));
        }

        let shows_last_dates = descriptor.date_of_last && !row.last_year.is_not_applicable();
        let last_date_column = self.columns.get(ColumnName::DateOfLast);
        if let Some(column) = last_date_column.filter(|_| shows_last_dates) {
            extras.push((column, extra_dates(&row.last_year_dates)?));
        }

        let count = extras.iter().map(|(_, values)| values.len()).max().unwrap_or(0);
        let mut lines = Vec::with_capacity(count);

        for index in 0..count {
            let mut line = self.columns.new_line();
            for (column, values) in &extras {
                if let Some(value) = values.get(index) {
                    line.paint_right(column.span(), value)?;
                }
            }
            lines.push(line.into_string());
        }

        Ok(lines)
    }
}
