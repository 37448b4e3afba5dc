//! Tests for the row builder module


use crate::app::models::{Capability, ClimateDate, CapabilitySet, DateValue};
use crate::app::services::column_layout::{self, Column, ColumnName, ColumnSet, TableFamily};
use crate::app::services::record_evaluator::RecordEvaluator;

/// Column set with every capability enabled
pub fn full_columns(family: TableFamily) -> ColumnSet {
    let enabled: CapabilitySet = Capability::ALL.into_iter().collect();
    column_layout::compute(&enabled, family).unwrap()
}

/// Evaluator for KBOS on 2024-03-20
pub fn evaluator() -> RecordEvaluator {
    RecordEvaluator::new("KBOS", ClimateDate::new(2024, 3, 20).unwrap())
}

/// Known date slot
pub fn on(year: i32, month: u32, day: u32) -> DateValue {
    DateValue::Known(ClimateDate { year, month, day })
}

/// Trimmed text of one column on a rendered line
pub fn cell<'a>(line: &'a str, columns: &ColumnSet, name: ColumnName) -> &'a str {
    let column: &Column = columns.get(name).unwrap();
    line[column.start..column.end()].trim()
}
