//! Generic table row rendering
//!
//! One algorithm renders every element row of every table. What differs
//! between elements (label, section, rounding, record direction, tolerance)
//! lives in the declarative [`field_spec`] table rather than in per-element
//! code.
//!
//! # Architecture
//!
//! - [`field_spec`] - Per-element rendering rules and product sections
//! - [`cells`] - Time, date and year cell text
//! - [`builder`] - The row algorithm, record marking and continuation lines
//!
//! # Row Algorithm
//!
//! For each capability the element's descriptor enables, in display order:
//!
//! 1. Look up the column; skip the capability when the table has none
//! 2. Format the value through the sentinel codec at the element's precision
//! 3. Paint it right-justified against the column's right edge
//! 4. When records are shown and the observation carries a quantity, classify
//!    it against the record and mark ties and breaks in the marker cell
//!
//! Record years, period occurrence dates and last-year dates can hold more
//! than one entry. Extra entries go onto continuation lines that carry only
//! those cells.
//!
//! # Example Usage
//!
//! ```rust
//! use climate_formatter::app::models::{Capability, ClimateDate, Element, ElementRow, FieldDescriptor, RowSpan};
//! use climate_formatter::app::services::column_layout::{self, TableFamily};
//! use climate_formatter::app::services::record_evaluator::RecordEvaluator;
//! use climate_formatter::app::services::row_builder::{RowBuilder, field_spec};
//! use climate_formatter::config::Tolerances;
//!
//! # fn example() -> climate_formatter::Result<()> {
//! let descriptor = FieldDescriptor::measured_only().with(Capability::Norm, true);
//! let enabled = descriptor.capabilities().collect();
//! let columns = column_layout::compute(&enabled, TableFamily::Daily)?;
//! let evaluator = RecordEvaluator::new("KBOS", ClimateDate::new(2024, 3, 20)?);
//! let builder = RowBuilder::new(&columns, &evaluator, Tolerances::default());
//!
//! let row = ElementRow::new(Element::MaximumTemperature, RowSpan::Day)
//!     .with_actual(78.0)
//!     .with_normal(52.0);
//! let rendered = builder.render("  Maximum", &descriptor, &field_spec(Element::MaximumTemperature), &row)?;
//! assert_eq!(rendered.primary().len(), 80);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod cells;
pub mod field_spec;

#[cfg(test)]
pub mod tests;

pub use builder::{RenderedRow, RowBuilder, evaluate_row};
pub use field_spec::{DataKind, FieldSpec, Section, field_spec, section_elements};
