//! English sentences for voice-script products
//!
//! Turns one element row into spoken sentences: the observed value, when it
//! happened, how it compares with the normal and whether it set a record.
//! Pluralization is always chosen by the grammar helpers so that every
//! sentence agrees in number.
//!
//! # Architecture
//!
//! - [`grammar`] - Singular/plural word choice and unit phrases
//! - [`sentences`] - The [`PhraseComposer`] and its per-element sentences
//! - [`wrap`] - Line wrapping of the finished narrative
//!
//! Every sentence ends with a period followed by two spaces.
//!
//! # Example Usage
//!
//! ```rust
//! use climate_formatter::app::models::{Element, ElementRow, FieldDescriptor, RecordOutcome, RowSpan};
//! use climate_formatter::app::services::phrase_composer::PhraseComposer;
//! use climate_formatter::app::services::row_builder::field_spec;
//!
//! # fn example() -> climate_formatter::Result<()> {
//! let composer = PhraseComposer::new(false, false);
//! let row = ElementRow::new(Element::HeatingDegreeDays, RowSpan::MonthToDate).with_actual(0.0);
//! let text = composer.element_sentences(
//!     &field_spec(Element::HeatingDegreeDays),
//!     &FieldDescriptor::measured_only(),
//!     &row,
//!     "this month",
//!     RecordOutcome::NoRecord,
//! )?;
//! assert_eq!(text, "There were no heating degree days this month.  ");
//! # Ok(())
//! # }
//! ```

pub mod grammar;
pub mod sentences;
pub mod wrap;

#[cfg(test)]
pub mod tests;

pub use sentences::PhraseComposer;
pub use wrap::insert_new_lines;
