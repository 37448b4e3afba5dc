//! Product assembly for tabular and narrative bulletins
//!
//! Drives the lower layers for every configured station and concatenates
//! the result into one bulletin. The assembler owns the product
//! configuration and the table's column set, and collects the record events
//! found while rendering.
//!
//! # Architecture
//!
//! - [`assembler`] - Station selection, derived rows and final concatenation
//! - [`nwws`] - Title, header, sections and rows of the tabular bulletin
//! - [`nwr`] - Intro and element sentences of the voice script
//! - [`labels`] - Row labels, spoken spans and season windows
//! - [`post_process`] - Record marker, negative sign, colon and case policy
//!
//! # Processing Flow
//!
//! 1. Compute the column set from the enabled sub-fields of every element
//! 2. Select stations: configured order, or bundle order when none are listed
//! 3. Render each station's segment; a station missing from the bundle is
//!    logged and skipped
//! 4. Join segments with a blank line and append the footnote (tabular only)
//! 5. Apply the presentation pass once to the whole text
//!
//! # Example Usage
//!
//! ```rust
//! use climate_formatter::app::models::{ClimateDate, Element, ElementRow, ProductBundle, RowSpan, StationBundle};
//! use climate_formatter::app::services::product_assembler::ProductAssembler;
//! use climate_formatter::config::FormatterConfig;
//!
//! # fn example() -> climate_formatter::Result<()> {
//! let station = StationBundle::new("KBOS", "Boston")
//!     .with_row(ElementRow::new(Element::MaximumTemperature, RowSpan::Day).with_actual(78.0));
//! let bundle = ProductBundle::new(ClimateDate::new(2024, 3, 20)?).with_station(station);
//!
//! let assembler = ProductAssembler::new(FormatterConfig::default())?;
//! let output = assembler.render(&bundle)?;
//! assert!(output.text.starts_with("...The Boston climate summary for March 20 2024..."));
//! assert_eq!(output.stations_rendered, 1);
//! # Ok(())
//! # }
//! ```

pub mod assembler;
pub mod labels;
pub mod nwr;
pub mod nwws;
pub mod post_process;

#[cfg(test)]
pub mod tests;

pub use assembler::{ProductAssembler, RenderOutput, StationSegment, derived_average_rows};
pub use labels::{report_window, row_label, span_phrase};
pub use post_process::post_process;
