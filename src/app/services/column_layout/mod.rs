//! Column layout for tabular (NWWS) products
//!
//! Decides where every cell of a table lives. A table's layout depends on
//! which optional sub-fields are enabled for at least one of its elements,
//! so it is recomputed whenever the enabled capability set changes and is
//! shared by every row of the table once computed.
//!
//! # Architecture
//!
//! - [`layout`] - Table families, named columns and the collapse algorithm
//! - [`header`] - Header and separator lines derived from a column set
//!
//! # Layout Rules
//!
//! Columns are reserved left to right in the fixed display order value,
//! time-of, record, record-year, normal, departure, last-year, date-of-last.
//! A one-character marker cell follows the value column whenever records are
//! shown. A disabled column leaves no gap. Daily tables widen the last-year
//! column when departure is disabled; period tables do not.
//!
//! # Example Usage
//!
//! ```rust
//! use climate_formatter::app::models::{Capability, CapabilitySet};
//! use climate_formatter::app::services::column_layout::{self, ColumnName, TableFamily};
//!
//! # fn example() -> climate_formatter::Result<()> {
//! let enabled: CapabilitySet = [Capability::Measured, Capability::Norm].into_iter().collect();
//! let columns = column_layout::compute(&enabled, TableFamily::Daily)?;
//!
//! assert!(columns.contains(ColumnName::Normal));
//! assert!(!columns.contains(ColumnName::Record));
//! # Ok(())
//! # }
//! ```

pub mod header;
pub mod layout;

#[cfg(test)]
pub mod tests;

pub use header::{header_lines, separator_line};
pub use layout::{Column, ColumnName, ColumnSet, TableFamily, compute, union_capabilities};
