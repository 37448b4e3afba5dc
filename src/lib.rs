//! Climate Formatter Library
//!
//! A Rust library for rendering pre-computed climate station statistics into
//! the two fixed-format bulletin families used for public climate reports:
//! the column-aligned tabular wire format (NWWS) and the narrative
//! voice-script format (NWR).
//!
//! This library provides tools for:
//! - Formatting values that may be missing, blank, or a trace amount
//! - Computing per-table column layouts from the enabled sub-fields
//! - Painting right-justified cells into fixed-width lines
//! - Classifying observations as tying or breaking historical records
//! - Composing English sentences with consistent pluralization
//! - Assembling multi-station products with a final presentation pass

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod column_layout;
        pub mod date_sentence;
        pub mod line_buffer;
        pub mod phrase_composer;
        pub mod product_assembler;
        pub mod record_evaluator;
        pub mod row_builder;
        pub mod sentinel_codec;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    Capability, ClimateDate, Element, FieldDescriptor, ObservationValue, RecordEvent,
};
pub use config::FormatterConfig;

/// Result type alias for the climate formatter
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for bulletin rendering operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file could not be parsed
    #[error("Configuration parse error in '{file}': {message}")]
    ConfigParse {
        file: String,
        message: String,
        #[source]
        source: Option<toml::de::Error>,
    },

    /// Statistics bundle could not be parsed
    #[error("Statistics bundle parse error: {message}")]
    BundleParse {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// A calendar date with an impossible month or day
    #[error("Invalid date {year:04}-{month:02}-{day:02}: {reason}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        reason: String,
    },

    /// A write that would fall outside a fixed-width line
    #[error("Line write out of bounds: span {start}..{end} on a line of width {width}")]
    LineBounds {
        start: usize,
        end: usize,
        width: usize,
    },

    /// Column layout cannot be satisfied
    #[error("Column layout error: {message}")]
    Layout { message: String },

    /// Station not present in the statistics bundle
    #[error("Station not found in bundle: {station_id}")]
    StationNotFound { station_id: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a configuration parse error
    pub fn config_parse(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<toml::de::Error>,
    ) -> Self {
        Self::ConfigParse {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a bundle parse error
    pub fn bundle_parse(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::BundleParse {
            message: message.into(),
            source,
        }
    }

    /// Create an invalid date error
    pub fn invalid_date(year: i32, month: u32, day: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDate {
            year,
            month,
            day,
            reason: reason.into(),
        }
    }

    /// Create a line bounds error
    pub fn line_bounds(start: usize, end: usize, width: usize) -> Self {
        Self::LineBounds { start, end, width }
    }

    /// Create a layout error
    pub fn layout(message: impl Into<String>) -> Self {
        Self::Layout {
            message: message.into(),
        }
    }

    /// Create a station not found error
    pub fn station_not_found(station_id: impl Into<String>) -> Self {
        Self::StationNotFound {
            station_id: station_id.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::BundleParse {
            message: "JSON parsing failed".to_string(),
            source: error,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::ConfigParse {
            file: "unknown".to_string(),
            message: "TOML parsing failed".to_string(),
            source: Some(error),
        }
    }
}
