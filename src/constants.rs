//! Application constants for the climate formatter
//!
//! This module contains the output tokens, table geometry, default values,
//! and fixed text blocks used throughout bulletin rendering.

// =============================================================================
// Sentinel Tokens and Symbols
// =============================================================================

/// Two-character token shown when a value is not available
pub const MISSING_TOKEN: &str = "MM";

/// Single-character token shown for a trace amount
pub const TRACE_TOKEN: &str = "T";

/// Marker painted next to an observed value that set or tied a record
pub const RECORD_MARKER: char = '*';

/// Negative sign as emitted by the numeric formatter
pub const MINUS_SIGN: char = '-';

/// Double dash protected from negative-sign substitution
pub const DOUBLE_DASH: &str = "--";

/// Placeholder used while the double dash is protected
pub const DOUBLE_DASH_PLACEHOLDER: &str = "~~";

/// Phrase spoken in place of a trace amount in voice-script products
pub const TRACE_PHRASE: &str = "a trace";

/// Slack applied to record tolerance comparisons to absorb float noise
pub const RECORD_COMPARISON_EPSILON: f64 = 1e-9;

// =============================================================================
// Table Geometry
// =============================================================================

/// Total width of every line in a daily table
pub const DAILY_LINE_WIDTH: usize = 80;

/// Total width of every line in a monthly, seasonal or annual table
pub const PERIOD_LINE_WIDTH: usize = 72;

/// Column widths for daily tables
///
/// Each width includes at least one blank character of left padding so
/// that right-justified cells never run together.
pub mod daily_columns {
    pub const LABEL: usize = 20;
    pub const VALUE: usize = 9;
    pub const MARKER: usize = 1;
    pub const TIME_OF: usize = 9;
    pub const RECORD: usize = 7;
    pub const RECORD_YEAR: usize = 5;
    pub const NORMAL: usize = 7;
    pub const DEPARTURE: usize = 10;
    pub const LAST_YEAR: usize = 6;
    pub const DATE_OF_LAST: usize = 6;

    /// Extra width given to the last-year column when departure is collapsed
    pub const LAST_YEAR_WIDENING: usize = 4;
}

/// Column widths for period tables
pub mod period_columns {
    pub const LABEL: usize = 14;
    pub const VALUE: usize = 7;
    pub const MARKER: usize = 1;
    pub const TIME_OF: usize = 6;
    pub const RECORD: usize = 7;
    pub const RECORD_YEAR: usize = 5;
    pub const NORMAL: usize = 8;
    pub const DEPARTURE: usize = 10;
    pub const LAST_YEAR: usize = 7;
    pub const DATE_OF_LAST: usize = 7;
}

/// Number of header lines above the separator in every table
pub const HEADER_LINE_COUNT: usize = 3;

/// Text of the label column in the first header line
pub const LABEL_HEADER: &str = "Weather Item";

/// Character used for table separator lines
pub const SEPARATOR_CHAR: char = '.';

/// Indentation of row labels under a section heading
pub const ROW_LABEL_INDENT: usize = 2;

/// Indentation of sub-headings such as "Heating" inside a section
pub const SUBHEADING_INDENT: usize = 1;

// =============================================================================
// Record Tolerances
// =============================================================================

/// Default record tolerance for integer temperatures and day counts
pub const DEFAULT_TEMPERATURE_TOLERANCE: f64 = 0.0;

/// Default record tolerance for precipitation amounts in inches
pub const DEFAULT_PRECIPITATION_TOLERANCE: f64 = 0.02;

/// Default record tolerance for snowfall amounts in inches
pub const DEFAULT_SNOW_TOLERANCE: f64 = 0.02;

// =============================================================================
// Season Windows (month, day)
// =============================================================================

/// Default start of the snowfall season
pub const DEFAULT_SNOW_SEASON_START: (u32, u32) = (7, 1);

/// Default start of the heating degree day season
pub const DEFAULT_HEATING_SEASON_START: (u32, u32) = (7, 1);

/// Default start of the cooling degree day season
pub const DEFAULT_COOLING_SEASON_START: (u32, u32) = (1, 1);

/// Default start of the precipitation season
pub const DEFAULT_PRECIPITATION_SEASON_START: (u32, u32) = (1, 1);

/// Default end of the snowfall season, inclusive
pub const DEFAULT_SNOW_SEASON_END: (u32, u32) = (6, 30);

// =============================================================================
// Voice-Script Layout
// =============================================================================

/// Column at which voice-script text is wrapped
pub const DEFAULT_WRAP_WIDTH: usize = 80;

/// Text appended after every sentence: a period and two spaces
pub const SENTENCE_END: &str = ".  ";

// =============================================================================
// Configuration Defaults
// =============================================================================

/// Timezone used when the configured one cannot be parsed
pub const DEFAULT_TIMEZONE: &str = "GMT";

/// Application directory under the platform config directory
pub const CONFIG_DIR_NAME: &str = "climate-formatter";

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "formatter.toml";

// =============================================================================
// Fixed Text Blocks
// =============================================================================

/// Footnote appended to tabular products
pub const FOOTNOTE_LINES: &[&str] = &[
    "-  Indicates negative numbers.",
    "*  Indicates record was set or tied.",
    "MM Indicates data is missing.",
    "T  Indicates Trace Amount.",
];

/// Three-letter month abbreviations used in row labels
pub const SHORT_MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
