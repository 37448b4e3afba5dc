//! Configuration management and validation.
//!
//! Provides the configuration structures for one product run: global
//! presentation policy (symbols, colons, case, timezone, record tolerances)
//! and per-product settings (product family, report type, stations, enabled
//! sub-fields, season windows and user thresholds).
//!
//! Configuration is read from a TOML file. Every key is optional; missing
//! keys take the defaults below. Values that cannot be used, such as an
//! unparseable timezone, are repaired with a warning rather than rejected.

use crate::app::models::{Element, FieldDescriptor, MonthDay, ThresholdKind};
use crate::app::services::column_layout::TableFamily;
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_COOLING_SEASON_START, DEFAULT_HEATING_SEASON_START,
    DEFAULT_PRECIPITATION_SEASON_START, DEFAULT_PRECIPITATION_TOLERANCE, DEFAULT_SNOW_SEASON_END,
    DEFAULT_SNOW_SEASON_START, DEFAULT_SNOW_TOLERANCE, DEFAULT_TEMPERATURE_TOLERANCE,
    DEFAULT_TIMEZONE, DEFAULT_WRAP_WIDTH, MINUS_SIGN, RECORD_MARKER,
};
use crate::{Error, Result};
use chrono::{FixedOffset, Offset, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, info, warn};

// =============================================================================
// Global Presentation Policy
// =============================================================================

/// Letter case applied to the finished product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseFolding {
    #[default]
    Preserve,
    Upper,
    Lower,
}

/// Record comparison tolerance per data kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    pub temperature: f64,
    pub precipitation: f64,
    pub snow: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE_TOLERANCE,
            precipitation: DEFAULT_PRECIPITATION_TOLERANCE,
            snow: DEFAULT_SNOW_TOLERANCE,
        }
    }
}

/// Settings shared by every product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Replacement for the record marker in the finished text
    pub record_symbol: String,

    /// Replacement for the minus sign in the finished text
    pub negative_symbol: String,

    /// Strip every colon from the finished text
    pub remove_colons: bool,

    /// Letter case of the finished text
    pub case_folding: CaseFolding,

    /// Timezone for valid-time lines: GMT, UTC, +HH:MM, +HHMM or UTC+H
    pub timezone: String,

    /// Follow Fahrenheit temperatures with their Celsius equivalent
    pub do_celsius: bool,

    /// Record comparison tolerances
    pub tolerances: Tolerances,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            record_symbol: RECORD_MARKER.to_string(),
            negative_symbol: MINUS_SIGN.to_string(),
            remove_colons: false,
            case_folding: CaseFolding::Preserve,
            timezone: DEFAULT_TIMEZONE.to_string(),
            do_celsius: false,
            tolerances: Tolerances::default(),
        }
    }
}

impl GlobalConfig {
    pub fn with_record_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.record_symbol = symbol.into();
        self
    }

    pub fn with_negative_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.negative_symbol = symbol.into();
        self
    }

    pub fn with_remove_colons(mut self, remove: bool) -> Self {
        self.remove_colons = remove;
        self
    }

    pub fn with_case_folding(mut self, folding: CaseFolding) -> Self {
        self.case_folding = folding;
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    pub fn with_celsius(mut self, enabled: bool) -> Self {
        self.do_celsius = enabled;
        self
    }

    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Parsed timezone, falling back to GMT when the setting is unusable
    pub fn time_zone(&self) -> ReportTimeZone {
        ReportTimeZone::parse(&self.timezone).unwrap_or_else(|e| {
            warn!("{}; falling back to {}", e, DEFAULT_TIMEZONE);
            ReportTimeZone::default()
        })
    }
}

// =============================================================================
// Timezone
// =============================================================================

static TIMEZONE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^(?i)(?:(GMT|UTC|Z)|(?:GMT|UTC)?([+-])(\d{1,2})(?::?(\d{2}))?)$").ok()
});

/// A fixed UTC offset with the label printed after local times
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTimeZone {
    pub label: String,
    pub offset: FixedOffset,
}

impl Default for ReportTimeZone {
    fn default() -> Self {
        Self {
            label: DEFAULT_TIMEZONE.to_string(),
            offset: Utc.fix(),
        }
    }
}

impl ReportTimeZone {
    /// Parse `GMT`, `UTC`, `+HH:MM`, `-HHMM` or `UTC-5`
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        let invalid = || Error::configuration(format!("Invalid timezone '{}'", value));

        let pattern = TIMEZONE_PATTERN.as_ref().ok_or_else(invalid)?;
        let captures = pattern.captures(value).ok_or_else(invalid)?;

        if captures.get(1).is_some() {
            return Ok(Self {
                label: value.to_uppercase(),
                offset: Utc.fix(),
            });
        }

        let sign = if captures.get(2).map(|m| m.as_str()) == Some("-") {
            -1
        } else {
            1
        };
        let hours: i32 = captures
            .get(3)
            .and_then(|m| m.as_str().parse().ok())
            .ok_or_else(invalid)?;
        let minutes: i32 = match captures.get(4) {
            Some(m) => m.as_str().parse().map_err(|_| invalid())?,
            None => 0,
        };
        if hours > 14 || minutes > 59 {
            return Err(invalid());
        }

        let offset =
            FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)?;
        debug!("Parsed timezone '{}' as offset {}", value, offset);

        Ok(Self {
            label: value.to_uppercase(),
            offset,
        })
    }
}

// =============================================================================
// Product Settings
// =============================================================================

/// Bulletin family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    /// Column-aligned wire bulletin
    #[default]
    Nwws,
    /// Narrative voice script
    Nwr,
}

/// Report type, which selects the table family and wording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Daily report covering yesterday
    #[default]
    Morning,
    /// Daily report covering today
    Evening,
    /// Daily report valid as of a time today
    Intermediate,
    Monthly,
    Seasonal,
    Annual,
}

impl ReportKind {
    pub fn family(&self) -> TableFamily {
        if self.is_daily() {
            TableFamily::Daily
        } else {
            TableFamily::Period
        }
    }

    pub fn is_daily(&self) -> bool {
        matches!(
            self,
            ReportKind::Morning | ReportKind::Evening | ReportKind::Intermediate
        )
    }
}

/// Season windows for season-to-date rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonConfig {
    pub snow_start: MonthDay,
    pub snow_end: MonthDay,
    pub heating_start: MonthDay,
    pub cooling_start: MonthDay,
    pub precipitation_start: MonthDay,
}

impl Default for SeasonConfig {
    fn default() -> Self {
        Self {
            snow_start: DEFAULT_SNOW_SEASON_START.into(),
            snow_end: DEFAULT_SNOW_SEASON_END.into(),
            heating_start: DEFAULT_HEATING_SEASON_START.into(),
            cooling_start: DEFAULT_COOLING_SEASON_START.into(),
            precipitation_start: DEFAULT_PRECIPITATION_SEASON_START.into(),
        }
    }
}

/// A locally configured temperature threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserThreshold {
    pub kind: ThresholdKind,
    /// Threshold in degrees Fahrenheit
    pub degrees: i32,
}

/// Settings for one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductConfig {
    pub product: ProductKind,
    pub report: ReportKind,

    /// Station identifiers in product order; empty means every bundle station
    pub stations: Vec<String>,

    /// Enabled sub-fields keyed by element; absent elements enable everything
    pub fields: BTreeMap<String, FieldDescriptor>,

    pub seasons: SeasonConfig,

    pub user_thresholds: Vec<UserThreshold>,

    /// Derive an average temperature row from the maximum and minimum
    pub derive_average_temperature: bool,

    pub include_footnote: bool,

    /// Maximum line length of narrative products
    pub wrap_width: usize,
}

impl Default for ProductConfig {
    fn default() -> Self {
        Self {
            product: ProductKind::Nwws,
            report: ReportKind::Morning,
            stations: Vec::new(),
            fields: BTreeMap::new(),
            seasons: SeasonConfig::default(),
            user_thresholds: Vec::new(),
            derive_average_temperature: false,
            include_footnote: true,
            wrap_width: DEFAULT_WRAP_WIDTH,
        }
    }
}

impl ProductConfig {
    pub fn with_product(mut self, product: ProductKind) -> Self {
        self.product = product;
        self
    }

    pub fn with_report(mut self, report: ReportKind) -> Self {
        self.report = report;
        self
    }

    pub fn with_stations<I, S>(mut self, stations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stations = stations.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_field(mut self, element: Element, descriptor: FieldDescriptor) -> Self {
        self.fields.insert(element.key().to_string(), descriptor);
        self
    }

    pub fn with_seasons(mut self, seasons: SeasonConfig) -> Self {
        self.seasons = seasons;
        self
    }

    pub fn with_user_threshold(mut self, threshold: UserThreshold) -> Self {
        self.user_thresholds.push(threshold);
        self
    }

    pub fn with_derived_average(mut self, enabled: bool) -> Self {
        self.derive_average_temperature = enabled;
        self
    }

    pub fn with_footnote(mut self, enabled: bool) -> Self {
        self.include_footnote = enabled;
        self
    }

    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width;
        self
    }

    /// Enabled sub-fields for an element
    pub fn descriptor(&self, element: Element) -> FieldDescriptor {
        self.fields
            .get(element.key())
            .copied()
            .unwrap_or_else(FieldDescriptor::all)
    }
}

// =============================================================================
// Formatter Configuration
// =============================================================================

/// Complete configuration for one product run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    pub global: GlobalConfig,
    pub product: ProductConfig,
}

impl FormatterConfig {
    pub fn with_global(mut self, global: GlobalConfig) -> Self {
        self.global = global;
        self
    }

    pub fn with_product(mut self, product: ProductConfig) -> Self {
        self.product = product;
        self
    }

    /// Default configuration file location, e.g.
    /// `~/.config/climate-formatter/formatter.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str, source_name: &str) -> Result<Self> {
        let mut config: FormatterConfig = toml::from_str(text).map_err(|e| {
            Error::config_parse(source_name, "Invalid configuration file", Some(e))
        })?;
        config.validate();
        Ok(config)
    }

    /// Load configuration from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// The validated configuration, or an I/O or parse error
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read configuration file '{}'", path.display()),
                e,
            )
        })?;
        let config = Self::from_toml_str(&text, &path.display().to_string())?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load an explicit file, else the default file when present, else defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_path(path);
        }

        match Self::default_path() {
            Some(default_path) if default_path.is_file() => Self::load_from_path(&default_path),
            _ => {
                debug!("No configuration file found, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    /// Repair unusable values, logging a warning for each
    pub fn validate(&mut self) {
        if let Err(e) = ReportTimeZone::parse(&self.global.timezone) {
            warn!("{}; falling back to {}", e, DEFAULT_TIMEZONE);
            self.global.timezone = DEFAULT_TIMEZONE.to_string();
        }

        let defaults = SeasonConfig::default();
        let seasons = &mut self.product.seasons;
        for (name, window, fallback) in [
            ("snow_start", &mut seasons.snow_start, defaults.snow_start),
            ("snow_end", &mut seasons.snow_end, defaults.snow_end),
            ("heating_start", &mut seasons.heating_start, defaults.heating_start),
            ("cooling_start", &mut seasons.cooling_start, defaults.cooling_start),
            (
                "precipitation_start",
                &mut seasons.precipitation_start,
                defaults.precipitation_start,
            ),
        ] {
            if window.validate().is_err() {
                warn!(
                    "Invalid season date {} = {}/{}; using {}/{}",
                    name, window.month, window.day, fallback.month, fallback.day
                );
                *window = fallback;
            }
        }

        for key in self.product.fields.keys() {
            if key.parse::<Element>().is_err() {
                warn!("Ignoring field settings for unknown element '{}'", key);
            }
        }

        if self.product.wrap_width == 0 {
            warn!("wrap_width must be positive; using {}", DEFAULT_WRAP_WIDTH);
            self.product.wrap_width = DEFAULT_WRAP_WIDTH;
        }

        let negative_tolerance = [
            self.global.tolerances.temperature,
            self.global.tolerances.precipitation,
            self.global.tolerances.snow,
        ]
        .iter()
        .any(|tolerance| *tolerance < 0.0);
        if negative_tolerance {
            warn!("Negative record tolerances are treated as their absolute value");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = FormatterConfig::default();
        assert_eq!(config.global.record_symbol, "*");
        assert_eq!(config.global.negative_symbol, "-");
        assert_eq!(config.global.timezone, "GMT");
        assert_eq!(config.global.tolerances.precipitation, 0.02);
        assert_eq!(config.global.tolerances.temperature, 0.0);
        assert_eq!(config.product.wrap_width, 80);
        assert_eq!(config.product.seasons.snow_start, MonthDay::new(7, 1));
        assert!(config.product.include_footnote);
    }

    #[test]
    fn test_missing_element_enables_everything() {
        let product = ProductConfig::default()
            .with_field(Element::Precipitation, FieldDescriptor::measured_only());

        assert_eq!(
            product.descriptor(Element::Precipitation),
            FieldDescriptor::measured_only()
        );
        assert_eq!(
            product.descriptor(Element::Snowfall),
            FieldDescriptor::all()
        );
    }

    #[test]
    fn test_parse_toml() {
        let text = r#"
            [global]
            record_symbol = "R"
            case_folding = "upper"
            timezone = "-05:00"

            [global.tolerances]
            precipitation = 0.01

            [product]
            product = "nwr"
            report = "monthly"
            stations = ["KBOS", "KORD"]

            [product.fields.maximum_temperature]
            measured = true
            record = true

            [product.seasons]
            snow_start = { month = 8, day = 1 }

            [[product.user_thresholds]]
            kind = "max_at_or_above"
            degrees = 100
        "#;

        let config = FormatterConfig::from_toml_str(text, "inline").unwrap();
        assert_eq!(config.global.record_symbol, "R");
        assert_eq!(config.global.case_folding, CaseFolding::Upper);
        assert_eq!(config.global.tolerances.precipitation, 0.01);
        assert_eq!(config.global.tolerances.snow, 0.02);
        assert_eq!(config.product.product, ProductKind::Nwr);
        assert_eq!(config.product.report, ReportKind::Monthly);
        assert_eq!(config.product.stations, vec!["KBOS", "KORD"]);
        assert_eq!(config.product.seasons.snow_start, MonthDay::new(8, 1));
        assert_eq!(config.product.seasons.heating_start, MonthDay::new(7, 1));
        assert_eq!(config.product.user_thresholds[0].degrees, 100);

        let max = config.product.descriptor(Element::MaximumTemperature);
        assert!(max.measured && max.record);
        assert!(!max.norm);
    }

    #[test]
    fn test_bad_toml_is_config_parse_error() {
        let result = FormatterConfig::from_toml_str("[global\nrecord_symbol = ", "broken.toml");
        assert!(matches!(result, Err(Error::ConfigParse { ref file, .. }) if file == "broken.toml"));
    }

    #[test]
    fn test_invalid_timezone_falls_back_to_gmt() {
        let config =
            FormatterConfig::from_toml_str("[global]\ntimezone = \"Mars/Olympus\"", "inline")
                .unwrap();
        assert_eq!(config.global.timezone, "GMT");
    }

    #[test]
    fn test_invalid_season_is_repaired() {
        let text = "[product.seasons]\nsnow_start = { month = 2, day = 30 }";
        let config = FormatterConfig::from_toml_str(text, "inline").unwrap();
        assert_eq!(config.product.seasons.snow_start, MonthDay::new(7, 1));
    }

    #[test]
    fn test_timezone_forms() {
        let cases = [
            ("GMT", 0),
            ("utc", 0),
            ("+05:30", 5 * 3600 + 30 * 60),
            ("-0500", -5 * 3600),
            ("UTC-5", -5 * 3600),
            ("UTC+10", 10 * 3600),
        ];
        for (text, seconds) in cases {
            let zone = ReportTimeZone::parse(text).unwrap();
            assert_eq!(zone.offset.local_minus_utc(), seconds, "{}", text);
        }
        assert!(ReportTimeZone::parse("EST5EDT").is_err());
        assert!(ReportTimeZone::parse("+25:00").is_err());
    }

    #[test]
    fn test_report_families() {
        assert_eq!(ReportKind::Morning.family(), TableFamily::Daily);
        assert_eq!(ReportKind::Intermediate.family(), TableFamily::Daily);
        assert_eq!(ReportKind::Monthly.family(), TableFamily::Period);
        assert_eq!(ReportKind::Annual.family(), TableFamily::Period);
    }

    #[test]
    fn test_load_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[product]\nreport = \"evening\"").unwrap();

        let config = FormatterConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.product.report, ReportKind::Evening);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = FormatterConfig::load_from_path(Path::new("/nonexistent/formatter.toml"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = FormatterConfig::default().with_product(
            ProductConfig::default()
                .with_stations(["KBOS"])
                .with_user_threshold(UserThreshold {
                    kind: ThresholdKind::MinAtOrBelow,
                    degrees: 10,
                }),
        );
        let text = toml::to_string(&config).unwrap();
        let parsed = FormatterConfig::from_toml_str(&text, "roundtrip").unwrap();
        assert_eq!(config, parsed);
    }
}
