//! Integration tests for end-to-end product rendering
//!
//! These tests drive the public API and the command-line binary with the
//! sample bundle and configuration under `demos/`, and check the layout
//! properties every product must keep for arbitrary values.

use climate_formatter::app::models::{
    ClimateDate, ClockTime, Element, ElementRow, ObservationValue, ProductBundle, RecordOutcome,
    RowSpan, StationBundle,
};
use climate_formatter::app::services::phrase_composer::insert_new_lines;
use climate_formatter::app::services::product_assembler::ProductAssembler;
use climate_formatter::app::services::record_evaluator::{Direction, classify};
use climate_formatter::app::services::sentinel_codec::{Precision, format};
use climate_formatter::config::{CaseFolding, ProductKind};
use climate_formatter::constants::FOOTNOTE_LINES;
use climate_formatter::{FormatterConfig, RecordEvent};
use proptest::prelude::*;
use std::process::Command;
use tempfile::TempDir;

const DEMO_BUNDLE: &str = include_str!("../demos/daily_bundle.json");
const DEMO_CONFIG: &str = include_str!("../demos/formatter.toml");

fn report_date() -> ClimateDate {
    ClimateDate {
        year: 2024,
        month: 3,
        day: 20,
    }
}

/// Title, blank and footnote lines are not table lines
fn is_free_text(line: &str) -> bool {
    line.is_empty() || line.starts_with("...") || FOOTNOTE_LINES.contains(&line)
}

fn single_station(max: f64, min: f64, normal: f64, record: f64) -> ProductBundle {
    let station = StationBundle::new("KTST", "Testville")
        .with_row(
            ElementRow::new(Element::MaximumTemperature, RowSpan::Day)
                .with_actual(max)
                .with_normal(normal)
                .with_record(record, vec![1950]),
        )
        .with_row(
            ElementRow::new(Element::MinimumTemperature, RowSpan::Day)
                .with_actual(min)
                .with_normal(normal - 15.0),
        );
    ProductBundle::new(report_date()).with_station(station)
}

// =============================================================================
// Demo Bundle
// =============================================================================

/// Test rendering the sample bundle with the sample configuration
///
/// Purpose: Validate that the shipped sample files parse and render together
/// Benefit: Keeps the documented sample usable as the formats evolve
#[test]
fn test_demo_bundle_with_demo_config() {
    let bundle = ProductBundle::from_json_str(DEMO_BUNDLE).expect("sample bundle parses");
    let config = FormatterConfig::from_toml_str(DEMO_CONFIG, "formatter.toml")
        .expect("sample configuration parses");
    assert_eq!(config.global.case_folding, CaseFolding::Upper);

    let output = ProductAssembler::new(config)
        .unwrap()
        .render(&bundle)
        .unwrap();

    assert_eq!(output.stations_rendered, 2);
    assert!(output.stations_skipped.is_empty());
    assert!(
        output
            .text
            .starts_with("...THE BOSTON CLIMATE SUMMARY FOR MARCH 20 2024...")
    );
    assert!(output.text.contains("78R"));
    assert!(output.text.contains("  AVERAGE"));
    assert!(!output.text.contains('*'));

    assert_eq!(output.events.len(), 1);
    assert_eq!(output.events[0].outcome, RecordOutcome::Broken);
    assert_eq!(output.events[0].year_of_record, Some(1998));
}

/// Test the narrative rendering of the sample bundle
///
/// Purpose: Validate the voice-script family end to end
/// Benefit: Catches wording or wrapping regressions across modules
#[test]
fn test_demo_bundle_as_narrative() {
    let bundle = ProductBundle::from_json_str(DEMO_BUNDLE).unwrap();
    let mut config = FormatterConfig::default();
    config.product.product = ProductKind::Nwr;
    config.product.wrap_width = 66;

    let output = ProductAssembler::new(config)
        .unwrap()
        .render(&bundle)
        .unwrap();

    assert!(output.text.lines().all(|line| line.chars().count() <= 66));
    let flat = output.text.replace('\n', " ");
    assert!(flat.contains("This breaks the previous record of 76 which was set in 1998."));
    assert!(flat.contains("The Worcester climate summary for yesterday, March 20 2024."));
}

// =============================================================================
// Command-Line Binary
// =============================================================================

/// Test the render command writing product and record files
///
/// Purpose: Validate argument handling, file output and the record export
/// Benefit: Ensures the binary's contract with downstream consumers holds
#[test]
fn test_cli_render_to_files() {
    let temp_dir = TempDir::new().unwrap();
    let bundle = temp_dir.path().join("bundle.json");
    let config = temp_dir.path().join("formatter.toml");
    let product = temp_dir.path().join("product.txt");
    let records = temp_dir.path().join("records.json");
    std::fs::write(&bundle, DEMO_BUNDLE).unwrap();
    std::fs::write(&config, DEMO_CONFIG).unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_climate-formatter"))
        .arg("render")
        .arg("--bundle")
        .arg(&bundle)
        .arg("--config")
        .arg(&config)
        .arg("--output")
        .arg(&product)
        .arg("--records")
        .arg(&records)
        .arg("--quiet")
        .status()
        .expect("binary runs");
    assert!(status.success());

    let text = std::fs::read_to_string(&product).unwrap();
    assert!(text.starts_with("...THE BOSTON CLIMATE SUMMARY"));

    let events: Vec<RecordEvent> =
        serde_json::from_str(&std::fs::read_to_string(&records).unwrap()).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].station_id, "KBOS");
    assert_eq!(events[0].element, Element::MaximumTemperature);
}

/// Test the render command reporting a bad bundle
///
/// Purpose: Validate the error path of the binary
/// Benefit: Ensures failures surface as a non-zero exit and a readable message
#[test]
fn test_cli_render_invalid_bundle_fails() {
    let temp_dir = TempDir::new().unwrap();
    let bundle = temp_dir.path().join("bundle.json");
    std::fs::write(&bundle, r#"{"report_date": {"year": 2024, "month": 2, "day": 30}}"#).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_climate-formatter"))
        .arg("render")
        .arg("--bundle")
        .arg(&bundle)
        .output()
        .expect("binary runs");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("Invalid date"));
}

/// Test the binary without a subcommand
///
/// Purpose: Validate the help fallback
/// Benefit: Ensures a bare invocation is friendly rather than an error
#[test]
fn test_cli_without_subcommand_shows_commands() {
    let output = Command::new(env!("CARGO_BIN_EXE_climate-formatter"))
        .output()
        .expect("binary runs");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("render"));
    assert!(stdout.contains("layout"));
}

// =============================================================================
// Layout Properties
// =============================================================================

proptest! {
    /// Every table line of a daily product is exactly 80 characters wide
    #[test]
    fn prop_daily_lines_have_fixed_width(
        max in -40i32..=125,
        min in -60i32..=90,
        normal in -10i32..=100,
        record in -20i32..=130,
    ) {
        let bundle = single_station(max as f64, min as f64, normal as f64, record as f64);
        let output = ProductAssembler::new(FormatterConfig::default())
            .unwrap()
            .render(&bundle)
            .unwrap();

        for line in output.text.lines().filter(|line| !is_free_text(line)) {
            prop_assert_eq!(line.len(), 80, "line {:?}", line);
        }
    }

    /// Rendering the same bundle twice gives identical output
    #[test]
    fn prop_rendering_is_deterministic(max in -40i32..=125, record in -20i32..=130) {
        let bundle = single_station(max as f64, 30.0, 50.0, record as f64);
        let assembler = ProductAssembler::new(FormatterConfig::default()).unwrap();

        let first = assembler.render(&bundle).unwrap();
        let second = assembler.render(&bundle).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Observed values end at the right edge of the value column
    #[test]
    fn prop_values_are_right_aligned(max in -40i32..=125) {
        let bundle = single_station(max as f64, 20.0, 50.0, 200.0);
        let output = ProductAssembler::new(FormatterConfig::default())
            .unwrap()
            .render(&bundle)
            .unwrap();

        let line = output
            .text
            .lines()
            .find(|line| line.starts_with("  Maximum"))
            .unwrap();
        prop_assert_eq!(line[20..29].trim_start(), max.to_string());
        prop_assert_ne!(&line[28..29], " ");
        prop_assert_eq!(&line[29..30], " ");
    }

    /// A record marker appears exactly when the record is tied or broken
    #[test]
    fn prop_marker_follows_record_outcome(max in 40i32..=110, record in 40i32..=110) {
        let bundle = single_station(max as f64, 20.0, 50.0, record as f64);
        let output = ProductAssembler::new(FormatterConfig::default())
            .unwrap()
            .render(&bundle)
            .unwrap();

        let line = output
            .text
            .lines()
            .find(|line| line.starts_with("  Maximum"))
            .unwrap();
        prop_assert_eq!(&line[29..30] == "*", max >= record);
        prop_assert_eq!(output.events.len(), usize::from(max >= record));
    }

    /// Missing and not-applicable take precedence over precision
    #[test]
    fn prop_sentinels_ignore_precision(choice in 0usize..3) {
        let precision = [Precision::Integer, Precision::OneDecimal, Precision::TwoDecimal][choice];

        let missing = format(ObservationValue::Missing, precision);
        prop_assert_eq!(missing.as_str(), "MM");
        prop_assert!(format(ObservationValue::NotApplicable, precision).is_blank());
    }

    /// Lower-is-record classification mirrors higher-is-record
    #[test]
    fn prop_record_direction_is_symmetric(observed in -50i32..=120, record in -50i32..=120) {
        let higher = classify(
            ObservationValue::Present(observed as f64),
            ObservationValue::Present(record as f64),
            Direction::HigherIsRecord,
            0.0,
        );
        let lower = classify(
            ObservationValue::Present(-observed as f64),
            ObservationValue::Present(-record as f64),
            Direction::LowerIsRecord,
            0.0,
        );
        prop_assert_eq!(higher, lower);
    }

    /// A trace beats a zero record and loses to any measurable one
    #[test]
    fn prop_trace_sits_between_zero_and_measurable(record in 0.01f64..10.0) {
        let against_zero = classify(
            ObservationValue::Trace,
            ObservationValue::Present(0.0),
            Direction::HigherIsRecord,
            0.0,
        );
        let against_amount = classify(
            ObservationValue::Trace,
            ObservationValue::Present(record),
            Direction::HigherIsRecord,
            0.0,
        );
        prop_assert_eq!(against_zero, RecordOutcome::Broken);
        prop_assert_eq!(against_amount, RecordOutcome::NoRecord);
    }

    /// Wrapped lines fit the width and keep every word in order
    #[test]
    fn prop_wrapping_fits_and_keeps_words(
        words in prop::collection::vec("[a-z]{1,10}", 1..40),
        width in 20usize..=80,
    ) {
        let text = words.join(" ");
        let wrapped = insert_new_lines(&text, width);

        prop_assert!(wrapped.lines().all(|line| line.chars().count() <= width));
        prop_assert_eq!(wrapped.replace('\n', " "), text);
    }
}

/// Test a time of occurrence in the daily table
///
/// Purpose: Validate that clock times from the bundle reach the time column
/// Benefit: Ensures the 12-hour rendering matches the wire format
#[test]
fn test_time_of_occurrence_column() {
    let station = StationBundle::new("KTST", "Testville").with_row(
        ElementRow::new(Element::MaximumTemperature, RowSpan::Day)
            .with_actual(64.0)
            .with_time(ClockTime::new(0, 5).unwrap()),
    );
    let bundle = ProductBundle::new(report_date()).with_station(station);
    let output = ProductAssembler::new(FormatterConfig::default())
        .unwrap()
        .render(&bundle)
        .unwrap();

    let line = output
        .text
        .lines()
        .find(|line| line.starts_with("  Maximum"))
        .unwrap();
    assert_eq!(line[30..39].trim(), "12:05 AM");
}
