//! Shared components for CLI commands
//!
//! Logging setup, configuration loading and output writing used by more
//! than one command.

use crate::app::models::{RecordEvent, RecordOutcome};
use crate::config::FormatterConfig;
use anyhow::{Context, Result};
use colored::*;
use std::path::Path;
use tracing::{debug, info};

/// Summary of one render run, reported on stderr
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub stations_rendered: usize,
    /// Configured stations absent from the bundle
    pub stations_skipped: Vec<String>,
    pub records_set: usize,
    pub records_tied: usize,
    /// Lines in the finished product
    pub lines_written: usize,
}

impl RenderStats {
    /// Tally record events by outcome
    pub fn with_events(mut self, events: &[RecordEvent]) -> Self {
        self.records_tied = events
            .iter()
            .filter(|event| event.outcome == RecordOutcome::Tied)
            .count();
        self.records_set = events.len() - self.records_tied;
        self
    }

    pub fn total_records(&self) -> usize {
        self.records_set + self.records_tied
    }
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the level chosen by the verbosity flags.
/// Logging goes to stderr so a product written to stdout stays clean.
pub fn setup_logging(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("climate_formatter={}", log_level)));

    // Ignored when a subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Load configuration from an explicit file, the default location, or defaults
pub fn load_configuration(config_file: Option<&Path>) -> Result<FormatterConfig> {
    match config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => info!("No config file given, checking the default location"),
    }

    FormatterConfig::load_or_default(config_file).context("Failed to load configuration")
}

/// Write the product to a file, or to stdout when no file is given
pub fn write_product(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("Failed to write product to {}", path.display()))?;
            info!("Product written to {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}

/// Write record events as a pretty-printed JSON array
pub fn write_records(events: &[RecordEvent], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(events).context("Failed to serialize record events")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write record events to {}", path.display()))?;
    info!("{} record events written to {}", events.len(), path.display());
    Ok(())
}

/// Print a coloured run summary to stderr
pub fn report_summary(stats: &RenderStats) {
    eprintln!();
    eprintln!("{}", "Climate product rendered".bright_green().bold());
    eprintln!(
        "   Stations rendered: {}",
        stats.stations_rendered.to_string().bright_cyan()
    );
    if !stats.stations_skipped.is_empty() {
        eprintln!(
            "   {} {}",
            "Stations skipped:".yellow(),
            stats.stations_skipped.join(", ").yellow()
        );
    }
    if stats.total_records() > 0 {
        eprintln!(
            "   Records: {} set, {} tied",
            stats.records_set.to_string().bright_red().bold(),
            stats.records_tied.to_string().bright_yellow()
        );
    } else {
        eprintln!("   Records: {}", "none".bright_black());
    }
    eprintln!("   Lines written: {}", stats.lines_written);
}
