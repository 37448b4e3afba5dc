//! Command-line argument definitions for the climate formatter
//!
//! This module defines the CLI interface using the clap derive API. Values
//! given on the command line override the matching configuration file keys.

use crate::config::{ProductKind, ReportKind};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the climate bulletin formatter
///
/// Renders pre-computed climate station statistics into tabular wire
/// bulletins or narrative voice scripts.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "climate-formatter",
    version,
    about = "Render climate station statistics into fixed-format climate bulletins",
    long_about = "Renders a JSON bundle of climate station statistics (observed values, normals, \
                  records and last-year values) into either the column-aligned tabular wire \
                  bulletin (NWWS) or the narrative voice-script bulletin (NWR). Record ties and \
                  breaks are marked in the product and can be exported as JSON."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Render a climate bulletin from a statistics bundle
    Render(RenderArgs),
    /// Show the column layout and header computed from a configuration
    Layout(LayoutArgs),
}

/// Arguments for the render command
#[derive(Debug, Clone, Parser)]
pub struct RenderArgs {
    /// Statistics bundle to render
    ///
    /// JSON document holding the report date and the per-station rows of
    /// observed, normal, record and last-year values.
    #[arg(
        short = 'b',
        long = "bundle",
        value_name = "FILE",
        help = "Statistics bundle to render (JSON)"
    )]
    pub bundle: PathBuf,

    /// Path to configuration file
    ///
    /// TOML configuration file with global presentation policy and product
    /// settings. If not specified, looks for
    /// ~/.config/climate-formatter/formatter.toml and falls back to defaults.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Output file for the rendered product
    ///
    /// If not specified, the product is written to stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file for the rendered product"
    )]
    pub output: Option<PathBuf>,

    /// Output file for record events
    ///
    /// Every record tie or break found while rendering is written as a
    /// JSON array for the record bulletin.
    #[arg(
        long = "records",
        value_name = "FILE",
        help = "Write record ties and breaks to a JSON file"
    )]
    pub records: Option<PathBuf>,

    /// Bulletin family, overriding the configuration
    #[arg(long = "product", value_enum, help = "Bulletin family to render")]
    pub product: Option<ProductArg>,

    /// Report type, overriding the configuration
    #[arg(long = "report", value_enum, help = "Report type to render")]
    pub report: Option<ReportArg>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. The rendered product is still written.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the layout command
#[derive(Debug, Clone, Parser)]
pub struct LayoutArgs {
    /// Path to configuration file
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Table family to lay out
    ///
    /// If not specified, the family of the configured report type is used.
    #[arg(long = "family", value_enum, help = "Table family to lay out")]
    pub family: Option<FamilyArg>,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Bulletin family choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProductArg {
    /// Column-aligned wire bulletin
    Nwws,
    /// Narrative voice script
    Nwr,
}

impl From<ProductArg> for ProductKind {
    fn from(value: ProductArg) -> Self {
        match value {
            ProductArg::Nwws => ProductKind::Nwws,
            ProductArg::Nwr => ProductKind::Nwr,
        }
    }
}

/// Report type choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportArg {
    Morning,
    Evening,
    Intermediate,
    Monthly,
    Seasonal,
    Annual,
}

impl From<ReportArg> for ReportKind {
    fn from(value: ReportArg) -> Self {
        match value {
            ReportArg::Morning => ReportKind::Morning,
            ReportArg::Evening => ReportKind::Evening,
            ReportArg::Intermediate => ReportKind::Intermediate,
            ReportArg::Monthly => ReportKind::Monthly,
            ReportArg::Seasonal => ReportKind::Seasonal,
            ReportArg::Annual => ReportKind::Annual,
        }
    }
}

/// Table family choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FamilyArg {
    /// 80-column daily tables
    Daily,
    /// 72-column monthly, seasonal and annual tables
    Period,
}

impl FamilyArg {
    /// A report type whose tables belong to this family
    pub fn report(self) -> ReportKind {
        match self {
            FamilyArg::Daily => ReportKind::Morning,
            FamilyArg::Period => ReportKind::Monthly,
        }
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Option<Commands> {
        self.command.clone()
    }
}

/// Log level selected by the verbosity flags
fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

impl RenderArgs {
    /// Validate the render command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.bundle.is_file() {
            return Err(Error::configuration(format!(
                "Bundle file does not exist: {}",
                self.bundle.display()
            )));
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        for path in [&self.output, &self.records].into_iter().flatten() {
            let missing_parent = path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .filter(|parent| !parent.exists());
            if let Some(parent) = missing_parent {
                return Err(Error::configuration(format!(
                    "Output directory does not exist: {}",
                    parent.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl LayoutArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, false)
    }
}
