//! Render command implementation
//!
//! Loads the configuration and statistics bundle, renders the product, and
//! writes the product text and record events.

use super::shared::{
    RenderStats, load_configuration, report_summary, setup_logging, write_product, write_records,
};
use crate::app::models::ProductBundle;
use crate::app::services::product_assembler::ProductAssembler;
use crate::cli::args::RenderArgs;
use crate::config::FormatterConfig;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Render command runner
///
/// 1. Set up logging and load configuration
/// 2. Apply command-line overrides
/// 3. Parse the bundle and render the product
/// 4. Write the product, the record events and a summary
pub fn run_render(args: RenderArgs) -> Result<RenderStats> {
    setup_logging(args.get_log_level());
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let mut config = load_configuration(args.config_file.as_deref())?;
    apply_cli_overrides(&mut config, &args);
    info!(
        "Rendering {:?} {:?} product",
        config.product.product, config.product.report
    );

    let bundle = ProductBundle::from_path(&args.bundle)
        .with_context(|| format!("Failed to load bundle {}", args.bundle.display()))?;

    let assembler = ProductAssembler::new(config).context("Failed to compute column layout")?;
    let output = assembler.render(&bundle).context("Failed to render product")?;

    write_product(&output.text, args.output.as_deref())?;
    if let Some(records) = &args.records {
        write_records(&output.events, records)?;
    }

    let stats = RenderStats {
        stations_rendered: output.stations_rendered,
        stations_skipped: output.stations_skipped.clone(),
        lines_written: output.text.lines().count(),
        ..Default::default()
    }
    .with_events(&output.events);

    if !args.quiet {
        report_summary(&stats);
    }

    Ok(stats)
}

/// Apply command-line overrides to the loaded configuration
pub fn apply_cli_overrides(config: &mut FormatterConfig, args: &RenderArgs) {
    if let Some(product) = args.product {
        config.product.product = product.into();
    }
    if let Some(report) = args.report {
        config.product.report = report.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{ProductArg, ReportArg};
    use crate::config::{ProductKind, ReportKind};
    use std::path::PathBuf;
    use tempfile::TempDir;

    const BUNDLE: &str = r#"{
        "report_date": {"year": 2024, "month": 3, "day": 20},
        "stations": [{
            "station_id": "KBOS",
            "name": "Boston",
            "rows": [{
                "element": "maximum_temperature",
                "span": "day",
                "actual": 78,
                "time": "15:52",
                "normal": 52,
                "record": 76,
                "record_years": [1998]
            }]
        }]
    }"#;

    fn args(dir: &TempDir) -> RenderArgs {
        let bundle = dir.path().join("bundle.json");
        std::fs::write(&bundle, BUNDLE).unwrap();
        RenderArgs {
            bundle,
            config_file: None,
            output: Some(dir.path().join("product.txt")),
            records: Some(dir.path().join("records.json")),
            product: None,
            report: None,
            verbose: 0,
            quiet: true,
        }
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = FormatterConfig::default();
        let mut render = args(&TempDir::new().unwrap());
        render.product = Some(ProductArg::Nwr);
        render.report = Some(ReportArg::Evening);

        apply_cli_overrides(&mut config, &render);
        assert_eq!(config.product.product, ProductKind::Nwr);
        assert_eq!(config.product.report, ReportKind::Evening);
    }

    #[test]
    fn test_run_render_writes_product_and_records() {
        let dir = TempDir::new().unwrap();
        let render = args(&dir);
        let config = dir.path().join("formatter.toml");
        std::fs::write(&config, "[product]\ninclude_footnote = false\n").unwrap();
        let render = RenderArgs {
            config_file: Some(config),
            ..render
        };

        let stats = run_render(render).unwrap();
        assert_eq!(stats.stations_rendered, 1);
        assert_eq!(stats.records_set, 1);

        let product = std::fs::read_to_string(dir.path().join("product.txt")).unwrap();
        assert!(product.starts_with("...The Boston climate summary for March 20 2024..."));
        assert!(product.contains("78*"));

        let records = std::fs::read_to_string(dir.path().join("records.json")).unwrap();
        assert!(records.contains("\"KBOS\""));
        assert!(records.contains("\"broken\""));
    }

    #[test]
    fn test_run_render_rejects_missing_bundle() {
        let dir = TempDir::new().unwrap();
        let render = RenderArgs {
            bundle: PathBuf::from("/nonexistent/bundle.json"),
            ..args(&dir)
        };
        assert!(run_render(render).is_err());
    }
}
