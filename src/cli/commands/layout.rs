//! Layout command implementation
//!
//! Prints the column set and table header a configuration produces, which is
//! the quickest way to check how enabling or disabling sub-fields moves the
//! columns.

use super::shared::{load_configuration, setup_logging};
use crate::app::services::column_layout::{ColumnSet, header_lines, separator_line};
use crate::app::services::product_assembler::ProductAssembler;
use crate::cli::args::LayoutArgs;
use anyhow::{Context, Result};
use colored::*;
use tracing::debug;

/// Layout command runner
pub fn run_layout(args: LayoutArgs) -> Result<ColumnSet> {
    setup_logging(args.get_log_level());
    debug!("Command line arguments: {:?}", args);

    let mut config = load_configuration(args.config_file.as_deref())?;
    if let Some(family) = args.family {
        config.product.report = family.report();
    }

    let assembler = ProductAssembler::new(config).context("Failed to compute column layout")?;
    let columns = assembler.columns().clone();

    for line in describe_columns(&columns) {
        println!("{}", line);
    }
    println!();
    for line in layout_preview(&columns)? {
        println!("{}", line);
    }

    Ok(columns)
}

/// One line per column: name, offsets and width
fn describe_columns(columns: &ColumnSet) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {:?} table, {} columns wide",
        "Layout:".bright_green().bold(),
        columns.family(),
        columns.line_width()
    )];
    let label = columns.label_span();
    lines.push(format!(
        "   {:<14} {:>5} {:>5} {:>5}",
        "label",
        label.start,
        label.end,
        label.width()
    ));
    for column in columns.columns() {
        lines.push(format!(
            "   {:<14} {:>5} {:>5} {:>5}",
            column.name.key().bright_cyan(),
            column.start,
            column.end(),
            column.width
        ));
    }
    lines
}

/// Header and separator as they appear in the product
fn layout_preview(columns: &ColumnSet) -> Result<Vec<String>> {
    let mut lines = header_lines(columns).context("Failed to render table header")?;
    lines.push(separator_line(columns).context("Failed to render separator")?);
    Ok(lines)
}
