//! Command implementations for the climate formatter CLI
//!
//! Each command is implemented in its own module; helpers used by more than
//! one command live in `shared`.

pub mod layout;
pub mod render;
pub mod shared;

pub use shared::RenderStats;

use crate::cli::args::{Args, Commands};
use anyhow::Result;

/// Main command runner
///
/// Dispatches to the subcommand handler:
/// - `render`: render a product from a statistics bundle
/// - `layout`: print the computed column layout
///
/// Returns `Ok(None)` when no subcommand was given.
pub fn run(args: Args) -> Result<Option<RenderStats>> {
    match args.get_command() {
        Some(Commands::Render(render_args)) => render::run_render(render_args).map(Some),
        Some(Commands::Layout(layout_args)) => {
            layout::run_layout(layout_args)?;
            Ok(None)
        }
        None => Ok(None),
    }
}
