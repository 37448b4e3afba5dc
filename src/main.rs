use clap::Parser;
use climate_formatter::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Climate Formatter - Climate Bulletin Renderer");
    println!("=============================================");
    println!();
    println!("Render pre-computed climate station statistics into the tabular wire");
    println!("bulletin (NWWS) or the narrative voice-script bulletin (NWR).");
    println!();
    println!("USAGE:");
    println!("    climate-formatter <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    render      Render a climate bulletin from a statistics bundle");
    println!("    layout      Show the column layout computed from a configuration");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Render the morning tabular product to stdout:");
    println!("    climate-formatter render --bundle stats.json");
    println!();
    println!("    # Render a monthly voice script and export record events:");
    println!("    climate-formatter render --bundle stats.json --product nwr --report monthly \\");
    println!("                             --output product.txt --records records.json");
    println!();
    println!("    # Inspect the columns a configuration produces:");
    println!("    climate-formatter layout --config formatter.toml --family period");
    println!();
    println!("For detailed help on any command, use:");
    println!("    climate-formatter <COMMAND> --help");
}
