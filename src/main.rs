use clap::Parser;
use playerkit::cli::{args::Args, commands};
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
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Playerkit - Fantasy Baseball Record Extractor");
    println!("=============================================");
    println!();
    println!("Extract normalized player records from saved ESPN player-rater pages");
    println!("and write them as JSON for downstream storage or analysis.");
    println!();
    println!("USAGE:");
    println!("    playerkit <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process       Extract player records from saved rater pages (main command)");
    println!("    categories    List the canonical stat vocabulary");
    println!("    help          Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Extract in-season records from one saved page:");
    println!("    playerkit process --input rater.html --output players.json");
    println!();
    println!("    # Extract preseason projections from a directory of pages:");
    println!("    playerkit process --input pages/ --mode projection --pretty");
    println!();
    println!("    # List the canonical stat codes:");
    println!("    playerkit categories");
    println!();
    println!("For detailed help on any command, use:");
    println!("    playerkit <COMMAND> --help");
}
