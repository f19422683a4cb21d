//! quakekeys CLI - Command-line interface
//!
//! Runs earthquake keys lookups over location files and manages the
//! configuration file.

mod commands;
mod error;
mod runner;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::lookup::LookupArgs;

#[derive(Parser)]
#[command(name = "quakekeys")]
#[command(version = quakekeys::VERSION)]
#[command(about = "Resolve exposure locations to area-peril and vulnerability keys", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up keys for every location in a CSV file
    Lookup(LookupArgs),

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Lookup(args) => commands::lookup::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        e.exit();
    }
}
