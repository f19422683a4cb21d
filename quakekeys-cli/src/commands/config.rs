//! Configuration management CLI commands.
//!
//! Provides `config path`, `config show`, and `config init`.

use std::path::PathBuf;

use clap::Subcommand;
use quakekeys::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Print the effective configuration (defaults overlaid with the file)
    Show {
        /// Configuration file to read instead of the default
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
    },

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => run_path(),
        ConfigCommands::Show { config } => run_show(config),
        ConfigCommands::Init { force } => run_init(force),
    }
}

/// Show the configuration file path.
fn run_path() -> Result<(), CliError> {
    println!("{}", config_file_path().display());
    Ok(())
}

/// Print the effective configuration.
fn run_show(path: Option<PathBuf>) -> Result<(), CliError> {
    let path = path.unwrap_or_else(config_file_path);
    let config = ConfigFile::load_from(&path)?;

    if path.exists() {
        println!("; {}", path.display());
    } else {
        println!("; {} not found, showing defaults", path.display());
    }
    print!("{}", config.to_ini_string());
    Ok(())
}

/// Create the configuration file.
fn run_init(force: bool) -> Result<(), CliError> {
    let path = if force {
        let path = config_file_path();
        ConfigFile::default().save_to(&path)?;
        path
    } else {
        let path = config_file_path();
        if path.exists() {
            return Err(CliError::FileExists(path));
        }
        ConfigFile::ensure_exists()?
    };

    println!("Wrote default configuration to {}", path.display());
    Ok(())
}
