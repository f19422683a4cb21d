//! Keys lookup command.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::error::CliError;
use crate::runner::CliRunner;
use quakekeys::keys::KeysWriter;
use quakekeys::location::LocationReader;
use quakekeys::lookup::KeysLookup;

/// Arguments for `quakekeys lookup`.
#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Location CSV file (one row per exposure location)
    #[arg(long, short = 'l')]
    pub locations: PathBuf,

    /// Output file for successful keys
    #[arg(long, short = 'k')]
    pub keys: PathBuf,

    /// Output file for nomatch/fail records (dropped when omitted)
    #[arg(long, short = 'e')]
    pub errors: Option<PathBuf>,

    /// Directory holding the area-peril and vulnerability dictionaries
    /// (overrides [keys_data] directory)
    #[arg(long)]
    pub keys_data: Option<PathBuf>,

    /// Configuration file (default: ~/.quakekeys/config.ini)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Run the lookup command.
pub fn run(args: LookupArgs) -> Result<(), CliError> {
    let runner = CliRunner::with_options(args.config.as_deref(), args.debug)?;
    runner.log_startup("lookup");

    let mut settings = runner.config().lookup_settings();
    if let Some(dir) = args.keys_data {
        settings.keys_data_directory = Some(dir);
    }

    let lookup = runner.create_lookup(&settings)?;
    let locations = LocationReader::from_path(&args.locations)?;
    let mut writer = KeysWriter::from_paths(&args.keys, args.errors.as_deref())?;

    info!(locations = %args.locations.display(), "Processing locations");
    let mut stream = lookup.process(locations);
    writer.write_all(stream.by_ref())?;
    let batch = stream.summary();
    let summary = writer.finish()?;

    info!(
        success = batch.success,
        nomatch = batch.no_match,
        fail = batch.fail,
        "Batch complete"
    );

    println!("Keys lookup complete ({})", lookup.model());
    println!("  Locations:  {}", batch.total());
    println!("  Successful: {} -> {}", summary.successful, args.keys.display());
    match &args.errors {
        Some(path) => println!(
            "  Non-successful: {} -> {} ({} nomatch, {} fail)",
            summary.nonsuccessful,
            path.display(),
            batch.no_match,
            batch.fail
        ),
        None => println!(
            "  Non-successful: {} ({} nomatch, {} fail)",
            summary.nonsuccessful, batch.no_match, batch.fail
        ),
    }

    Ok(())
}
