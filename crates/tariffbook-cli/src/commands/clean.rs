//! Clean command - normalize a raw table dump into structured records.

use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::{debug, info};

use tariffbook_core::io::{read_raw_rows, records_to_json, write_records};
use tariffbook_core::{ScheduleConfig, assemble};

/// Arguments for the clean command.
#[derive(Args)]
pub struct CleanArgs {
    /// Raw table dump (JSON array of arrays of strings)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Expected table width in columns (overrides config)
    #[arg(long)]
    columns: Option<usize>,
}

pub fn run(args: CleanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    // Load configuration
    let mut config = if let Some(path) = config_path {
        ScheduleConfig::from_file(Path::new(path))?
    } else {
        ScheduleConfig::default()
    };
    if let Some(columns) = args.columns {
        config.expected_columns = columns;
    }

    // Check input file exists
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Cleaning raw rows from {}", args.input.display());

    let rows = read_raw_rows(&args.input)?;
    debug!("Read {} raw rows", rows.len());

    let records = assemble(&rows, &config)?;

    // Write output
    if let Some(output_path) = &args.output {
        write_records(output_path, &records)?;
        println!(
            "{} Cleaned data saved to {} with {} entries",
            style("✓").green(),
            output_path.display(),
            records.len()
        );
    } else {
        println!("{}", records_to_json(&records)?);
    }

    Ok(())
}
