//! Scan command - report compound duty-rate phrasing in cleaned records.

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use tariffbook_core::io::read_records;
use tariffbook_core::scan_records;

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Cleaned records file (JSON)
    #[arg(required = true)]
    input: PathBuf,
}

pub fn run(args: ScanArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    println!("Scanning {}...", args.input.display());

    let records = read_records(&args.input)?;
    info!("Read {} records", records.len());

    let matches = scan_records(&records);
    for rate_match in &matches {
        println!("{}", rate_match);
    }

    println!(
        "{} {} matches across {} records",
        style("✓").green(),
        matches.len(),
        records.len()
    );

    Ok(())
}
