//! CLI application for cleaning and scanning SARS tariff-schedule dumps.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{clean, config, scan};

/// Clean and scan tariff-schedule tables extracted from the SARS tariff book
#[derive(Parser)]
#[command(name = "tariffbook")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean a raw table dump into structured records
    Clean(clean::CleanArgs),

    /// Scan cleaned records for compound duty-rate phrasing
    Scan(scan::ScanArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Clean(args) => clean::run(args, cli.config.as_deref()),
        Commands::Scan(args) => scan::run(args),
        Commands::Config(args) => config::run(args, cli.config.as_deref()),
    }
}
