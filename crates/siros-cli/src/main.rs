mod commands;
mod config;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "siros")]
#[command(about = "Backup Harvest time entries to CSV", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Backup time entries from Harvest to a CSV
    Backup {
        /// Output file to write to (falls back to HARVEST_CSV_OUTPUT_FILE, then data.csv)
        file: Option<PathBuf>,
        /// Lower bound of the export range, YYYY-MM-DD (default: 2010-01-01)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Write the minimal column set instead of the full one
        #[arg(long)]
        minimal: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Backup {
            file,
            from,
            minimal,
        } => commands::backup::backup_command(file, from, minimal).await,
    }
}
