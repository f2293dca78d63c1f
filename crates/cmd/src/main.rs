use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cmd::commands::{BuildArgs, IngestArgs, build_command, ingest_command};
use cmd::common::load_config;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "catalog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// YAML config file (default: ./catalog.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the product spreadsheet into the catalog JSON document
    Ingest(IngestArgs),
    /// Render product pages and the catalog index from the JSON document
    Build(BuildArgs),
}

fn main() -> Result<()> {
    diagnostics::init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Ingest(args) => ingest_command(&config, args).map(|_| ()),
        Commands::Build(args) => build_command(&config, args).map(|_| ()),
    }
}
