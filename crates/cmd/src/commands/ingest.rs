use std::path::PathBuf;

use anyhow::{Context, Result};
use catalog::CatalogConfig;
use clap::Args;

use crate::common::resolve_path;

/// Arguments of `catalog ingest`; unset values come from the config.
#[derive(Args, Debug, Clone, Default)]
pub struct IngestArgs {
    /// Spreadsheet to read (.xlsx, .xls, .ods)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// JSON document to write
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Sheet holding the product rows
    #[arg(long)]
    pub sheet: Option<String>,
}

/// Convert the spreadsheet; returns the number of products written.
pub fn ingest_command(config: &CatalogConfig, args: &IngestArgs) -> Result<usize> {
    let input = resolve_path(args.input.as_deref(), &config.paths.spreadsheet);
    let output = resolve_path(args.output.as_deref(), &config.paths.data);
    let sheet = args.sheet.as_deref().unwrap_or(&config.paths.sheet);

    catalog::ingest::convert(&input, sheet, &output, &config.site)
        .with_context(|| format!("Failed to convert {}", input.display()))
}
