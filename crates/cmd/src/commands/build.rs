use std::path::PathBuf;

use anyhow::{Context, Result};
use catalog::{BuildSummary, CatalogConfig};
use clap::Args;

use crate::common::resolve_path;

/// Arguments of `catalog build`; unset values come from the config.
#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Catalog JSON document
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Product page template with {{KEY}} placeholders
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Output directory for product pages and index.html
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn build_command(config: &CatalogConfig, args: &BuildArgs) -> Result<BuildSummary> {
    let data = resolve_path(args.data.as_deref(), &config.paths.data);
    let template = resolve_path(args.template.as_deref(), &config.paths.template);
    let out_dir = resolve_path(args.out.as_deref(), &config.paths.out_dir);

    catalog::build_site(&data, &template, &out_dir, config)
        .with_context(|| format!("Failed to build catalog from {}", data.display()))
}
