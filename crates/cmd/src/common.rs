use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use catalog::CatalogConfig;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "catalog.yaml";

/// Load configuration: an explicit path must exist, the implicit
/// `catalog.yaml` is optional, and with neither the built-in defaults apply.
pub fn load_config(explicit: Option<&Path>) -> Result<CatalogConfig> {
    if let Some(path) = explicit {
        return CatalogConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }

    let implicit = Path::new(DEFAULT_CONFIG_FILE);
    if implicit.exists() {
        let config = CatalogConfig::load(implicit)
            .with_context(|| format!("Failed to load config {}", implicit.display()))?;
        let path_display = implicit.display().to_string();
        diagnostics::log_debug!("Loaded config {path}", path: path_display);
        return Ok(config);
    }

    Ok(CatalogConfig::default())
}

/// Command-line value if given, else the configured one.
pub fn resolve_path(override_path: Option<&Path>, configured: &Path) -> PathBuf {
    override_path.unwrap_or(configured).to_path_buf()
}
