// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Site generation — JSON document + template → `<out_dir>/*.html`.
//!
//! 1. Load the document and the product template (missing input aborts here)
//! 2. Validate every product id (an invalid id aborts before any write)
//! 3. Write one page per product
//! 4. Group, sort and write `index.html`

use crate::collate::KoreanCollator;
use crate::config::{CatalogConfig, InvalidIdPolicy};
use crate::error::{CatalogError, Result, must_read};
use crate::format::normalize_id;
use crate::group::{CatalogItem, group_by_category};
use crate::index::build_index;
use crate::model::{CatalogDocument, Product, load_document};
use crate::page::render_product_page;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// File name of the catalog index inside the output directory.
pub const INDEX_FILE: &str = "index.html";

/// Outcome of a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// Product pages written
    pub pages: usize,
    /// Products left out under the `skip` id policy
    pub skipped: usize,
    /// Path of the generated index
    pub index_path: PathBuf,
}

/// Load inputs from disk and generate the site.
pub fn build_site(
    data: &Path,
    template: &Path,
    out_dir: &Path,
    config: &CatalogConfig,
) -> Result<BuildSummary> {
    let doc = load_document(data)?;
    if doc.products.is_empty() {
        let data_display = data.display().to_string();
        diagnostics::log_info!("No products found in {path}", path: data_display);
    }
    let template = must_read(template)?;
    generate_site(&doc, &template, out_dir, config)
}

/// Generate product pages and the index from an in-memory document.
pub fn generate_site(
    doc: &CatalogDocument,
    template: &str,
    out_dir: &Path,
    config: &CatalogConfig,
) -> Result<BuildSummary> {
    let slugs = validate_ids(&doc.products, config.render.invalid_ids)?;
    let collator = KoreanCollator::new()?;
    let site = doc.site.with_defaults(&config.site);

    let items: Vec<CatalogItem<'_>> = doc
        .products
        .iter()
        .zip(&slugs)
        .filter_map(|(product, slug)| {
            slug.as_deref().map(|slug| CatalogItem { slug, product })
        })
        .collect();
    warn_on_collisions(&items);

    std::fs::create_dir_all(out_dir).map_err(|e| CatalogError::io(out_dir, e))?;

    for item in &items {
        let html = render_product_page(template, item.product, &site, &config.render);
        let path = out_dir.join(format!("{}.html", item.slug));
        std::fs::write(&path, html.as_bytes()).map_err(|e| CatalogError::io(&path, e))?;
        let path_display = path.display().to_string();
        diagnostics::log_debug!("wrote {path}", path: path_display);
    }

    let groups = group_by_category(&items, &config.render.default_category, &collator);
    let index_html = build_index(&groups, &config.index, &config.render);
    let index_path = out_dir.join(INDEX_FILE);
    std::fs::write(&index_path, index_html.as_bytes())
        .map_err(|e| CatalogError::io(&index_path, e))?;

    let summary = BuildSummary {
        pages: items.len(),
        skipped: doc.products.len() - items.len(),
        index_path,
    };
    let index_display = summary.index_path.display().to_string();
    diagnostics::log_info!(
        "Generated {count} product pages + {index}",
        count: summary.pages,
        index: index_display
    );
    Ok(summary)
}

/// Normalize every id up front.
///
/// An id that fails normalization, or that would overwrite `index.html`, is
/// rejected. Under `Abort` the first rejection fails the run; under `Skip` it
/// maps to `None` and the product is left out.
fn validate_ids(products: &[Product], policy: InvalidIdPolicy) -> Result<Vec<Option<String>>> {
    products
        .iter()
        .map(|product| match accept_id(&product.id) {
            Ok(slug) => Ok(Some(slug)),
            Err(err) if policy == InvalidIdPolicy::Skip => {
                let message = err.to_string();
                diagnostics::log_warn!("Skipping product: {message}", message: message);
                Ok(None)
            }
            Err(err) => Err(err),
        })
        .collect()
}

fn accept_id(raw: &str) -> Result<String> {
    let slug = normalize_id(raw)?;
    if slug == INDEX_FILE.trim_end_matches(".html") {
        return Err(CatalogError::ReservedIdentifier { id: raw.to_string() });
    }
    Ok(slug)
}

/// Two products with one slug share a page file; the later one wins.
fn warn_on_collisions(items: &[CatalogItem<'_>]) {
    let mut seen = BTreeSet::new();
    for item in items {
        if !seen.insert(item.slug) {
            diagnostics::log_warn!(
                "Duplicate product id {id}: page will be overwritten",
                id: item.slug
            );
        }
    }
}
