// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Spreadsheet ingestion — `products` sheet → catalog JSON document.
//!
//! The first row holds column names (`id`, `category`, `brand`, ...). Columns
//! are matched by name, so their order in the sheet does not matter and extra
//! columns are ignored. No validation happens here beyond trimming ids; the
//! renderer owns the id rules.

use crate::config::SiteDefaults;
use crate::error::{CatalogError, Result};
use crate::model::{CatalogDocument, Price, Product, Site, write_document};
use calamine::{Data, Range, Reader, open_workbook_auto};
use std::path::Path;

/// Sheet read when none is configured.
pub const DEFAULT_SHEET: &str = "products";

/// A recognized spreadsheet column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Id,
    Category,
    Brand,
    Series,
    Code,
    Spec,
    Unit,
    Price,
    Usage,
    Note,
    Image,
}

impl Column {
    fn from_header(name: &str) -> Option<Self> {
        let column = match name.trim().to_lowercase().as_str() {
            "id" => Column::Id,
            "category" => Column::Category,
            "brand" => Column::Brand,
            "series" => Column::Series,
            "code" => Column::Code,
            "spec" => Column::Spec,
            "unit" => Column::Unit,
            "price" => Column::Price,
            "usage" => Column::Usage,
            "note" => Column::Note,
            "image" => Column::Image,
            _ => return None,
        };
        Some(column)
    }
}

/// Read a workbook into a catalog document.
///
/// `site` becomes the document's `site` record.
pub fn ingest(input: &Path, sheet: &str, site: &SiteDefaults) -> Result<CatalogDocument> {
    if !input.exists() {
        return Err(CatalogError::missing_input(input));
    }

    let mut workbook =
        open_workbook_auto(input).map_err(|e| CatalogError::Spreadsheet(e.to_string()))?;

    let available = workbook.sheet_names();
    if !available.iter().any(|name| name == sheet) {
        return Err(CatalogError::MissingSheet {
            sheet: sheet.to_string(),
            available,
        });
    }

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| CatalogError::Spreadsheet(e.to_string()))?;

    Ok(CatalogDocument {
        site: Site::from(site),
        products: products_from_range(&range),
    })
}

/// Ingest `input` and write the JSON document to `output`.
///
/// Returns the number of products written.
pub fn convert(input: &Path, sheet: &str, output: &Path, site: &SiteDefaults) -> Result<usize> {
    let doc = ingest(input, sheet, site)?;
    write_document(output, &doc)?;

    let count = doc.products.len();
    let output_display = output.display().to_string();
    diagnostics::log_info!(
        "Converted {count} products → {output}",
        count: count,
        output: output_display
    );
    Ok(count)
}

/// Map sheet rows to products using the header row.
pub fn products_from_range(range: &Range<Data>) -> Vec<Product> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Vec::new();
    };
    let columns: Vec<Option<Column>> = header
        .iter()
        .map(|cell| Column::from_header(&cell_text(cell)))
        .collect();

    rows.filter(|row| row.iter().any(|cell| !cell_text(cell).trim().is_empty()))
        .map(|row| product_from_row(row, &columns))
        .collect()
}

fn product_from_row(row: &[Data], columns: &[Option<Column>]) -> Product {
    let mut product = Product::default();
    for (cell, column) in row.iter().zip(columns) {
        let Some(column) = column else {
            continue;
        };
        let field = match column {
            Column::Price => {
                product.price = price_from_cell(cell);
                continue;
            }
            Column::Id => {
                product.id = cell_text(cell).trim().to_string();
                continue;
            }
            Column::Category => &mut product.category,
            Column::Brand => &mut product.brand,
            Column::Series => &mut product.series,
            Column::Code => &mut product.code,
            Column::Spec => &mut product.spec,
            Column::Unit => &mut product.unit,
            Column::Usage => &mut product.usage,
            Column::Note => &mut product.note,
            Column::Image => &mut product.image,
        };
        *field = cell_text(cell);
    }
    product
}

/// Cell as displayed text; whole floats lose their `.0`.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Numeric cells and numeric text become amounts; everything else is missing.
fn price_from_cell(cell: &Data) -> Price {
    let amount = match cell {
        Data::Int(i) => Some(*i as f64),
        Data::Float(f) => Some(*f),
        Data::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match amount {
        Some(n) if n.is_finite() => Price::Amount(n),
        _ => Price::Missing,
    }
}
