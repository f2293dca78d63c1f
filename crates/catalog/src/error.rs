// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

/// Catalog build errors. Every variant is fatal for the current run.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A required input file (JSON, template, spreadsheet, config) is absent
    #[error("Missing file: {}", path.display())]
    MissingInput { path: PathBuf },

    /// A product id does not normalize to `[a-z0-9-]+`
    #[error("Invalid product.id \"{id}\". Use only a-z, 0-9, hyphen (-).")]
    InvalidIdentifier { id: String },

    /// A product id normalizes to the name of the catalog index page
    #[error("Product id \"{id}\" is reserved for the catalog index page.")]
    ReservedIdentifier { id: String },

    /// The catalog document is not valid JSON of the expected shape
    #[error("Malformed JSON in {}: {source}", path.display())]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The workbook has no sheet with the requested name
    #[error("Sheet '{sheet}' not found (available: {})", available.join(", "))]
    MissingSheet {
        sheet: String,
        available: Vec<String>,
    },

    /// The workbook could not be opened or decoded
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    /// The YAML configuration could not be parsed
    #[error("Invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// Collation data for the sort locale could not be loaded
    #[error("Collation error: {0}")]
    Collation(String),

    /// IO error
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    pub fn missing_input<P: AsRef<Path>>(path: P) -> Self {
        CatalogError::MissingInput {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn invalid_identifier<S: Into<String>>(id: S) -> Self {
        CatalogError::InvalidIdentifier { id: id.into() }
    }

    pub fn io<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Read a UTF-8 file, reporting absence as `MissingInput` rather than IO.
pub fn must_read(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CatalogError::missing_input(path));
    }
    std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_identifier_names_the_offending_id() {
        let err = CatalogError::invalid_identifier("Bad Id!");
        assert_eq!(
            err.to_string(),
            "Invalid product.id \"Bad Id!\". Use only a-z, 0-9, hyphen (-)."
        );
    }

    #[test]
    fn reserved_identifier_names_the_offending_id() {
        let err = CatalogError::ReservedIdentifier {
            id: "INDEX".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Product id \"INDEX\" is reserved for the catalog index page."
        );
    }

    #[test]
    fn must_read_reports_missing_input() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("absent.json");
        match must_read(&path) {
            Err(CatalogError::MissingInput { path: p }) => assert_eq!(p, path),
            other => panic!("expected MissingInput, got {:?}", other),
        }
    }

    #[test]
    fn missing_sheet_lists_available_sheets() {
        let err = CatalogError::MissingSheet {
            sheet: "products".to_string(),
            available: vec!["Sheet1".to_string(), "old".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Sheet 'products' not found (available: Sheet1, old)"
        );
    }
}
