// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! # Catalog — static product catalog builder
//!
//! Two batch stages, run one after the other:
//!
//! 1. [`ingest`]: spreadsheet rows → canonical JSON document `{ site, products }`
//! 2. [`site`]: JSON document + `{{KEY}}` template → one HTML page per product
//!    plus a searchable, category-grouped `index.html`
//!
//! ```bash
//! catalog ingest --input data/products.xlsx --output data/products.json
//! catalog build --data data/products.json --template templates/material.html --out materials
//! ```

pub mod collate;
pub mod config;
pub mod error;
pub mod format;
pub mod group;
pub mod index;
pub mod ingest;
pub mod model;
pub mod page;
pub mod render;
pub mod site;

pub use config::{CatalogConfig, InvalidIdPolicy, PlaceholderPolicy, RenderConfig, SiteDefaults};
pub use error::{CatalogError, Result};
pub use format::{format_price, normalize_id};
pub use model::{CatalogDocument, Price, Product, Site};
pub use render::{Fields, escape_html, render};
pub use site::{BuildSummary, build_site, generate_site};
