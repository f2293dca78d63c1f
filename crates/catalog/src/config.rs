// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Build configuration — parsed from an optional `catalog.yaml`.
//!
//! Every key is optional; absent keys take the built-in defaults.
//!
//! ```yaml
//! paths:
//!   data: "data/products.json"
//!   template: "templates/material.html"
//!   out_dir: "materials"
//!
//! site:
//!   phone: "02-487-9775"
//!
//! render:
//!   default_category: "기타"
//!   unmatched_placeholders: keep
//!   invalid_ids: abort
//!
//! index:
//!   heading: "자재 목록"
//! ```

use crate::error::{CatalogError, Result, must_read};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub paths: PathsConfig,
    pub site: SiteDefaults,
    pub render: RenderConfig,
    pub index: IndexConfig,
}

impl CatalogConfig {
    /// Load a config file. An explicitly named file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = must_read(path)?;
        Self::from_yaml(&raw).map_err(|source| CatalogError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml_ng::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(yaml)
    }
}

/// Input and output locations, relative to the working directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub spreadsheet: PathBuf,
    pub sheet: String,
    pub data: PathBuf,
    pub template: PathBuf,
    pub out_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            spreadsheet: PathBuf::from("data/products.xlsx"),
            sheet: "products".to_string(),
            data: PathBuf::from("data/products.json"),
            template: PathBuf::from("templates/material.html"),
            out_dir: PathBuf::from("materials"),
        }
    }
}

/// Fallback values for the document's `site` record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteDefaults {
    pub phone: String,
    pub hours: String,
    pub copyright: String,
}

impl Default for SiteDefaults {
    fn default() -> Self {
        Self {
            phone: "02-487-9775".to_string(),
            hours: "평일 07:00 - 18:00 / 주말 07:00 - 12:00".to_string(),
            copyright: "ⓒ 2025 DongKyung Flooring. All rights reserved.".to_string(),
        }
    }
}

/// What to do with `{{KEY}}` tokens that have no field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderPolicy {
    /// Leave the token in the output unchanged
    #[default]
    Keep,
    /// Replace the token with nothing
    Strip,
}

/// What to do with a product whose id is not a valid slug.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidIdPolicy {
    /// Fail the whole run before writing anything
    #[default]
    Abort,
    /// Warn and leave the product out of every page
    Skip,
}

/// Rendering knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Category name used for products with a blank category
    pub default_category: String,
    /// IMAGE value for products without an image
    pub placeholder_image: String,
    pub currency_suffix: String,
    pub unmatched_placeholders: PlaceholderPolicy,
    pub invalid_ids: InvalidIdPolicy,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_category: "기타".to_string(),
            placeholder_image: "images/placeholder.jpg".to_string(),
            currency_suffix: "원".to_string(),
            unmatched_placeholders: PlaceholderPolicy::default(),
            invalid_ids: InvalidIdPolicy::default(),
        }
    }
}

/// Fixed texts on the catalog index page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub title: String,
    pub heading: String,
    pub subtitle: String,
    pub home_href: String,
    pub notice: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            title: "자재 목록 | 동경바닥재".to_string(),
            heading: "자재 목록".to_string(),
            subtitle: "카테고리별로 정리된 기준표".to_string(),
            home_href: "../index.html".to_string(),
            notice: "※ 가격/재고는 현장 상황에 따라 변동될 수 있습니다.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_partial_config() {
        let yaml = r#"
paths:
  out_dir: "public/materials"

site:
  phone: "010-0000-0000"

render:
  unmatched_placeholders: strip
  invalid_ids: skip
"#;
        let config = CatalogConfig::from_yaml(yaml).expect("parse config");
        assert_eq!(config.paths.out_dir, PathBuf::from("public/materials"));
        assert_eq!(config.paths.data, PathBuf::from("data/products.json"));
        assert_eq!(config.site.phone, "010-0000-0000");
        assert_eq!(config.site.hours, SiteDefaults::default().hours);
        assert_eq!(config.render.unmatched_placeholders, PlaceholderPolicy::Strip);
        assert_eq!(config.render.invalid_ids, InvalidIdPolicy::Skip);
        assert_eq!(config.render.default_category, "기타");
        assert_eq!(config.index, IndexConfig::default());
    }

    #[test]
    fn empty_config_is_default() {
        let config = CatalogConfig::from_yaml("\n").expect("parse config");
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.render.invalid_ids, InvalidIdPolicy::Abort);
        assert_eq!(config.render.unmatched_placeholders, PlaceholderPolicy::Keep);
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let result = CatalogConfig::from_yaml("render:\n  invalid_ids: ignore\n");
        assert!(result.is_err());
    }

    #[test]
    fn missing_config_file() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let result = CatalogConfig::load(&tmp.path().join("catalog.yaml"));
        assert!(matches!(result, Err(CatalogError::MissingInput { .. })));
    }
}
