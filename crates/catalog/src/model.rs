// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Catalog document model — the JSON contract between ingestion and rendering.
//!
//! ```json
//! {
//!   "site": { "phone": "02-487-9775", "hours": "...", "copyright": "..." },
//!   "products": [
//!     { "id": "abc-1", "category": "Tile", "brand": "B", "series": "S",
//!       "code": "C1", "spec": "600x600", "unit": "box", "price": 10000,
//!       "usage": "floor", "note": "", "image": "images/abc-1.jpg" }
//!   ]
//! }
//! ```
//!
//! The document is trusted for shape (flat records) but not for formatting:
//! any text field may be missing, `null`, blank or a number.

use crate::config::SiteDefaults;
use crate::error::{CatalogError, Result, must_read};
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::{Number, Value};
use std::path::Path;

/// The whole input document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub site: Site,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Global display fields shared by every page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Site {
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub hours: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub copyright: String,
}

impl Site {
    /// Fill blank fields from the configured defaults.
    pub fn with_defaults(&self, defaults: &SiteDefaults) -> Site {
        Site {
            phone: or_default(&self.phone, &defaults.phone),
            hours: or_default(&self.hours, &defaults.hours),
            copyright: or_default(&self.copyright, &defaults.copyright),
        }
    }
}

impl From<&SiteDefaults> for Site {
    fn from(defaults: &SiteDefaults) -> Self {
        Site {
            phone: defaults.phone.clone(),
            hours: defaults.hours.clone(),
            copyright: defaults.copyright.clone(),
        }
    }
}

/// One catalog row. Blank strings mean "absent".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub brand: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub series: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub code: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub spec: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub unit: String,
    #[serde(default)]
    pub price: Price,
    #[serde(default, deserialize_with = "lenient_text")]
    pub usage: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub note: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub image: String,
}

impl Product {
    /// Display title: "brand series code", blanks collapsed at the edges.
    pub fn title(&self) -> String {
        self.sort_key().trim().to_string()
    }

    /// Ordering key inside a category. Kept untrimmed so that a missing brand
    /// sorts by its leading separator, exactly as the title is assembled.
    pub fn sort_key(&self) -> String {
        format!("{} {} {}", self.brand, self.series, self.code)
    }

    /// Category name, or `fallback` when blank.
    pub fn category_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.category.trim().is_empty() {
            fallback
        } else {
            &self.category
        }
    }
}

/// A price cell as it arrives from the document.
///
/// Ingestion writes numbers, but hand-edited documents may carry strings,
/// `null`, booleans or even nested values. None of these fail loading:
/// anything that is neither a number nor a string is `Missing`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Text(String),
    #[default]
    Missing,
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_f64().map_or(Price::Missing, Price::Amount),
            Value::String(s) => Price::Text(s),
            Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => Price::Missing,
        })
    }
}

impl Price {
    /// Numeric value, if finite. Text is parsed after trimming.
    pub fn amount(&self) -> Option<f64> {
        let n = match self {
            Price::Amount(n) => *n,
            Price::Text(s) => s.trim().parse::<f64>().ok()?,
            Price::Missing => return None,
        };
        n.is_finite().then_some(n)
    }
}

/// Load and parse the catalog document.
pub fn load_document(path: &Path) -> Result<CatalogDocument> {
    let raw = must_read(path)?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::MalformedJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the document as pretty-printed JSON, creating the parent directory.
pub fn write_document(path: &Path, doc: &CatalogDocument) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CatalogError::io(parent, e))?;
    }
    let json = serde_json::to_string_pretty(doc).map_err(|source| CatalogError::MalformedJson {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json.as_bytes()).map_err(|e| CatalogError::io(path, e))
}

fn or_default(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Accept any JSON scalar as text; `null` becomes the empty string.
fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(number_text(&n)),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(de::Error::custom(format!(
            "expected a scalar value, found {}",
            other
        ))),
    }
}

/// `1203.0` reads as `1203`, the way the spreadsheet displayed it.
pub(crate) fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if !n.is_i64() && !n.is_u64() && f.fract() == 0.0 && f.abs() < 1e15 => {
            format!("{}", f as i64)
        }
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_document() {
        let json = r#"{
            "site": { "phone": "010-1234-5678", "hours": "9-18", "copyright": "(c) test" },
            "products": [
                { "id": "abc-1", "category": "Tile", "brand": "B", "series": "S",
                  "code": "C1", "spec": "600x600", "unit": "box", "price": 10000,
                  "usage": "floor", "note": "", "image": "images/abc-1.jpg" }
            ]
        }"#;
        let doc: CatalogDocument = serde_json::from_str(json).expect("parse");
        assert_eq!(doc.site.phone, "010-1234-5678");
        assert_eq!(doc.products.len(), 1);
        let p = &doc.products[0];
        assert_eq!(p.title(), "B S C1");
        assert_eq!(p.price.amount(), Some(10000.0));
    }

    #[test]
    fn missing_keys_default() {
        let doc: CatalogDocument = serde_json::from_str("{}").expect("parse");
        assert!(doc.products.is_empty());
        assert_eq!(doc.site, Site::default());

        let p: Product = serde_json::from_str(r#"{ "id": "x" }"#).expect("parse");
        assert_eq!(p.brand, "");
        assert_eq!(p.price, Price::Missing);
    }

    #[test]
    fn scalar_fields_are_lenient() {
        let p: Product = serde_json::from_str(
            r#"{ "id": 42, "code": 1203.0, "spec": 1.5, "note": null, "unit": true }"#,
        )
        .expect("parse");
        assert_eq!(p.id, "42");
        assert_eq!(p.code, "1203");
        assert_eq!(p.spec, "1.5");
        assert_eq!(p.note, "");
        assert_eq!(p.unit, "true");
    }

    #[test]
    fn nested_values_are_rejected() {
        let result: std::result::Result<Product, _> =
            serde_json::from_str(r#"{ "id": "x", "brand": { "name": "B" } }"#);
        assert!(result.is_err());
    }

    #[test]
    fn price_variants() {
        let p: Product = serde_json::from_str(r#"{ "price": "12000" }"#).expect("parse");
        assert_eq!(p.price.amount(), Some(12000.0));
        let p: Product = serde_json::from_str(r#"{ "price": "abc" }"#).expect("parse");
        assert_eq!(p.price, Price::Text("abc".to_string()));
        assert_eq!(p.price.amount(), None);
        let p: Product = serde_json::from_str(r#"{ "price": null }"#).expect("parse");
        assert_eq!(p.price.amount(), None);
        assert_eq!(Price::Amount(f64::NAN).amount(), None);
    }

    #[test]
    fn non_scalar_price_is_missing() {
        let doc: CatalogDocument = serde_json::from_str(
            r#"{ "products": [
                { "id": "a", "price": true },
                { "id": "b", "price": [1, 2] },
                { "id": "c", "price": { "amount": 3 } },
                { "id": "d", "price": 4 }
            ] }"#,
        )
        .expect("non-numeric prices must not fail loading");
        let prices: Vec<&Price> = doc.products.iter().map(|p| &p.price).collect();
        assert_eq!(
            prices,
            [&Price::Missing, &Price::Missing, &Price::Missing, &Price::Amount(4.0)]
        );
        assert_eq!(
            crate::format::format_product_price(&doc.products[0].price, "원"),
            "-"
        );
    }

    #[test]
    fn title_trims_missing_parts() {
        let p = Product {
            series: "S".to_string(),
            ..Default::default()
        };
        assert_eq!(p.title(), "S");
        assert_eq!(p.sort_key(), " S ");
    }

    #[test]
    fn blank_category_falls_back() {
        let p = Product {
            category: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(p.category_or("기타"), "기타");
    }

    #[test]
    fn site_defaults_fill_blanks() {
        let defaults = SiteDefaults::default();
        let site = Site {
            phone: "".to_string(),
            hours: "24h".to_string(),
            copyright: " ".to_string(),
        };
        let resolved = site.with_defaults(&defaults);
        assert_eq!(resolved.phone, defaults.phone);
        assert_eq!(resolved.hours, "24h");
        assert_eq!(resolved.copyright, defaults.copyright);
    }

    #[test]
    fn write_then_load_document() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("data").join("products.json");
        let doc = CatalogDocument {
            site: Site::from(&SiteDefaults::default()),
            products: vec![Product {
                id: "abc-1".to_string(),
                price: Price::Missing,
                ..Default::default()
            }],
        };
        write_document(&path, &doc).expect("write");
        let text = std::fs::read_to_string(&path).expect("read");
        assert!(text.contains("\n  \"site\""));
        assert!(text.contains("\"price\": null"));
        assert_eq!(load_document(&path).expect("load"), doc);
    }

    #[test]
    fn malformed_json_is_reported() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("products.json");
        std::fs::write(&path, "{ not json").expect("write");
        assert!(matches!(
            load_document(&path),
            Err(CatalogError::MalformedJson { .. })
        ));
    }
}
