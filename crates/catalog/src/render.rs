// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! `{{KEY}}` placeholder substitution for page templates.
//!
//! The template is scanned once; each `{{KEY}}` token whose key is in the
//! field map is replaced by that field's value. Inserted values are never
//! re-scanned, so a product note containing `{{PRICE}}` stays literal text.

use crate::config::PlaceholderPolicy;
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("placeholder pattern is valid")
});

/// A value bound to a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Plain text, HTML-escaped on substitution
    Text(String),
    /// Pre-built markup, inserted verbatim
    Html(String),
}

impl FieldValue {
    fn to_html(&self) -> String {
        match self {
            FieldValue::Text(text) => escape_html(text),
            FieldValue::Html(html) => html.clone(),
        }
    }
}

/// Placeholder name → value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    values: BTreeMap<String, FieldValue>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a text value (escaped at render time).
    pub fn text(mut self, key: &str, value: impl Into<String>) -> Self {
        self.values
            .insert(key.to_string(), FieldValue::Text(value.into()));
        self
    }

    /// Bind trusted markup (inserted as-is).
    pub fn html(mut self, key: &str, value: impl Into<String>) -> Self {
        self.values
            .insert(key.to_string(), FieldValue::Html(value.into()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Substitute every known `{{KEY}}` in `template`.
///
/// Tokens with no matching field are kept or stripped according to `policy`.
pub fn render(template: &str, fields: &Fields, policy: PlaceholderPolicy) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| match fields.get(&caps[1]) {
            Some(value) => value.to_html(),
            None => match policy {
                PlaceholderPolicy::Keep => caps[0].to_string(),
                PlaceholderPolicy::Strip => String::new(),
            },
        })
        .into_owned()
}

/// Escape `& < > " '` for use in HTML text and attribute values.
///
/// Single pass, so the `&` of an entity produced here is never escaped again.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
