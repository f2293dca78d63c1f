// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Display formatting for prices and product ids.

use crate::error::{CatalogError, Result};
use crate::model::Price;
use regex::Regex;
use std::sync::LazyLock;

static SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("slug pattern is valid"));

/// Shown in place of a price that is not a finite number.
pub const NO_PRICE: &str = "-";

/// Format an amount with `,` thousands grouping and the currency suffix.
///
/// At most three fraction digits are kept (trailing zeros dropped), the way
/// `ko-KR` number formatting renders them. Non-finite input yields `"-"`.
pub fn format_price(amount: f64, suffix: &str) -> String {
    if !amount.is_finite() {
        return NO_PRICE.to_string();
    }

    let fixed = format!("{:.3}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + suffix.len() + 1);
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if amount < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out.push_str(suffix);
    out
}

/// Format a document price; anything non-numeric becomes `"-"`.
pub fn format_product_price(price: &Price, suffix: &str) -> String {
    match price.amount() {
        Some(amount) => format_price(amount, suffix),
        None => NO_PRICE.to_string(),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Normalize a product id into a URL and filename safe slug.
///
/// Trims and lowercases, then requires `^[a-z0-9-]+$`. The error carries the
/// id as written so the offending row can be found.
pub fn normalize_id(raw: &str) -> Result<String> {
    let slug = raw.trim().to_lowercase();
    if SLUG.is_match(&slug) {
        Ok(slug)
    } else {
        Err(CatalogError::invalid_identifier(raw))
    }
}
