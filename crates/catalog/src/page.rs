// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Per-product detail pages, rendered from the shared template.

use crate::config::RenderConfig;
use crate::format::format_product_price;
use crate::model::{Product, Site};
use crate::render::{Fields, render};

/// Shown for blank product fields.
const BLANK: &str = "-";

/// Build the placeholder map for one product page.
///
/// `site` is expected to have its defaults applied already.
pub fn product_fields(product: &Product, site: &Site, config: &RenderConfig) -> Fields {
    let title = product.title();
    Fields::new()
        .text("TITLE", title.as_str())
        .text("H1", title)
        .text("SUBTITLE", subtitle(product))
        .text("CATEGORY", or_blank(&product.category))
        .text("BRAND", or_blank(&product.brand))
        .text("SERIES", or_blank(&product.series))
        .text("CODE", or_blank(&product.code))
        .text("SPEC", or_blank(&product.spec))
        .text("UNIT", or_blank(&product.unit))
        .text(
            "PRICE",
            format_product_price(&product.price, &config.currency_suffix),
        )
        .text("USAGE", or_blank(&product.usage))
        .text("NOTE", or_blank(&product.note))
        .text("IMAGE", or(&product.image, &config.placeholder_image))
        .text("PHONE", site.phone.as_str())
        .text("HOURS", site.hours.as_str())
        .text("COPYRIGHT", site.copyright.as_str())
}

/// Render one product page.
pub fn render_product_page(
    template: &str,
    product: &Product,
    site: &Site,
    config: &RenderConfig,
) -> String {
    let fields = product_fields(product, site, config);
    render(template, &fields, config.unmatched_placeholders)
}

/// "category · usage", skipping blank parts.
fn subtitle(product: &Product) -> String {
    let parts: Vec<&str> = [product.category.trim(), product.usage.trim()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    if parts.is_empty() {
        BLANK.to_string()
    } else {
        parts.join(" · ")
    }
}

fn or_blank(value: &str) -> &str {
    or(value, BLANK)
}

fn or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}
