// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Maud layout for the catalog index page.
//!
//! One section per category, each with a product table, plus the search box,
//! category filter buttons and price sort selector. The embedded script
//! (`assets/index.js`) filters and reorders rows in the browser; generation
//! itself is a pure function of the grouped products and config.

use crate::config::{IndexConfig, RenderConfig};
use crate::format::format_product_price;
use crate::group::{CatalogItem, CategoryGroup};
use crate::model::Product;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Version baked into generated HTML as `<meta name="generator">`.
const VERSION: &str = env!("CARGO_PKG_VERSION");

const INDEX_SCRIPT: &str = include_str!("../assets/index.js");
const INDEX_STYLE: &str = include_str!("../assets/index.css");

/// Value of the filter button that shows every category.
pub const ALL_CATEGORIES: &str = "";

/// Render the complete index document.
pub fn build_index(
    groups: &[CategoryGroup<'_>],
    index: &IndexConfig,
    render: &RenderConfig,
) -> String {
    let markup = html! {
        (DOCTYPE)
        html lang="ko" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="generator" content=(format!("catalog v{}", VERSION));
                title { (index.title) }
                style { (PreEscaped(INDEX_STYLE)) }
            }
            body {
                div class="catalog" {
                    div class="toolbar" {
                        a class="home" href=(index.home_href) { "← 홈" }
                    }
                    h1 { (index.heading) }
                    div class="subtitle" { (index.subtitle) }

                    (controls(groups))

                    @for group in groups {
                        (category_section(group, render))
                    }

                    p id="no-results" hidden { "검색 결과가 없습니다." }
                    div class="notice" { (index.notice) }
                }
                script { (PreEscaped(INDEX_SCRIPT)) }
            }
        }
    };
    markup.into_string()
}

/// Search input, category filter buttons and sort selector.
fn controls(groups: &[CategoryGroup<'_>]) -> Markup {
    html! {
        div class="controls" {
            input type="search" id="catalog-search" placeholder="제품명, 브랜드, 규격 검색"
                aria-label="자재 검색" autocomplete="off";
            div id="category-filters" role="group" aria-label="카테고리" {
                button type="button" class="filter active" data-category=(ALL_CATEGORIES) { "전체" }
                @for group in groups {
                    button type="button" class="filter" data-category=(group.name) { (group.name) }
                }
            }
            select id="price-sort" aria-label="정렬" {
                option value="default" selected { "기본 정렬" }
                option value="asc" { "가격 낮은순" }
                option value="desc" { "가격 높은순" }
            }
        }
    }
}

fn category_section(group: &CategoryGroup<'_>, render: &RenderConfig) -> Markup {
    html! {
        section class="category" data-category=(group.name) {
            h2 { (group.name) }
            table {
                thead {
                    tr {
                        th class="product" { "제품" }
                        th class="spec" { "규격" }
                        th class="price" { "가격" }
                        th class="link" { "링크" }
                    }
                }
                tbody {
                    @for item in &group.items {
                        (product_row(item, render))
                    }
                }
            }
        }
    }
}

fn product_row(item: &CatalogItem<'_>, render: &RenderConfig) -> Markup {
    let product = item.product;
    html! {
        tr class="product-row" {
            td class="product" {
                div class="title" { (product.title()) }
                div class="meta" { (meta_line(product)) }
                @if !product.usage.trim().is_empty() {
                    div class="usage" { "용도: " (product.usage) }
                }
            }
            td class="spec" {
                @if product.spec.trim().is_empty() { "-" } @else { (product.spec) }
            }
            td class="price" { (format_product_price(&product.price, &render.currency_suffix)) }
            td class="link" {
                a href=(item.href()) { "보기" }
            }
        }
    }
}

/// "브랜드: X · 시리즈: Y · 코드: Z", leaving out blank parts.
fn meta_line(product: &Product) -> String {
    [
        ("브랜드", &product.brand),
        ("시리즈", &product.series),
        ("코드", &product.code),
    ]
    .into_iter()
    .filter(|(_, value)| !value.trim().is_empty())
    .map(|(label, value)| format!("{}: {}", label, value))
    .collect::<Vec<_>>()
    .join(" · ")
}
