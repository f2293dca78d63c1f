// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Category grouping for the catalog index.
//!
//! Groups are derived on every build and never persisted.

use crate::collate::KoreanCollator;
use crate::model::Product;
use std::collections::BTreeMap;

/// A product together with its validated slug.
#[derive(Debug, Clone, Copy)]
pub struct CatalogItem<'a> {
    pub slug: &'a str,
    pub product: &'a Product,
}

impl CatalogItem<'_> {
    /// Relative link to the product's generated page.
    pub fn href(&self) -> String {
        format!("./{}.html", self.slug)
    }
}

/// One category heading and its ordered products.
#[derive(Debug, Clone)]
pub struct CategoryGroup<'a> {
    pub name: String,
    pub items: Vec<CatalogItem<'a>>,
}

/// Group items by category and order both levels with Korean collation.
///
/// Blank categories go under `default_category`. Within a group, items are
/// ordered by `brand series code`; sorting is stable, so ties keep input order.
pub fn group_by_category<'a>(
    items: &[CatalogItem<'a>],
    default_category: &str,
    collator: &KoreanCollator,
) -> Vec<CategoryGroup<'a>> {
    let mut by_name: BTreeMap<String, Vec<(String, CatalogItem<'a>)>> = BTreeMap::new();
    for item in items {
        let name = item.product.category_or(default_category).to_string();
        by_name
            .entry(name)
            .or_default()
            .push((item.product.sort_key(), *item));
    }

    let mut groups: Vec<CategoryGroup<'a>> = by_name
        .into_iter()
        .map(|(name, mut keyed)| {
            keyed.sort_by(|(a, _), (b, _)| collator.compare(a, b));
            CategoryGroup {
                name,
                items: keyed.into_iter().map(|(_, item)| item).collect(),
            }
        })
        .collect();

    groups.sort_by(|a, b| collator.compare(&a.name, &b.name));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, category: &str, brand: &str, series: &str, code: &str) -> Product {
        Product {
            id: id.to_string(),
            category: category.to_string(),
            brand: brand.to_string(),
            series: series.to_string(),
            code: code.to_string(),
            ..Default::default()
        }
    }

    fn items(products: &[Product]) -> Vec<CatalogItem<'_>> {
        products
            .iter()
            .map(|p| CatalogItem {
                slug: p.id.as_str(),
                product: p,
            })
            .collect()
    }

    fn slugs(group: &CategoryGroup<'_>) -> Vec<String> {
        group.items.iter().map(|i| i.slug.to_string()).collect()
    }

    #[test]
    fn categories_and_items_are_ordered() {
        let products = vec![
            product("b2", "B", "Zeta", "S", "1"),
            product("a2", "A", "beta", "S", "1"),
            product("b1", "B", "Alpha", "S", "1"),
            product("a1", "A", "Alpha", "S", "2"),
        ];
        let collator = KoreanCollator::new().expect("collator");
        let groups = group_by_category(&items(&products), "기타", &collator);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "A");
        assert_eq!(groups[1].name, "B");
        assert_eq!(slugs(&groups[0]), ["a1", "a2"]);
        assert_eq!(slugs(&groups[1]), ["b1", "b2"]);
    }

    #[test]
    fn collation_differs_from_byte_order() {
        // Byte order would give "Wood" before "tile" and "Banana" before "apple".
        let products = vec![
            product("w1", "Wood", "x", "", ""),
            product("t-banana", "tile", "Banana", "", ""),
            product("t-apple", "tile", "apple", "", ""),
        ];
        let collator = KoreanCollator::new().expect("collator");
        let groups = group_by_category(&items(&products), "기타", &collator);

        let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["tile", "Wood"]);
        assert_eq!(slugs(&groups[0]), ["t-apple", "t-banana"]);
    }

    #[test]
    fn hangul_categories_use_dictionary_order() {
        let products = vec![
            product("t", "타일", "", "", ""),
            product("j", "장판", "", "", ""),
            product("g", "강마루", "", "", ""),
        ];
        let collator = KoreanCollator::new().expect("collator");
        let groups = group_by_category(&items(&products), "기타", &collator);
        let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["강마루", "장판", "타일"]);
    }

    #[test]
    fn blank_category_uses_default() {
        let products = vec![product("x", "", "B", "", ""), product("y", "  ", "A", "", "")];
        let collator = KoreanCollator::new().expect("collator");
        let groups = group_by_category(&items(&products), "기타", &collator);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "기타");
        assert_eq!(slugs(&groups[0]), ["y", "x"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let products = vec![
            product("first", "A", "B", "S", "C"),
            product("second", "A", "B", "S", "C"),
        ];
        let collator = KoreanCollator::new().expect("collator");
        let groups = group_by_category(&items(&products), "기타", &collator);
        assert_eq!(slugs(&groups[0]), ["first", "second"]);
    }

    #[test]
    fn empty_input_has_no_groups() {
        let collator = KoreanCollator::new().expect("collator");
        assert!(group_by_category(&[], "기타", &collator).is_empty());
    }

    #[test]
    fn href_points_at_product_page() {
        let p = product("abc-1", "Tile", "", "", "");
        let item = CatalogItem {
            slug: "abc-1",
            product: &p,
        };
        assert_eq!(item.href(), "./abc-1.html");
    }
}
