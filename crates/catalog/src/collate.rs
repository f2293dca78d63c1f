// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Korean collation for category and product ordering.

use crate::error::{CatalogError, Result};
use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use std::cmp::Ordering;

/// Locale-aware string comparison using the ICU `ko` collation.
///
/// Uses compiled-in CLDR data, so ordering is identical across runs and hosts.
pub struct KoreanCollator {
    inner: Collator,
}

impl KoreanCollator {
    pub fn new() -> Result<Self> {
        let inner = Collator::try_new(&locale!("ko").into(), CollatorOptions::new())
            .map_err(|e| CatalogError::Collation(e.to_string()))?;
        Ok(Self { inner })
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.inner.compare(a, b)
    }
}

impl std::fmt::Debug for KoreanCollator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("KoreanCollator")
    }
}
