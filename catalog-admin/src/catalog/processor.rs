//! List processing: filter → sort → clamp → slice
//!
//! Pure functions of the product collection and a [`ViewState`]. Nothing here
//! holds state between calls.

use std::cmp::Ordering;

use shared::Product;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::view::{SortField, ViewState};

/// One rendered page plus its pagination metadata
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub items: Vec<Product>,
    /// Items matching the query (all pages)
    pub total_count: usize,
    /// `max(1, ceil(total_count / page_size))`
    pub total_pages: usize,
    /// Clamped into `1..=total_pages`
    pub page: usize,
    /// Half-open slice `range_start..range_end` of the filtered list
    pub range_start: usize,
    pub range_end: usize,
}

impl PageView {
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// "Items 11-20 / 25", or "No data" when nothing matches
    pub fn range_label(&self) -> String {
        if self.is_empty() {
            "No data".to_string()
        } else {
            format!(
                "Items {}-{} / {}",
                self.range_start + 1,
                self.range_end,
                self.total_count
            )
        }
    }

    /// "Showing N items"
    pub fn count_label(&self) -> String {
        format!("Showing {} items", self.total_count)
    }
}

/// `max(1, ceil(total_count / page_size))`; a zero page size counts as 1
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    total_count.div_ceil(page_size.max(1)).max(1)
}

/// Clamp `page` into `1..=total_pages`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Products whose lowercase title contains the lowercase query
pub fn filter_by_query<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| p.title.to_lowercase().contains(&needle))
        .collect()
}

/// Value a product is ordered by for a given column
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortKey<'a> {
    Text(&'a str),
    Number(f64),
}

impl<'a> SortKey<'a> {
    pub fn of(product: &'a Product, field: SortField) -> Option<Self> {
        match field {
            SortField::None => None,
            SortField::Title => Some(Self::Text(&product.title)),
            SortField::Price => Some(Self::Number(product.price.unwrap_or(0.0))),
        }
    }

    fn as_number(&self) -> f64 {
        match self {
            Self::Number(n) if n.is_finite() => *n,
            Self::Number(_) => 0.0,
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()).unwrap_or(0.0),
        }
    }
}

/// Text against text uses locale-style ordering, every other pairing compares
/// numerically with non-numeric values as 0.
pub fn compare_keys(a: &SortKey<'_>, b: &SortKey<'_>) -> Ordering {
    match (a, b) {
        (SortKey::Text(a), SortKey::Text(b)) => compare_text(a, b),
        _ => a.as_number().total_cmp(&b.as_number()),
    }
}

/// Primary collation key: canonical decomposition with accents dropped, lowercased
///
/// `"Émile"` and `"emile"` share a key, so accented titles sort among their
/// base letters instead of after `z`.
pub fn collation_key(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Accent- and case-insensitive first; on a tie lowercase sorts before
/// uppercase, then code points decide (unaccented before accented).
pub fn compare_text(a: &str, b: &str) -> Ordering {
    compare_collated(&collation_key(a), a, &collation_key(b), b)
}

fn compare_collated(key_a: &str, a: &str, key_b: &str, b: &str) -> Ordering {
    key_a
        .cmp(key_b)
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

/// Stable sort in place; ties keep their input order
pub fn sort_products(products: &mut [&Product], field: SortField, ascending: bool) {
    let direction = |ord: Ordering| if ascending { ord } else { ord.reverse() };

    match field {
        SortField::None => {}
        SortField::Title => {
            // one collation key per product, not per comparison
            let mut keyed: Vec<(String, &Product)> = products
                .iter()
                .map(|p| (collation_key(&p.title), *p))
                .collect();
            keyed.sort_by(|(key_a, a), (key_b, b)| {
                direction(compare_collated(key_a, &a.title, key_b, &b.title))
            });
            for (slot, (_, product)) in products.iter_mut().zip(keyed) {
                *slot = product;
            }
        }
        SortField::Price => products.sort_by(|a, b| {
            let ord = match (SortKey::of(a, field), SortKey::of(b, field)) {
                (Some(ka), Some(kb)) => compare_keys(&ka, &kb),
                _ => Ordering::Equal,
            };
            direction(ord)
        }),
    }
}

/// Full pipeline for one render
pub fn recompute(products: &[Product], state: &ViewState) -> PageView {
    let mut filtered = filter_by_query(products, &state.query);
    sort_products(&mut filtered, state.sort_field, state.sort_ascending);

    let total_count = filtered.len();
    let total_pages = total_pages(total_count, state.page_size);
    let page = clamp_page(state.page, total_pages);

    let page_size = state.page_size.max(1);
    let range_start = ((page - 1) * page_size).min(total_count);
    let range_end = (range_start + page_size).min(total_count);

    PageView {
        items: filtered[range_start..range_end]
            .iter()
            .map(|p| (*p).clone())
            .collect(),
        total_count,
        total_pages,
        page,
        range_start,
        range_end,
    }
}
