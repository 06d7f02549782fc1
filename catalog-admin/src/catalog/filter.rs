//! Content filter
//!
//! The catalog API is public and anyone can create records, so fetched data
//! is screened against a denylist before anything else sees it.

use shared::Product;

/// Terms removed when no denylist is configured
pub const DEFAULT_DENYLIST: &[&str] = &["adult", "sex", "porn", "nude", "toy", "xxx"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentFilter {
    /// Lowercased, non-empty terms
    terms: Vec<String>,
}

impl Default for ContentFilter {
    fn default() -> Self {
        Self::new(DEFAULT_DENYLIST.iter().copied())
    }
}

impl ContentFilter {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    /// Parse a comma-separated list (`CATALOG_DENYLIST`)
    pub fn from_csv_list(list: &str) -> Self {
        Self::new(list.split(','))
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// True when `text` contains none of the terms, ignoring case
    pub fn is_safe_text(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        !self.terms.iter().any(|term| text.contains(term.as_str()))
    }

    pub fn is_safe(&self, product: &Product) -> bool {
        self.is_safe_text(&product.title) && self.is_safe_text(&product.description)
    }

    /// Keep only safe products, preserving order
    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        let before = products.len();
        let kept: Vec<Product> = products
            .into_iter()
            .filter(|p| {
                let safe = self.is_safe(p);
                if !safe {
                    tracing::debug!(id = p.id, title = %p.title, "Filtered out product");
                }
                safe
            })
            .collect();

        let removed = before - kept.len();
        if removed > 0 {
            tracing::info!(removed, kept = kept.len(), "Content filter applied");
        }
        kept
    }
}
