//! View state: query, sort and pagination parameters
//!
//! All mutators are pure transitions on a value; clamping `page` against the
//! filtered count happens in [`super::processor::recompute`].

use serde::{Deserialize, Serialize};

/// Page size used when none is configured
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page sizes offered by the console
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

/// Sortable column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    None,
    Title,
    Price,
}

impl SortField {
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Title => "title",
            Self::Price => "price",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Some(Self::None),
            "title" => Some(Self::Title),
            "price" => Some(Self::Price),
            _ => None,
        }
    }
}

/// Current query, sort and pagination parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Trimmed search text; matched against titles case-insensitively
    pub query: String,
    pub sort_field: SortField,
    pub sort_ascending: bool,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            query: String::new(),
            sort_field: SortField::None,
            sort_ascending: true,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// New search text; back to page 1
    pub fn set_query(mut self, query: &str) -> Self {
        self.query = query.trim().to_string();
        self.page = 1;
        self
    }

    /// Header click: the same column flips direction and keeps the page,
    /// a different column sorts ascending from page 1.
    pub fn set_sort(mut self, field: SortField) -> Self {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field;
            self.sort_ascending = true;
            self.page = 1;
        }
        self
    }

    /// Zero is ignored
    pub fn set_page_size(mut self, page_size: usize) -> Self {
        if page_size == 0 {
            tracing::warn!("Ignoring page size 0");
            return self;
        }
        self.page_size = page_size;
        self.page = 1;
        self
    }

    pub fn go_to_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn next_page(self) -> Self {
        let page = self.page.saturating_add(1);
        self.go_to_page(page)
    }

    pub fn prev_page(self) -> Self {
        let page = self.page.saturating_sub(1);
        self.go_to_page(page)
    }

    /// Header indicator for a column: `▲`/`▼` when sorted by it, `⬍` otherwise
    pub fn sort_indicator(&self, field: SortField) -> &'static str {
        if field != SortField::None && self.sort_field == field {
            if self.sort_ascending { "▲" } else { "▼" }
        } else {
            "⬍"
        }
    }
}
