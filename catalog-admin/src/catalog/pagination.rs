//! Pagination control model
//!
//! Describes which buttons the pagination bar shows; drawing them is the
//! renderer's business.

/// Pages shown on each side of the current page
pub const PAGE_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Prev { disabled: bool },
    Page { number: usize, active: bool },
    /// Ellipsis between the window and the first/last page
    Gap,
    Next { disabled: bool },
}

impl PageControl {
    pub fn label(&self) -> String {
        match self {
            Self::Prev { .. } => "Prev".to_string(),
            Self::Page { number, .. } => number.to_string(),
            Self::Gap => "…".to_string(),
            Self::Next { .. } => "Next".to_string(),
        }
    }
}

/// Controls for `page` of `total_pages`, both 1-based
pub fn pagination_controls(page: usize, total_pages: usize) -> Vec<PageControl> {
    let total = total_pages.max(1);
    let page = page.clamp(1, total);

    let start = page.saturating_sub(PAGE_WINDOW).max(1);
    let end = (page + PAGE_WINDOW).min(total);

    let mut controls = Vec::with_capacity(end - start + 7);
    controls.push(PageControl::Prev {
        disabled: page == 1,
    });

    if start > 1 {
        controls.push(PageControl::Page {
            number: 1,
            active: false,
        });
    }
    if start > 2 {
        controls.push(PageControl::Gap);
    }

    for number in start..=end {
        controls.push(PageControl::Page {
            number,
            active: number == page,
        });
    }

    if end + 1 < total {
        controls.push(PageControl::Gap);
    }
    if end < total {
        controls.push(PageControl::Page {
            number: total,
            active: false,
        });
    }

    controls.push(PageControl::Next {
        disabled: page == total,
    });
    controls
}
