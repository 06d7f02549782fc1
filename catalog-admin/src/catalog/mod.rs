//! Catalog view pipeline
//!
//! Content screening, search/sort/paging of the loaded collection, the
//! pagination bar model and CSV export of the visible page.

pub mod export;
pub mod filter;
pub mod pagination;
pub mod processor;
pub mod view;

pub use filter::ContentFilter;
pub use pagination::{PageControl, pagination_controls};
pub use processor::{PageView, recompute};
pub use view::{SortField, ViewState};
