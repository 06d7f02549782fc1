//! Dashboard state and its transitions
//!
//! `DashboardState::apply` is the only way state changes: `(state, event) -> state'`.
//! No I/O happens here; the controller performs requests and feeds the
//! outcome back in as events.

use shared::Product;

use crate::catalog::processor::{self, PageView};
use crate::catalog::view::{SortField, ViewState};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    /// Fetch outstanding; the list is inert
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    QueryChanged(String),
    SortClicked(SortField),
    PageSizeChanged(usize),
    PageSelected(usize),
    NextPage,
    PrevPage,
    LoadStarted,
    /// Already screened by the content filter
    Loaded(Vec<Product>),
    LoadFailed(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    /// Replaced wholesale on every successful load, never patched
    pub products: Vec<Product>,
    pub view: ViewState,
    pub status: LoadStatus,
}

impl DashboardState {
    pub fn new(view: ViewState) -> Self {
        Self {
            products: Vec::new(),
            view,
            status: LoadStatus::Idle,
        }
    }

    pub fn apply(mut self, event: DashboardEvent) -> Self {
        match event {
            DashboardEvent::QueryChanged(query) => self.view = self.view.set_query(&query),
            DashboardEvent::SortClicked(field) => self.view = self.view.set_sort(field),
            DashboardEvent::PageSizeChanged(size) => self.view = self.view.set_page_size(size),
            DashboardEvent::PageSelected(page) => self.view = self.view.go_to_page(page),
            DashboardEvent::NextPage => self.view = self.view.next_page(),
            DashboardEvent::PrevPage => self.view = self.view.prev_page(),
            DashboardEvent::LoadStarted => self.status = LoadStatus::Loading,
            DashboardEvent::Loaded(products) => {
                self.products = products;
                self.view = self.view.go_to_page(1);
                self.status = LoadStatus::Ready;
            }
            DashboardEvent::LoadFailed(message) => self.status = LoadStatus::Failed(message),
        }
        self.clamp_page()
    }

    /// Current page of the filtered, sorted collection
    pub fn page_view(&self) -> PageView {
        processor::recompute(&self.products, &self.view)
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn find(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    fn clamp_page(mut self) -> Self {
        let matching = processor::filter_by_query(&self.products, &self.view.query).len();
        let total_pages = processor::total_pages(matching, self.view.page_size);
        self.view.page = processor::clamp_page(self.view.page, total_pages);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products(n: i64) -> Vec<Product> {
        (1..=n)
            .map(|i| Product {
                id: i,
                title: format!("Item {i}"),
                price: Some(i as f64),
                description: String::new(),
                category: None,
                images: None,
            })
            .collect()
    }

    fn loaded(n: i64) -> DashboardState {
        DashboardState::default().apply(DashboardEvent::Loaded(products(n)))
    }

    #[test]
    fn test_load_lifecycle() {
        let state = DashboardState::default().apply(DashboardEvent::LoadStarted);
        assert!(state.is_loading());

        let state = state.apply(DashboardEvent::Loaded(products(3)));
        assert_eq!(state.status, LoadStatus::Ready);
        assert_eq!(state.products.len(), 3);
    }

    #[test]
    fn test_load_failure_keeps_previous_products() {
        let state = loaded(4)
            .apply(DashboardEvent::LoadStarted)
            .apply(DashboardEvent::LoadFailed("HTTP 500".into()));
        assert_eq!(state.status, LoadStatus::Failed("HTTP 500".into()));
        assert_eq!(state.products.len(), 4);
    }

    #[test]
    fn test_reload_replaces_collection_and_resets_page() {
        let state = loaded(30)
            .apply(DashboardEvent::QueryChanged("item".into()))
            .apply(DashboardEvent::SortClicked(SortField::Price))
            .apply(DashboardEvent::PageSelected(3));
        assert_eq!(state.view.page, 3);

        let state = state.apply(DashboardEvent::Loaded(products(25)));
        assert_eq!(state.products.len(), 25);
        assert_eq!(state.view.page, 1);
        assert_eq!(state.view.query, "item");
        assert_eq!(state.view.sort_field, SortField::Price);
    }

    #[test]
    fn test_page_selection_is_clamped() {
        let state = loaded(25).apply(DashboardEvent::PageSelected(5));
        assert_eq!(state.view.page, 3);

        let view = state.page_view();
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.page, 3);
    }

    #[test]
    fn test_next_prev_stay_in_range() {
        let state = loaded(15)
            .apply(DashboardEvent::NextPage)
            .apply(DashboardEvent::NextPage)
            .apply(DashboardEvent::NextPage);
        assert_eq!(state.view.page, 2);

        let state = state
            .apply(DashboardEvent::PrevPage)
            .apply(DashboardEvent::PrevPage);
        assert_eq!(state.view.page, 1);
    }

    #[test]
    fn test_query_resets_page() {
        let state = loaded(30)
            .apply(DashboardEvent::PageSelected(2))
            .apply(DashboardEvent::QueryChanged("Item 1".into()));
        assert_eq!(state.view.page, 1);
        // Item 1 and Item 10 ..= Item 19
        assert_eq!(state.page_view().total_count, 11);
    }

    #[test]
    fn test_page_size_change() {
        let state = loaded(30)
            .apply(DashboardEvent::PageSelected(3))
            .apply(DashboardEvent::PageSizeChanged(20));
        assert_eq!(state.view.page, 1);
        assert_eq!(state.page_view().total_pages, 2);
    }

    #[test]
    fn test_find() {
        let state = loaded(3);
        assert_eq!(state.find(2).map(|p| p.title.as_str()), Some("Item 2"));
        assert!(state.find(99).is_none());
    }
}
