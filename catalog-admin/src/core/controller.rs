//! Dashboard controller
//!
//! Owns the state and the two seams (`CatalogClient`, `Renderer`). Requests
//! are awaited in place, so only one is ever in flight.

use std::path::PathBuf;

use catalog_client::CatalogClient;
use shared::{Product, ProductId};

use super::error::{AdminError, AdminResult};
use super::state::{DashboardEvent, DashboardState};
use crate::catalog::export::write_export;
use crate::catalog::filter::ContentFilter;
use crate::catalog::pagination::pagination_controls;
use crate::catalog::processor::PageView;
use crate::catalog::view::ViewState;
use crate::render::Renderer;
use crate::utils::validation::{ProductForm, ValidProduct, validate_product_form};

pub struct Dashboard<C, R> {
    client: C,
    renderer: R,
    filter: ContentFilter,
    state: DashboardState,
    export_dir: PathBuf,
}

impl<C: CatalogClient, R: Renderer> Dashboard<C, R> {
    pub fn new(client: C, renderer: R, filter: ContentFilter, view: ViewState) -> Self {
        Self {
            client,
            renderer,
            filter,
            state: DashboardState::new(view),
            export_dir: PathBuf::from("."),
        }
    }

    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn current_page(&self) -> PageView {
        self.state.page_view()
    }

    /// Product from the current collection (edit form prefill)
    pub fn detail(&self, id: ProductId) -> Option<&Product> {
        self.state.find(id)
    }

    /// Apply a view event and redraw
    pub fn handle(&mut self, event: DashboardEvent) {
        self.transition(event);
        self.render();
    }

    pub fn render(&mut self) {
        let page = self.state.page_view();
        let controls = pagination_controls(page.page, page.total_pages);
        self.renderer.render_page(&page, &self.state.view, &controls);
    }

    /// Show one product
    pub fn show(&mut self, id: ProductId) -> AdminResult<()> {
        let product = self.state.find(id).ok_or(AdminError::UnknownProduct(id))?;
        self.renderer.render_detail(product);
        Ok(())
    }

    /// Fetch the whole collection, screen it and replace the current one
    ///
    /// A failure keeps the previous products on screen; there is no retry.
    pub async fn reload(&mut self) -> AdminResult<()> {
        self.transition(DashboardEvent::LoadStarted);
        self.renderer.render_loading();

        match self.client.fetch_all().await {
            Ok(products) => {
                let products = self.filter.apply(products);
                self.transition(DashboardEvent::Loaded(products));
                self.render();
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load products");
                let message = e.to_string();
                self.transition(DashboardEvent::LoadFailed(message.clone()));
                self.render();
                self.renderer.render_load_failed(&message);
                self.renderer.notify("Failed to load products");
                Err(e.into())
            }
        }
    }

    /// Validate and `PUT` the edit form, then reload everything
    ///
    /// On any error the caller keeps the form so it can be corrected and resent.
    pub async fn save_edit(&mut self, id: ProductId, form: &ProductForm) -> AdminResult<()> {
        if self.state.find(id).is_none() {
            return Err(AdminError::UnknownProduct(id));
        }
        let valid = self.validate(form)?;

        match self.client.update(id, &valid.into_update()).await {
            Ok(()) => {
                tracing::info!(id, "Product updated");
                self.renderer.notify("Update succeeded (PUT)");
                self.reload_after_write().await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "Update failed");
                self.renderer
                    .notify(&format!("Update failed, the API may reject PUT: {e}"));
                Err(e.into())
            }
        }
    }

    /// Validate and `POST` the create form, then reload everything
    pub async fn create(&mut self, form: &ProductForm) -> AdminResult<()> {
        let valid = self.validate(form)?;

        match self.client.create(&valid.into_create(form)).await {
            Ok(()) => {
                tracing::info!("Product created");
                self.renderer.notify("Create succeeded (POST)");
                self.reload_after_write().await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Create failed");
                self.renderer
                    .notify(&format!("Create failed, the API may reject POST: {e}"));
                Err(e.into())
            }
        }
    }

    /// Write the page currently on screen as CSV
    pub async fn export(&mut self) -> AdminResult<PathBuf> {
        let page = self.state.page_view();

        match write_export(&self.export_dir, &page.items).await {
            Ok(path) => {
                self.renderer
                    .notify(&format!("Exported current page to {}", path.display()));
                Ok(path)
            }
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                self.renderer.notify(&format!("Export failed: {e}"));
                Err(e.into())
            }
        }
    }

    fn validate(&mut self, form: &ProductForm) -> AdminResult<ValidProduct> {
        validate_product_form(form).map_err(|e| {
            tracing::debug!(fields = ?e.fields(), "Form rejected");
            self.renderer.render_validation(&e);
            AdminError::Validation(e)
        })
    }

    // The write already succeeded; a failed refresh is reported by `reload`
    async fn reload_after_write(&mut self) {
        if let Err(e) = self.reload().await {
            tracing::debug!(error = %e, "Refresh after write failed");
        }
    }

    fn transition(&mut self, event: DashboardEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(event);
    }
}
