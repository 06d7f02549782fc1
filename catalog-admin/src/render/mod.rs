//! Rendering interface
//!
//! The controller only talks to [`Renderer`]; the terminal implementation is
//! one of possibly several front ends.

mod terminal;

pub use terminal::TerminalRenderer;

use shared::{Product, ValidationError};

use crate::catalog::pagination::PageControl;
use crate::catalog::processor::PageView;
use crate::catalog::view::ViewState;

/// Shown for products without a usable image URL
pub const PLACEHOLDER_THUMBNAIL: &str = "https://placehold.co/80x80?text=No+Img";

pub trait Renderer: Send {
    /// Fetch outstanding
    fn render_loading(&mut self);

    fn render_page(&mut self, page: &PageView, view: &ViewState, controls: &[PageControl]);

    /// Initial or refresh load failed; replaces the count line
    fn render_load_failed(&mut self, message: &str);

    /// Transient notification
    fn notify(&mut self, message: &str);

    fn render_detail(&mut self, product: &Product);

    /// Marks the offending form fields
    fn render_validation(&mut self, error: &ValidationError);

    /// Ask for one line of input
    fn prompt(&mut self, label: &str);
}

/// Image URL to display: the first image if it looks like an http(s) URL
pub fn safe_image(product: &Product) -> &str {
    match product.first_image() {
        Some(url) if url.starts_with("http") => url,
        _ => PLACEHOLDER_THUMBNAIL,
    }
}
