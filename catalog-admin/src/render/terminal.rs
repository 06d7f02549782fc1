//! Plain-text renderer for the interactive console

use std::io::{self, Write};

use shared::{Product, ValidationError};

use super::{Renderer, safe_image};
use crate::catalog::export::format_number;
use crate::catalog::pagination::PageControl;
use crate::catalog::processor::PageView;
use crate::catalog::view::{SortField, ViewState};

const TITLE_WIDTH: usize = 36;
const CATEGORY_WIDTH: usize = 14;

/// Writes tables and messages to any `Write` (stdout in the binary)
pub struct TerminalRenderer<W: Write + Send> {
    out: W,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_page(
        &mut self,
        page: &PageView,
        view: &ViewState,
        controls: &[PageControl],
    ) -> io::Result<()> {
        let out = &mut self.out;
        writeln!(out)?;
        writeln!(out, "{}", page.count_label())?;
        if !view.query.is_empty() {
            writeln!(out, "Search: \"{}\"", view.query)?;
        }
        writeln!(
            out,
            "{:>5} | {:<tw$} | {:>10} | {:<cw$} | Image",
            "ID",
            format!("Title {}", view.sort_indicator(SortField::Title)),
            format!("Price {}", view.sort_indicator(SortField::Price)),
            "Category",
            tw = TITLE_WIDTH,
            cw = CATEGORY_WIDTH,
        )?;
        writeln!(
            out,
            "{}",
            "-".repeat(5 + TITLE_WIDTH + 10 + CATEGORY_WIDTH + 20)
        )?;

        for p in &page.items {
            writeln!(
                out,
                "{:>5} | {:<tw$} | {:>10} | {:<cw$} | {}",
                p.id,
                truncate(&p.title, TITLE_WIDTH),
                p.price.map(format_number).unwrap_or_default(),
                truncate(p.category_name().unwrap_or_default(), CATEGORY_WIDTH),
                safe_image(p),
                tw = TITLE_WIDTH,
                cw = CATEGORY_WIDTH,
            )?;
        }

        writeln!(out, "{}", page.range_label())?;
        writeln!(out, "{}", pagination_bar(controls))?;
        out.flush()
    }

    fn write_detail(&mut self, p: &Product) -> io::Result<()> {
        let out = &mut self.out;
        writeln!(out)?;
        writeln!(out, "#{} {}", p.id, p.title)?;
        writeln!(
            out,
            "  Price:       {}",
            p.price.map(format_number).unwrap_or_default()
        )?;
        writeln!(
            out,
            "  Category:    {}",
            p.category_name().unwrap_or_default()
        )?;
        writeln!(out, "  Image:       {}", safe_image(p))?;
        writeln!(out, "  Description: {}", p.description)?;
        out.flush()
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")?;
        self.out.flush()
    }

    fn report(result: io::Result<()>) {
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }
}

impl<W: Write + Send> Renderer for TerminalRenderer<W> {
    fn render_loading(&mut self) {
        Self::report(self.write_line("Loading..."));
    }

    fn render_page(&mut self, page: &PageView, view: &ViewState, controls: &[PageControl]) {
        let result = self.write_page(page, view, controls);
        Self::report(result);
    }

    fn render_load_failed(&mut self, message: &str) {
        Self::report(self.write_line(&format!("Could not load products: {message}")));
    }

    fn notify(&mut self, message: &str) {
        Self::report(self.write_line(&format!(">> {message}")));
    }

    fn render_detail(&mut self, product: &Product) {
        let result = self.write_detail(product);
        Self::report(result);
    }

    fn render_validation(&mut self, error: &ValidationError) {
        for e in error.errors() {
            Self::report(self.write_line(&format!("  ✗ {}: {}", e.field, e.message)));
        }
    }

    fn prompt(&mut self, label: &str) {
        let result = write!(self.out, "{label}").and_then(|_| self.out.flush());
        Self::report(result);
    }
}

/// `(Prev) [1] 2 3 … 9 Next`: disabled buttons in parentheses, current page in brackets
pub fn pagination_bar(controls: &[PageControl]) -> String {
    controls
        .iter()
        .map(|c| match c {
            PageControl::Prev { disabled: true } | PageControl::Next { disabled: true } => {
                format!("({})", c.label())
            }
            PageControl::Page { active: true, .. } => format!("[{}]", c.label()),
            _ => c.label(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut s: String = text.chars().take(width.saturating_sub(1)).collect();
        s.push('…');
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::pagination::pagination_controls;
    use crate::catalog::processor::recompute;
    use shared::{Category, FieldError, FormField};

    fn products() -> Vec<Product> {
        vec![
            Product {
                id: 1,
                title: "Milk".into(),
                price: Some(3.0),
                description: "Fresh".into(),
                category: Some(Category::named("Grocery")),
                images: Some(vec!["https://img/milk.png".into()]),
            },
            Product {
                id: 2,
                title: "Bread".into(),
                price: Some(2.5),
                description: "Rye".into(),
                category: None,
                images: None,
            },
        ]
    }

    fn output(renderer: TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_render_page() {
        let view = ViewState::default().set_sort(SortField::Price);
        let page = recompute(&products(), &view);
        let controls = pagination_controls(page.page, page.total_pages);

        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render_page(&page, &view, &controls);
        let text = output(renderer);

        assert!(text.contains("Showing 2 items"));
        assert!(text.contains("Price ▲"));
        assert!(text.contains("Title ⬍"));
        assert!(text.contains("Items 1-2 / 2"));
        assert!(text.contains("(Prev) [1] (Next)"));
        assert!(text.find("Bread").unwrap() < text.find("Milk").unwrap());
        assert!(text.contains("https://placehold.co/80x80?text=No+Img"));
    }

    #[test]
    fn test_render_empty_page() {
        let view = ViewState::default().set_query("nothing");
        let page = recompute(&products(), &view);
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render_page(&page, &view, &pagination_controls(1, 1));
        let text = output(renderer);
        assert!(text.contains("Showing 0 items"));
        assert!(text.contains("No data"));
        assert!(text.contains("Search: \"nothing\""));
    }

    #[test]
    fn test_render_validation_marks_fields() {
        let err = ValidationError::new(vec![FieldError::new(
            FormField::Title,
            "title must be at least 3 characters",
        )]);
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render_validation(&err);
        assert_eq!(
            output(renderer),
            "  ✗ title: title must be at least 3 characters\n"
        );
    }

    #[test]
    fn test_pagination_bar() {
        let bar = pagination_bar(&pagination_controls(10, 20));
        assert_eq!(bar, "Prev 1 … 5 6 7 8 9 [10] 11 12 13 14 15 … 20 Next");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }
}
