//! Interactive console
//!
//! One task owns the [`Dashboard`] and reads [`Input`] from a channel. Stdin
//! lines come from a reader thread; debounced searches are sent back into the
//! same channel, so every state change happens on the console task.

mod command;

pub use command::{Command, CommandError, HELP_TEXT};

use std::ops::ControlFlow;
use std::time::Duration;

use catalog_client::CatalogClient;
use shared::ProductId;
use tokio::sync::mpsc;

use crate::catalog::export::format_number;
use crate::core::{AdminError, Dashboard, DashboardEvent};
use crate::render::Renderer;
use crate::utils::debounce::Debouncer;
use crate::utils::validation::ProductForm;

const INPUT_BUFFER: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// One line typed by the user
    Line(String),
    /// Search text whose quiet period elapsed
    Search(String),
    Eof,
}

/// What the console is waiting for when a line is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reading {
    Command,
    /// A form field; searches wait until the form is done
    Form,
}

const COMMAND_PROMPT: &str = "> ";

pub struct Console<C, R> {
    dashboard: Dashboard<C, R>,
    debouncer: Debouncer,
    /// Search that became due while a form was open
    deferred_search: Option<String>,
    tx: mpsc::Sender<Input>,
    rx: mpsc::Receiver<Input>,
}

impl<C: CatalogClient, R: Renderer> Console<C, R> {
    pub fn new(dashboard: Dashboard<C, R>, search_debounce: Duration) -> Self {
        let (tx, rx) = mpsc::channel(INPUT_BUFFER);
        Self {
            dashboard,
            debouncer: Debouncer::new(search_debounce),
            deferred_search: None,
            tx,
            rx,
        }
    }

    /// Where input lines are fed (stdin reader, tests)
    pub fn sender(&self) -> mpsc::Sender<Input> {
        self.tx.clone()
    }

    pub fn dashboard(&self) -> &Dashboard<C, R> {
        &self.dashboard
    }

    /// Process input until `quit` or end of input
    pub async fn run(&mut self) {
        loop {
            if let Some(query) = self.deferred_search.take() {
                self.dashboard.handle(DashboardEvent::QueryChanged(query));
            }
            self.dashboard.renderer_mut().prompt(COMMAND_PROMPT);
            let Some(line) = self.next_line(Reading::Command).await else {
                break;
            };
            if line.is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(command) => {
                    tracing::debug!(?command, "Console command");
                    if self.execute(command).await.is_break() {
                        break;
                    }
                }
                Err(e) => self.dashboard.renderer_mut().notify(&e.to_string()),
            }
        }
        self.debouncer.cancel();
        tracing::info!("Console closed");
    }

    pub async fn execute(&mut self, command: Command) -> ControlFlow<()> {
        match command {
            Command::Search(query) => self.schedule_search(query),
            Command::Sort(field) => self.dashboard.handle(DashboardEvent::SortClicked(field)),
            Command::Size(size) => self.dashboard.handle(DashboardEvent::PageSizeChanged(size)),
            Command::Page(page) => self.dashboard.handle(DashboardEvent::PageSelected(page)),
            Command::Next => self.dashboard.handle(DashboardEvent::NextPage),
            Command::Prev => self.dashboard.handle(DashboardEvent::PrevPage),
            Command::Show(id) => {
                if let Err(e) = self.dashboard.show(id) {
                    self.dashboard.renderer_mut().notify(&e.to_string());
                }
            }
            Command::Edit(id) => return self.edit(id).await,
            Command::New => return self.create().await,
            Command::Export => {
                // reported through the renderer
                let _ = self.dashboard.export().await;
            }
            Command::Reload => {
                let _ = self.dashboard.reload().await;
            }
            Command::Help => self.dashboard.renderer_mut().notify(HELP_TEXT),
            Command::Quit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    fn schedule_search(&mut self, query: String) {
        let tx = self.tx.clone();
        self.debouncer.schedule(async move {
            if tx.send(Input::Search(query)).await.is_err() {
                tracing::debug!("Console closed before search was applied");
            }
        });
    }

    async fn edit(&mut self, id: ProductId) -> ControlFlow<()> {
        let Some(product) = self.dashboard.detail(id).cloned() else {
            self.dashboard
                .renderer_mut()
                .notify(&AdminError::UnknownProduct(id).to_string());
            return ControlFlow::Continue(());
        };
        self.dashboard.renderer_mut().render_detail(&product);

        let mut form = ProductForm {
            title: product.title,
            price: product.price.map(format_number).unwrap_or_default(),
            description: product.description,
            ..Default::default()
        };

        loop {
            form = match self.fill_edit_form(form).await {
                Some(form) => form,
                None => return ControlFlow::Break(()),
            };
            match self.dashboard.save_edit(id, &form).await {
                Ok(()) => return ControlFlow::Continue(()),
                Err(AdminError::UnknownProduct(id)) => {
                    self.dashboard
                        .renderer_mut()
                        .notify(&AdminError::UnknownProduct(id).to_string());
                    return ControlFlow::Continue(());
                }
                Err(_) => {}
            }
            match self.confirm("Edit again? [y/N]: ").await {
                Some(true) => continue,
                Some(false) => return ControlFlow::Continue(()),
                None => return ControlFlow::Break(()),
            }
        }
    }

    async fn create(&mut self) -> ControlFlow<()> {
        let mut form = ProductForm::default();

        loop {
            form = match self.fill_create_form(form).await {
                Some(form) => form,
                None => return ControlFlow::Break(()),
            };
            if self.dashboard.create(&form).await.is_ok() {
                return ControlFlow::Continue(());
            }
            match self.confirm("Edit again? [y/N]: ").await {
                Some(true) => continue,
                Some(false) => return ControlFlow::Continue(()),
                None => return ControlFlow::Break(()),
            }
        }
    }

    async fn fill_edit_form(&mut self, form: ProductForm) -> Option<ProductForm> {
        Some(ProductForm {
            title: self.ask("Title", &form.title).await?,
            price: self.ask("Price", &form.price).await?,
            description: self.ask("Description", &form.description).await?,
            ..form
        })
    }

    async fn fill_create_form(&mut self, form: ProductForm) -> Option<ProductForm> {
        let title = self.ask("Title", &form.title).await?;
        let price = self.ask("Price", &form.price).await?;
        let description = self.ask("Description", &form.description).await?;
        let category_id = self.ask("Category id", &form.category_id).await?;
        let images = self
            .ask("Image URLs (comma separated)", &form.images.replace('\n', ", "))
            .await?;

        Some(ProductForm {
            title,
            price,
            description,
            category_id,
            images: images
                .split(',')
                .map(str::trim)
                .collect::<Vec<_>>()
                .join("\n"),
        })
    }

    /// `label [current]: `; an empty answer keeps the current value
    async fn ask(&mut self, label: &str, current: &str) -> Option<String> {
        let prompt = if current.is_empty() {
            format!("{label}: ")
        } else {
            format!("{label} [{current}]: ")
        };
        self.dashboard.renderer_mut().prompt(&prompt);

        let answer = self.next_line(Reading::Form).await?;
        Some(if answer.is_empty() {
            current.to_string()
        } else {
            answer
        })
    }

    async fn confirm(&mut self, question: &str) -> Option<bool> {
        self.dashboard.renderer_mut().prompt(question);
        let answer = self.next_line(Reading::Form).await?;
        Some(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
    }

    /// Next trimmed line
    ///
    /// A search that comes due at the command prompt is applied and the prompt
    /// reissued; inside a form only the latest one is kept for later.
    async fn next_line(&mut self, reading: Reading) -> Option<String> {
        loop {
            match self.rx.recv().await? {
                Input::Line(line) => return Some(line.trim().to_string()),
                Input::Search(query) => match reading {
                    Reading::Command => {
                        self.dashboard.handle(DashboardEvent::QueryChanged(query));
                        self.dashboard.renderer_mut().prompt(COMMAND_PROMPT);
                    }
                    Reading::Form => self.deferred_search = Some(query),
                },
                Input::Eof => return None,
            }
        }
    }
}

/// Forward stdin lines into the console channel
///
/// Uses a plain thread: a blocked read must not hold up runtime shutdown.
pub fn spawn_stdin_reader(tx: mpsc::Sender<Input>) {
    std::thread::spawn(move || {
        for line in std::io::stdin().lines() {
            match line {
                Ok(line) => {
                    if tx.blocking_send(Input::Line(line)).is_err() {
                        return;
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read stdin");
                    break;
                }
            }
        }
        let _ = tx.blocking_send(Input::Eof);
    });
}
