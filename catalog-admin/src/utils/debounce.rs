//! Cancellable delay for coalescing rapid input
//!
//! Each `schedule` cancels whatever is pending through an explicit
//! [`CancellationToken`]; only the last action within a quiet period runs.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Quiet period used for search input
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<CancellationToken>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Run `action` after the quiet period unless another call supersedes it
    pub fn schedule<F>(&mut self, action: F) -> JoinHandle<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let token = CancellationToken::new();
        self.pending = Some(token.clone());

        let delay = self.delay;
        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    tracing::trace!("Debounced action superseded");
                }
                _ = tokio::time::sleep(delay) => {
                    action.await;
                }
            }
        })
    }

    /// Drop the pending action, if any
    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|t| !t.is_cancelled())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_only_last_action_runs() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(250));

        let mut handles = Vec::new();
        for query in ["m", "mi", "mil", "milk"] {
            let tx = tx.clone();
            handles.push(debouncer.schedule(async move {
                let _ = tx.send(query);
            }));
            tokio::time::advance(Duration::from_millis(100)).await;
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(rx.recv().await, Some("milk"));
        drop(tx);
        drop(debouncer);
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_actions_all_run() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(250));

        for _ in 0..3 {
            let counter = counter.clone();
            let handle = debouncer.schedule(async move {
                counter.fetch_add(1, Ordering::SeqCst);
            });
            handle.await.unwrap();
        }
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_action() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::default();

        let c = counter.clone();
        let handle = debouncer.schedule(async move {
            c.fetch_add(1, Ordering::SeqCst);
        });
        assert!(debouncer.is_pending());

        debouncer.cancel();
        assert!(!debouncer.is_pending());
        handle.await.unwrap();
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }
}
