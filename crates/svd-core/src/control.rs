//! Submission control: cancellation tokens for in-flight fetches.
//!
//! Every submission gets its own [`CancelToken`]. Starting a new submission
//! through [`SubmissionControl::begin`] cancels the token of the one before it,
//! so at most one fetch result is ever applied to the display state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;

/// Error reported when a submission is superseded or aborted by the user.
#[derive(Debug)]
pub struct SubmissionCancelled;

impl std::fmt::Display for SubmissionCancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "submission cancelled")
    }
}

impl std::error::Error for SubmissionCancelled {}

/// Cloneable cancellation flag that async code can wait on.
#[derive(Debug, Clone)]
pub struct CancelToken {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelToken {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolves once [`cancel`](Self::cancel) has been called on any clone.
    pub async fn cancelled(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives as long as `self`, so this only returns once cancelled.
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }
}

/// Handle for one submission: its generation number and cancel token.
#[derive(Debug, Clone)]
pub struct Ticket {
    pub generation: u64,
    pub token: CancelToken,
}

/// Tracks the single in-flight submission.
#[derive(Debug, Default)]
pub struct SubmissionControl {
    current: Mutex<Option<Ticket>>,
    next_generation: AtomicU64,
}

impl SubmissionControl {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> MutexGuard<'_, Option<Ticket>> {
        self.current.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Start a new submission, cancelling whichever one is still in flight.
    pub fn begin(&self) -> Ticket {
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed) + 1;
        let ticket = Ticket {
            generation,
            token: CancelToken::new(),
        };
        if let Some(previous) = self.slot().replace(ticket.clone()) {
            tracing::debug!(
                previous = previous.generation,
                generation,
                "superseding in-flight submission"
            );
            previous.token.cancel();
        }
        ticket
    }

    /// Release a finished submission. A no-op if it has already been superseded.
    pub fn finish(&self, generation: u64) {
        let mut slot = self.slot();
        if slot.as_ref().is_some_and(|t| t.generation == generation) {
            *slot = None;
        }
    }

    /// True if `generation` is the submission currently in flight.
    pub fn is_current(&self, generation: u64) -> bool {
        self.slot()
            .as_ref()
            .is_some_and(|t| t.generation == generation)
    }

    /// Cancel the in-flight submission, if any. Returns whether one was cancelled.
    pub fn cancel_current(&self) -> bool {
        match self.slot().take() {
            Some(ticket) => {
                ticket.token.cancel();
                true
            }
            None => false,
        }
    }
}
