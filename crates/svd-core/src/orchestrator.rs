//! Request orchestration: one fetch per validated link, mapped to a [`FetchResult`].
//!
//! The orchestrator does not re-validate and never retries. Any collaborator
//! failure collapses into the generic failure message; the cause only goes to
//! the log.

use crate::control::CancelToken;
use crate::fetch::{FetchCollaborator, FetchRequest};
use crate::link::LinkValidator;
use crate::result::FetchResult;

pub struct RequestOrchestrator<F> {
    fetcher: F,
    validator: LinkValidator,
}

impl<F: FetchCollaborator> RequestOrchestrator<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_validator(fetcher, LinkValidator::default())
    }

    /// Use `validator` (and its host-matching mode) for platform classification.
    pub fn with_validator(fetcher: F, validator: LinkValidator) -> Self {
        Self { fetcher, validator }
    }

    pub fn validator(&self) -> &LinkValidator {
        &self.validator
    }

    /// Fetch formats for `link`. Callers must have validated it first.
    pub async fn process(&self, link: &str) -> FetchResult {
        self.run(link, &CancelToken::new()).await
    }

    /// Like [`process`](Self::process), but gives up as soon as `token` is cancelled.
    ///
    /// Returns `None` when cancelled. The token is also handed to the
    /// collaborator so work it moved off this task stops too.
    pub async fn process_cancellable(&self, link: &str, token: &CancelToken) -> Option<FetchResult> {
        if token.is_cancelled() {
            return None;
        }
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                tracing::info!(url = link, "fetch cancelled");
                None
            }
            result = self.run(link, token) => Some(result),
        }
    }

    async fn run(&self, link: &str, token: &CancelToken) -> FetchResult {
        let request = FetchRequest::new(link);
        match self.fetcher.fetch(&request, token).await {
            Ok(payload) => {
                let platform = self.validator.classify_platform(link);
                tracing::info!(
                    url = link,
                    %platform,
                    formats = payload.formats.len(),
                    "fetched video details"
                );
                FetchResult::Success {
                    platform,
                    formats: payload.formats,
                }
            }
            Err(err) => {
                tracing::warn!(url = link, error = %err, "fetch failed");
                FetchResult::failure()
            }
        }
    }
}
