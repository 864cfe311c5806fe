//! Fetch collaborator: the single network boundary that turns a link into
//! a list of downloadable formats.
//!
//! The orchestrator only depends on the [`FetchCollaborator`] trait and does
//! not know which backend (placeholder data or HTTP endpoint) is behind it.

mod http;
mod placeholder;

pub use http::HttpFetcher;
pub use placeholder::{placeholder_formats, PlaceholderFetcher};

use crate::config::{FetchBackend, SvdConfig};
use crate::control::CancelToken;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One downloadable variant of a media item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOption {
    /// Label such as "1080p", "720p" or "MP3".
    pub resolution: String,
    /// Human-readable size, e.g. "50MB".
    pub size: String,
    /// Opaque handle passed to the download trigger.
    #[serde(rename = "url")]
    pub source_reference: String,
}

impl FormatOption {
    pub fn new(
        resolution: impl Into<String>,
        size: impl Into<String>,
        source_reference: impl Into<String>,
    ) -> Self {
        Self {
            resolution: resolution.into(),
            size: size.into(),
            source_reference: source_reference.into(),
        }
    }
}

/// Request body sent to the collaborator: `{"url": "<link>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchRequest {
    pub url: String,
}

impl FetchRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Successful collaborator response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchPayload {
    #[serde(default)]
    pub formats: Vec<FormatOption>,
}

/// Why the collaborator could not produce a payload.
///
/// The orchestrator logs these but never shows them to the user.
#[derive(Debug, Error)]
pub enum FetchError {
    /// libcurl failed (DNS, connect, timeout, TLS, ...).
    #[error("transport error: {0}")]
    Transport(#[from] curl::Error),

    /// Endpoint answered with a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),

    /// Request could not be encoded or response body was not the expected JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Blocking fetch task panicked or was cancelled by the runtime.
    #[error("fetch task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// The submission's cancel token fired before the transfer finished.
    #[error("fetch cancelled")]
    Cancelled,

    /// Any other collaborator-specific failure.
    #[error("{0}")]
    Other(String),
}

/// External call that retrieves format data for a link.
///
/// Implementations that do blocking or long-running work must watch `cancel`
/// and stop early once it fires; dropping the returned future alone does not
/// stop work already handed to another thread.
#[async_trait]
pub trait FetchCollaborator: Send + Sync {
    async fn fetch(
        &self,
        request: &FetchRequest,
        cancel: &CancelToken,
    ) -> Result<FetchPayload, FetchError>;
}

#[async_trait]
impl<T: FetchCollaborator + ?Sized> FetchCollaborator for Box<T> {
    async fn fetch(
        &self,
        request: &FetchRequest,
        cancel: &CancelToken,
    ) -> Result<FetchPayload, FetchError> {
        (**self).fetch(request, cancel).await
    }
}

/// Build the collaborator selected by `cfg.fetch_backend`.
pub fn build_fetcher(cfg: &SvdConfig) -> Box<dyn FetchCollaborator> {
    match cfg.fetch_backend.unwrap_or_default() {
        FetchBackend::Placeholder => Box::new(PlaceholderFetcher::new()),
        FetchBackend::Http => Box::new(HttpFetcher::from_config(cfg)),
    }
}
