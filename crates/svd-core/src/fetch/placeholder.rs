//! Placeholder collaborator returning a fixed set of formats.

use super::{FetchCollaborator, FetchError, FetchPayload, FetchRequest, FormatOption};
use crate::control::CancelToken;
use async_trait::async_trait;

/// The fixed 1080p / 720p / MP3 triple, in display order.
pub fn placeholder_formats() -> Vec<FormatOption> {
    vec![
        FormatOption::new("1080p", "50MB", "video-url-1080p"),
        FormatOption::new("720p", "30MB", "video-url-720p"),
        FormatOption::new("MP3", "5MB", "audio-url"),
    ]
}

/// Collaborator that never touches the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderFetcher;

impl PlaceholderFetcher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FetchCollaborator for PlaceholderFetcher {
    async fn fetch(
        &self,
        request: &FetchRequest,
        _cancel: &CancelToken,
    ) -> Result<FetchPayload, FetchError> {
        tracing::debug!(url = %request.url, "returning placeholder formats");
        Ok(FetchPayload {
            formats: placeholder_formats(),
        })
    }
}
