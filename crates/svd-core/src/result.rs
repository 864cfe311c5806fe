//! Display model produced for a validated submission.

use crate::fetch::FormatOption;
use crate::link::SupportedPlatform;
use serde::Serialize;

/// Message shown for every fetch failure, whatever the cause.
pub const FETCH_FAILURE_MESSAGE: &str = "Failed to fetch video details. Try again.";

/// Outcome of processing one validated link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FetchResult {
    Success {
        platform: SupportedPlatform,
        formats: Vec<FormatOption>,
    },
    Failure {
        message: String,
    },
}

impl FetchResult {
    /// The generic failure result.
    pub fn failure() -> Self {
        FetchResult::Failure {
            message: FETCH_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchResult::Success { .. })
    }

    pub fn platform(&self) -> Option<SupportedPlatform> {
        match self {
            FetchResult::Success { platform, .. } => Some(*platform),
            FetchResult::Failure { .. } => None,
        }
    }

    /// Formats in collaborator order; empty on failure.
    pub fn formats(&self) -> &[FormatOption] {
        match self {
            FetchResult::Success { formats, .. } => formats,
            FetchResult::Failure { .. } => &[],
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchResult::Success { .. } => None,
            FetchResult::Failure { message } => Some(message.as_str()),
        }
    }

    /// Finds a format by its resolution label (case-insensitive).
    pub fn format(&self, resolution: &str) -> Option<&FormatOption> {
        self.formats()
            .iter()
            .find(|f| f.resolution.eq_ignore_ascii_case(resolution))
    }
}
