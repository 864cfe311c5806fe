//! Submission lifecycle as an immutable state record.
//!
//! ```text
//! Idle -> Validating -> Invalid
//!                    -> Fetching -> Success
//!                                -> Failure
//! ```
//!
//! Every transition returns a new [`SubmissionState`]; the old value is never
//! mutated. Editing the link from any phase returns to `Idle`, which also
//! discards an in-flight fetch: a later [`settle`](SubmissionState::settle)
//! for it is ignored.

use crate::control::CancelToken;
use crate::fetch::{FetchCollaborator, FormatOption};
use crate::link::{LinkValidator, SupportedPlatform, INVALID_LINK_MESSAGE};
use crate::orchestrator::RequestOrchestrator;
use crate::result::FetchResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    Invalid {
        message: &'static str,
    },
    Fetching,
    Success {
        platform: SupportedPlatform,
        formats: Vec<FormatOption>,
    },
    Failure {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionState {
    link: String,
    phase: Phase,
}

impl Default for SubmissionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionState {
    /// Empty link, idle.
    pub fn new() -> Self {
        Self {
            link: String::new(),
            phase: Phase::Idle,
        }
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    fn with_phase(&self, phase: Phase) -> Self {
        Self {
            link: self.link.clone(),
            phase,
        }
    }

    /// New link text. Always lands in `Idle`.
    pub fn edit(&self, text: impl Into<String>) -> Self {
        Self {
            link: text.into(),
            phase: Phase::Idle,
        }
    }

    /// Start a submission. Ignored while one is already validating or fetching.
    pub fn submit(&self) -> Self {
        if self.can_submit() {
            self.with_phase(Phase::Validating)
        } else {
            self.clone()
        }
    }

    /// Resolve `Validating` into `Invalid` or `Fetching`.
    pub fn validated(&self, validator: &LinkValidator) -> Self {
        if self.phase != Phase::Validating {
            return self.clone();
        }
        if validator.validate(&self.link) {
            self.with_phase(Phase::Fetching)
        } else {
            tracing::debug!(link = %self.link, "rejected link");
            self.with_phase(Phase::Invalid {
                message: INVALID_LINK_MESSAGE,
            })
        }
    }

    /// Apply the fetch outcome. Ignored unless the state is `Fetching`.
    pub fn settle(&self, result: FetchResult) -> Self {
        if self.phase != Phase::Fetching {
            tracing::debug!("dropping fetch result for a superseded submission");
            return self.clone();
        }
        match result {
            FetchResult::Success { platform, formats } => {
                self.with_phase(Phase::Success { platform, formats })
            }
            FetchResult::Failure { message } => self.with_phase(Phase::Failure { message }),
        }
    }

    /// Abandon an in-flight fetch, keeping the link.
    pub fn cancel(&self) -> Self {
        if self.phase == Phase::Fetching {
            self.with_phase(Phase::Idle)
        } else {
            self.clone()
        }
    }

    pub fn can_submit(&self) -> bool {
        !matches!(self.phase, Phase::Validating | Phase::Fetching)
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Fetching
    }

    /// Error text to show, if the submission ended in an error.
    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Invalid { message } => Some(*message),
            Phase::Failure { message } => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn platform(&self) -> Option<SupportedPlatform> {
        match &self.phase {
            Phase::Success { platform, .. } => Some(*platform),
            _ => None,
        }
    }

    /// Formats to list; empty unless the submission succeeded.
    pub fn formats(&self) -> &[FormatOption] {
        match &self.phase {
            Phase::Success { formats, .. } => formats,
            _ => &[],
        }
    }

    /// The fetch outcome, once the submission has settled.
    pub fn fetch_result(&self) -> Option<FetchResult> {
        match &self.phase {
            Phase::Success { platform, formats } => Some(FetchResult::Success {
                platform: *platform,
                formats: formats.clone(),
            }),
            Phase::Failure { message } => Some(FetchResult::Failure {
                message: message.clone(),
            }),
            _ => None,
        }
    }
}

/// Drive one submission of `state`'s link through validation and fetch.
///
/// Invalid links never reach the collaborator. If `token` is cancelled while
/// fetching, the returned state is `Idle` with the same link.
pub async fn run_submission<F: FetchCollaborator>(
    state: &SubmissionState,
    orchestrator: &RequestOrchestrator<F>,
    token: &CancelToken,
) -> SubmissionState {
    let checked = state.submit().validated(orchestrator.validator());
    if !checked.is_loading() {
        return checked;
    }
    match orchestrator
        .process_cancellable(checked.link(), token)
        .await
    {
        Some(result) => checked.settle(result),
        None => checked.cancel(),
    }
}
