//! Reasons a link is rejected by the validator.

use thiserror::Error;

/// Why a submitted link did not pass validation.
///
/// Only used for diagnostics; callers that just need a yes/no answer use
/// [`LinkValidator::validate`](super::LinkValidator::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// Input is not an absolute URL (empty, no scheme, malformed).
    #[error("not a valid URL: {0}")]
    Parse(#[from] url::ParseError),

    /// URL parsed but has no host (e.g. `mailto:` or `data:` URLs).
    #[error("URL has no host")]
    MissingHost,

    /// Host is not on the allow-list.
    #[error("unsupported host: {host}")]
    Unsupported { host: String },
}
