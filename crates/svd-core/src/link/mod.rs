//! Link validation and platform classification.
//!
//! A link is accepted when it parses as an absolute URL and its hostname
//! matches one of the allow-listed platform domains. Classification walks the
//! same allow-list in priority order, so a link always maps to the first
//! platform whose domain matches.

mod error;
mod platform;

pub use error::LinkError;
pub use platform::{allow_list, SupportedPlatform};

use serde::{Deserialize, Serialize};
use url::Url;

/// Message shown when a submission fails validation.
pub const INVALID_LINK_MESSAGE: &str =
    "Invalid or unsupported URL. Please enter a valid social media link.";

/// How a hostname is compared against an allow-listed domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostMatch {
    /// Host contains the domain anywhere. Permissive: `notinstagram.com.evil.net`
    /// and `dropbox.com` (contains `x.com`) both match.
    #[default]
    Substring,
    /// Host equals the domain or ends with `.` + domain.
    Suffix,
}

impl HostMatch {
    fn matches(self, host: &str, domain: &str) -> bool {
        match self {
            HostMatch::Substring => host.contains(domain),
            HostMatch::Suffix => {
                let host = host.trim_end_matches('.');
                host == domain
                    || host
                        .strip_suffix(domain)
                        .is_some_and(|rest| rest.ends_with('.'))
            }
        }
    }
}

/// Validates submitted links against the platform allow-list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkValidator {
    host_match: HostMatch,
}

impl LinkValidator {
    pub fn new(host_match: HostMatch) -> Self {
        Self { host_match }
    }

    /// Checks `input` and returns the platform it belongs to, or why it was rejected.
    pub fn check(&self, input: &str) -> Result<SupportedPlatform, LinkError> {
        let parsed = Url::parse(input)?;
        let host = parsed
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or(LinkError::MissingHost)?
            .to_ascii_lowercase();

        self.platform_for_host(&host)
            .ok_or(LinkError::Unsupported { host })
    }

    /// True iff `input` is an absolute URL whose host is on the allow-list.
    pub fn validate(&self, input: &str) -> bool {
        self.check(input).is_ok()
    }

    /// Platform for `input`; `Unknown` for anything that does not validate.
    pub fn classify_platform(&self, input: &str) -> SupportedPlatform {
        self.check(input).unwrap_or(SupportedPlatform::Unknown)
    }

    fn platform_for_host(&self, host: &str) -> Option<SupportedPlatform> {
        SupportedPlatform::PRIORITY.into_iter().find(|platform| {
            platform
                .domains()
                .iter()
                .any(|domain| self.host_match.matches(host, domain))
        })
    }
}

/// [`LinkValidator::validate`] with default (substring) host matching.
pub fn validate(input: &str) -> bool {
    LinkValidator::default().validate(input)
}

/// [`LinkValidator::classify_platform`] with default (substring) host matching.
pub fn classify_platform(input: &str) -> SupportedPlatform {
    LinkValidator::default().classify_platform(input)
}

#[cfg(test)]
mod tests;
