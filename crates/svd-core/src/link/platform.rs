//! Supported platforms and the allow-listed domains that identify them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform a link belongs to, derived purely from its hostname.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportedPlatform {
    Instagram,
    YouTube,
    #[serde(rename = "Twitter/X")]
    TwitterX,
    Facebook,
    Pinterest,
    Unknown,
}

impl SupportedPlatform {
    /// Known platforms in classification priority order (first match wins).
    pub const PRIORITY: [SupportedPlatform; 5] = [
        SupportedPlatform::Instagram,
        SupportedPlatform::YouTube,
        SupportedPlatform::TwitterX,
        SupportedPlatform::Facebook,
        SupportedPlatform::Pinterest,
    ];

    /// Allow-listed domains for this platform. Empty for `Unknown`.
    pub fn domains(self) -> &'static [&'static str] {
        match self {
            SupportedPlatform::Instagram => &["instagram.com"],
            SupportedPlatform::YouTube => &["youtube.com", "youtu.be"],
            SupportedPlatform::TwitterX => &["twitter.com", "x.com"],
            SupportedPlatform::Facebook => &["facebook.com"],
            SupportedPlatform::Pinterest => &["pinterest.com"],
            SupportedPlatform::Unknown => &[],
        }
    }

    /// Human-readable name shown to the user.
    pub fn display_name(self) -> &'static str {
        match self {
            SupportedPlatform::Instagram => "Instagram",
            SupportedPlatform::YouTube => "YouTube",
            SupportedPlatform::TwitterX => "Twitter/X",
            SupportedPlatform::Facebook => "Facebook",
            SupportedPlatform::Pinterest => "Pinterest",
            SupportedPlatform::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for SupportedPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Every allow-listed domain, in priority order.
pub fn allow_list() -> impl Iterator<Item = &'static str> {
    SupportedPlatform::PRIORITY
        .into_iter()
        .flat_map(|p| p.domains().iter().copied())
}
