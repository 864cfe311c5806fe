//! Download trigger: invoked when the user picks one of the listed formats.
//!
//! No download protocol is defined yet; [`LoggingTrigger`] only records the
//! request.

use crate::fetch::FormatOption;
use anyhow::Result;

/// Collaborator that starts the download of a selected format.
pub trait DownloadTrigger {
    fn trigger(&self, option: &FormatOption) -> Result<()>;
}

/// Records download intent in the log and does nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingTrigger;

impl DownloadTrigger for LoggingTrigger {
    fn trigger(&self, option: &FormatOption) -> Result<()> {
        tracing::info!(
            resolution = %option.resolution,
            size = %option.size,
            source = %option.source_reference,
            "download requested"
        );
        Ok(())
    }
}
