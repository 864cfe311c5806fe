//! `svd download <url> --format <resolution>` – request the download of one format.

use super::submit_once;
use anyhow::{bail, Context, Result};
use svd_core::config::SvdConfig;
use svd_core::download::{DownloadTrigger, LoggingTrigger};
use svd_core::fetch::FormatOption;

pub async fn run_download(cfg: &SvdConfig, url: &str, format: &str) -> Result<()> {
    let option = request_download(cfg, url, format, &LoggingTrigger).await?;
    println!("Download requested: {} ({})", option.resolution, option.size);
    Ok(())
}

/// Look up `url`, pick the option labelled `format` (case-insensitive) and
/// hand it to `trigger`. Returns the option that was triggered.
pub(crate) async fn request_download<T: DownloadTrigger + ?Sized>(
    cfg: &SvdConfig,
    url: &str,
    format: &str,
    trigger: &T,
) -> Result<FormatOption> {
    let state = submit_once(cfg, url).await?;
    if let Some(message) = state.error_message() {
        bail!("{message}");
    }
    let result = state
        .fetch_result()
        .context("submission did not settle")?;
    let Some(option) = result.format(format) else {
        let available: Vec<&str> = result
            .formats()
            .iter()
            .map(|f| f.resolution.as_str())
            .collect();
        bail!(
            "format {format:?} not offered for this link (available: {})",
            available.join(", ")
        );
    };

    trigger.trigger(option)?;
    Ok(option.clone())
}
