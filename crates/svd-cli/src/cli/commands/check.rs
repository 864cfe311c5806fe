//! `svd check <url>` – validate a link and show its platform.

use anyhow::{bail, Result};
use svd_core::config::SvdConfig;
use svd_core::link::{LinkValidator, INVALID_LINK_MESSAGE};

pub fn run_check(cfg: &SvdConfig, url: &str) -> Result<()> {
    let validator = LinkValidator::new(cfg.host_match);
    match validator.check(url) {
        Ok(platform) => {
            println!("{platform}: {url}");
            Ok(())
        }
        Err(err) => {
            tracing::debug!(url, error = %err, "check rejected link");
            bail!("{INVALID_LINK_MESSAGE} ({err})")
        }
    }
}
