//! `svd fetch <url>` – validate a link and list its formats.

use super::{render_state, submit_once};
use anyhow::{bail, Context, Result};
use svd_core::config::SvdConfig;

pub async fn run_fetch(cfg: &SvdConfig, url: &str, json: bool) -> Result<()> {
    println!("{}", fetch_report(cfg, url, json).await?);
    Ok(())
}

/// Text printed by `svd fetch`: the rendered state, or pretty JSON with `--json`.
pub(crate) async fn fetch_report(cfg: &SvdConfig, url: &str, json: bool) -> Result<String> {
    let state = submit_once(cfg, url).await?;
    if let Some(message) = state.error_message() {
        bail!("{message}");
    }
    if !json {
        return Ok(render_state(&state));
    }
    let result = state
        .fetch_result()
        .context("submission did not settle")?;
    Ok(serde_json::to_string_pretty(&result)?)
}
