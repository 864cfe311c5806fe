//! CLI command handlers. Each command is in its own file.

mod check;
mod completions;
mod download;
mod fetch;
mod platforms;
mod shell;

pub use check::run_check;
pub use completions::run_completions;
pub use download::run_download;
pub use fetch::run_fetch;
pub use platforms::run_platforms;
pub use shell::run_shell;

pub(crate) use download::request_download;
pub(crate) use fetch::fetch_report;

use anyhow::Result;
use svd_core::config::SvdConfig;
use svd_core::control::{SubmissionCancelled, SubmissionControl};
use svd_core::fetch::{build_fetcher, FetchCollaborator};
use svd_core::link::LinkValidator;
use svd_core::orchestrator::RequestOrchestrator;
use svd_core::session::{run_submission, Phase, SubmissionState};

pub(crate) type Orchestrator = RequestOrchestrator<Box<dyn FetchCollaborator>>;

/// Orchestrator wired to the configured backend and host-matching mode.
pub(crate) fn build_orchestrator(cfg: &SvdConfig) -> Orchestrator {
    RequestOrchestrator::with_validator(build_fetcher(cfg), LinkValidator::new(cfg.host_match))
}

/// Run one submission to completion. Ctrl-C cancels the in-flight fetch.
pub(crate) async fn submit_once(cfg: &SvdConfig, url: &str) -> Result<SubmissionState> {
    let orchestrator = build_orchestrator(cfg);
    let control = SubmissionControl::new();
    let ticket = control.begin();

    let interrupt = {
        let token = ticket.token.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                token.cancel();
            }
        })
    };

    let state = SubmissionState::new().edit(url);
    let state = run_submission(&state, &orchestrator, &ticket.token).await;
    interrupt.abort();
    control.finish(ticket.generation);

    if ticket.token.is_cancelled() && state.phase() == &Phase::Idle {
        return Err(SubmissionCancelled.into());
    }
    Ok(state)
}

/// Human-readable rendering of a settled submission.
pub(crate) fn render_state(state: &SubmissionState) -> String {
    if let Some(message) = state.error_message() {
        return message.to_string();
    }
    match state.platform() {
        Some(platform) => {
            let mut out = format!("Platform: {platform}");
            for f in state.formats() {
                out.push_str(&format!("\n  {} ({})", f.resolution, f.size));
            }
            out
        }
        None => String::new(),
    }
}
