//! `svd shell` – interactive loop over stdin.
//!
//! Each line is a new submission. A line that arrives while the previous
//! fetch is still pending cancels it, and only the latest result is printed.

use super::{build_orchestrator, render_state};
use anyhow::{Context, Result};
use std::sync::Arc;
use svd_core::config::SvdConfig;
use svd_core::control::SubmissionControl;
use svd_core::session::{run_submission, SubmissionState};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;

pub async fn run_shell(cfg: &SvdConfig) -> Result<()> {
    let orchestrator = Arc::new(build_orchestrator(cfg));
    let control = Arc::new(SubmissionControl::new());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending = Vec::new();

    println!("Paste a video link (empty line or Ctrl-D to quit).");
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        let link = line.trim();
        if link.is_empty() {
            break;
        }

        prune_finished(&mut pending);
        let ticket = control.begin();
        let state = SubmissionState::new().edit(link);
        let orchestrator = Arc::clone(&orchestrator);
        let control = Arc::clone(&control);
        pending.push(tokio::spawn(async move {
            let state = run_submission(&state, &orchestrator, &ticket.token).await;
            if control.is_current(ticket.generation) {
                control.finish(ticket.generation);
                println!("{}", render_state(&state));
            }
        }));
    }

    for task in pending {
        task.await.context("submission task")?;
    }
    Ok(())
}

/// Drop handles of submissions that already completed.
fn prune_finished(pending: &mut Vec<JoinHandle<()>>) {
    pending.retain(|task| !task.is_finished());
}
