use svd_core::logging;

mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    let guard = match logging::init_logging() {
        Ok(guard) => Some(guard),
        Err(err) => {
            logging::init_logging_stderr();
            tracing::warn!("file logging unavailable: {:#}", err);
            None
        }
    };

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args().await {
        eprintln!("svd error: {:#}", err);
        // exit() skips destructors; flush the log writer first.
        drop(guard);
        std::process::exit(1);
    }
}
