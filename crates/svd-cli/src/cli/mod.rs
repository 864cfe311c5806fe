//! CLI for the SVD social video downloader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use svd_core::config;

use commands::{
    run_check, run_completions, run_download, run_fetch, run_platforms, run_shell,
};

/// Top-level CLI for the SVD downloader.
#[derive(Debug, Parser)]
#[command(name = "svd")]
#[command(about = "SVD: look up downloadable formats for social media links", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/svd/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check whether a link is supported and which platform it belongs to.
    Check {
        /// Link to check.
        url: String,
    },

    /// Validate a link and list its downloadable formats.
    Fetch {
        /// Social media link (Instagram, YouTube, Twitter/X, Facebook, Pinterest).
        url: String,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Look up formats for a link and request the download of one of them.
    Download {
        /// Social media link.
        url: String,
        /// Format to download, by its label (e.g. 1080p, 720p, MP3).
        #[arg(long, short = 'f', value_name = "RESOLUTION")]
        format: String,
    },

    /// List supported platforms and their domains.
    Platforms,

    /// Read links from stdin, one per line; each new line supersedes the previous one.
    Shell,

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check { url } => run_check(&cfg, &url)?,
            CliCommand::Fetch { url, json } => run_fetch(&cfg, &url, json).await?,
            CliCommand::Download { url, format } => run_download(&cfg, &url, &format).await?,
            CliCommand::Platforms => run_platforms(&cfg),
            CliCommand::Shell => run_shell(&cfg).await?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
