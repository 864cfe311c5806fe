use crate::link::HostMatch;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default format-lookup endpoint used by the HTTP backend.
pub const DEFAULT_ENDPOINT: &str = "https://api.social-download-api.com/fetch";

/// Fetch backend: fixed placeholder formats (no network) or the HTTP endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchBackend {
    #[default]
    Placeholder,
    Http,
}

/// Global configuration loaded from `~/.config/svd/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SvdConfig {
    /// How hostnames are compared against the allow-list: "substring" (default) or "suffix".
    #[serde(default)]
    pub host_match: HostMatch,
    /// Fetch backend: "placeholder" (default) or "http".
    #[serde(default)]
    pub fetch_backend: Option<FetchBackend>,
    /// Endpoint the HTTP backend POSTs `{"url": ...}` to.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Connect timeout for the HTTP backend, in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Optional total request timeout in seconds (None = wait indefinitely).
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// Optional User-Agent header for the HTTP backend.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    15
}

impl Default for SvdConfig {
    fn default() -> Self {
        Self {
            host_match: HostMatch::default(),
            fetch_backend: None,
            endpoint: default_endpoint(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: None,
            user_agent: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("svd")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SvdConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SvdConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<SvdConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: SvdConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}
