use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::engine::EngineOptions;
use crate::prune::Thresholds;

/// Fetch transport settings (optional section in config.toml).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchConfig {
    /// User-agent strings to rotate through; empty means the built-in list.
    #[serde(default)]
    pub user_agents: Vec<String>,
    /// Optional proxy URL passed to libcurl (e.g. "http://127.0.0.1:3128").
    #[serde(default)]
    pub proxy: Option<String>,
}

/// Global configuration loaded from `~/.config/urlprune/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PruneConfig {
    /// Number of URLs submitted to the worker pool per chunk.
    pub chunk_size: usize,
    /// Maximum number of URLs evaluated concurrently.
    pub pool_size: usize,
    /// Wall-clock budget for one URL (baseline plus all variants), in seconds.
    pub task_timeout_secs: u64,
    /// Per-request fetch timeout in seconds.
    pub fetch_timeout_secs: u64,
    /// Keep/drop thresholds; if missing, built-in defaults are used.
    #[serde(default)]
    pub thresholds: Option<Thresholds>,
    /// Regions used by the phone-number guard; if missing, built-in defaults are used.
    #[serde(default)]
    pub phone_regions: Option<Vec<String>>,
    #[serde(default)]
    pub fetch: Option<FetchConfig>,
}

impl Default for PruneConfig {
    fn default() -> Self {
        Self {
            chunk_size: 200,
            pool_size: 4,
            task_timeout_secs: 3600,
            fetch_timeout_secs: 3,
            thresholds: None,
            phone_regions: None,
            fetch: None,
        }
    }
}

impl PruneConfig {
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            chunk_size: self.chunk_size.max(1),
            pool_size: self.pool_size.max(1),
            task_timeout: Duration::from_secs(self.task_timeout_secs),
            fetch_timeout: Duration::from_secs(self.fetch_timeout_secs),
        }
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlprune")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PruneConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PruneConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: PruneConfig = toml::from_str(&data)?;
    Ok(cfg)
}
