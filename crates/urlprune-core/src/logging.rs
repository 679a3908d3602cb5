//! Tracing setup.
//!
//! The CLI logs to `$XDG_STATE_HOME/urlprune/urlprune.log`. When that file
//! cannot be opened, [`init_logging`] returns an error and the caller falls
//! back to [`init_logging_stderr`]. `RUST_LOG` overrides the default filter.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "urlprune.log";

const DEFAULT_FILTER: &str = "info,urlprune=debug,urlprune_core=debug";

/// Location of the log file, creating its directory if needed.
pub fn log_file_path() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("urlprune")?;
    dirs.place_state_file(LOG_FILE_NAME)
        .context("create log directory")
}

fn open_log(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

/// Installs a subscriber writing plain-text events to the log file.
/// Returns the path written to.
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = open_log(&path)?;

    // Every event goes through the shared handle; `&File` is a writer.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {}", e))?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(path)
}

/// Installs a stderr-only subscriber. Never fails; a second install is ignored.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn log_file_is_appended_not_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        writeln!(open_log(&path).unwrap(), "first").unwrap();
        writeln!(open_log(&path).unwrap(), "second").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn open_log_reports_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_log(&dir.path().join("nope").join(LOG_FILE_NAME)).unwrap_err();
        assert!(err.to_string().contains("open log file"));
    }
}
