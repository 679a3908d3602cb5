//! CLI for urlprune.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use urlprune_core::config::{self, PruneConfig};

use commands::{run_apply, run_pipeline, run_probe, run_train, run_variants};

/// Top-level CLI for urlprune.
#[derive(Debug, Parser)]
#[command(name = "urlprune")]
#[command(about = "Learn which query parameters matter and prune the rest", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub overrides: EngineOverrides,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Per-invocation overrides for the evaluation engine settings in config.toml.
#[derive(Debug, Default, Args)]
pub struct EngineOverrides {
    /// Evaluate up to N URLs concurrently.
    #[arg(long, global = true, value_name = "N")]
    pub jobs: Option<usize>,
    /// Number of URLs submitted per chunk.
    #[arg(long, global = true, value_name = "N")]
    pub chunk_size: Option<usize>,
    /// Budget for one URL and all its variants, in seconds.
    #[arg(long, global = true, value_name = "SECS")]
    pub task_timeout: Option<u64>,
    /// Timeout for a single page fetch, in seconds.
    #[arg(long, global = true, value_name = "SECS")]
    pub fetch_timeout: Option<u64>,
}

impl EngineOverrides {
    pub fn apply_to(&self, cfg: &mut PruneConfig) {
        if let Some(n) = self.jobs {
            cfg.pool_size = n;
        }
        if let Some(n) = self.chunk_size {
            cfg.chunk_size = n;
        }
        if let Some(s) = self.task_timeout {
            cfg.task_timeout_secs = s;
        }
        if let Some(s) = self.fetch_timeout {
            cfg.fetch_timeout_secs = s;
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Train on a sample, then clean the full URL set.
    Run {
        /// TSV of training URLs (column canonical_url, optional url_id and full_domain).
        #[arg(long, value_name = "PATH")]
        train: PathBuf,
        /// TSV of URLs to clean.
        #[arg(long, value_name = "PATH")]
        full: PathBuf,
        /// Where to write the cleaned URL TSV.
        #[arg(long, value_name = "PATH")]
        output: PathBuf,
        /// Also save the learned rule table here.
        #[arg(long, value_name = "PATH")]
        rules: Option<PathBuf>,
    },

    /// Learn per-domain parameter rules and write them to a rule table.
    Train {
        #[arg(long, value_name = "PATH")]
        input: PathBuf,
        #[arg(long, value_name = "PATH")]
        rules: PathBuf,
    },

    /// Clean URLs with a previously trained rule table.
    Apply {
        #[arg(long, value_name = "PATH")]
        rules: PathBuf,
        #[arg(long, value_name = "PATH")]
        input: PathBuf,
        #[arg(long, value_name = "PATH")]
        output: PathBuf,
    },

    /// Fetch one URL and its variants and print the comparison rows.
    Probe {
        url: String,
    },

    /// Print the variants that would be fetched for a URL.
    Variants {
        url: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        cli.overrides.apply_to(&mut cfg);
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Run {
                train,
                full,
                output,
                rules,
            } => run_pipeline(&cfg, &train, &full, &output, rules.as_deref()).await?,
            CliCommand::Train { input, rules } => run_train(&cfg, &input, &rules).await?,
            CliCommand::Apply {
                rules,
                input,
                output,
            } => run_apply(&cfg, &rules, &input, &output)?,
            CliCommand::Probe { url } => run_probe(&cfg, &url).await?,
            CliCommand::Variants { url } => run_variants(&url),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
