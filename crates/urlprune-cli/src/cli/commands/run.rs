//! `urlprune run` – train on a sample, then clean the full set.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use urlprune_core::config::PruneConfig;
use urlprune_core::dataset::{read_nonempty_records, write_results, write_rule_table};
use urlprune_core::fetch::CurlFetcher;
use urlprune_core::pipeline::Pipeline;

use super::progress;

pub async fn run_pipeline(
    cfg: &PruneConfig,
    train: &Path,
    full: &Path,
    output: &Path,
    rules_path: Option<&Path>,
) -> Result<()> {
    // Read both inputs before any fetching so malformed files fail fast.
    let training = read_nonempty_records(train)?;
    let records = read_nonempty_records(full)?;

    let fetcher = Arc::new(CurlFetcher::from_config(cfg.fetch.as_ref()));
    let pipeline = Pipeline::from_config(cfg, fetcher);

    let (progress_tx, progress_handle) = progress::spawn_printer();
    let rules = pipeline.train(&training, Some(progress_tx)).await;
    let _ = progress_handle.await;
    let rules = rules?;

    if let Some(path) = rules_path {
        write_rule_table(path, &rules)
            .with_context(|| format!("write rule table {}", path.display()))?;
    }

    let results = pipeline.clean(&records, &rules);
    write_results(output, &results).with_context(|| format!("write results {}", output.display()))?;
    tracing::info!(rules = rules.len(), urls = results.len(), "run complete");
    println!("Cleaned {} url(s) into {}", results.len(), output.display());
    Ok(())
}
