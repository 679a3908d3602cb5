//! `urlprune train` – learn a rule table from sampled URLs.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use urlprune_core::config::PruneConfig;
use urlprune_core::dataset::{read_nonempty_records, write_rule_table};
use urlprune_core::fetch::CurlFetcher;
use urlprune_core::pipeline::Pipeline;

use super::progress;

pub async fn run_train(cfg: &PruneConfig, input: &Path, rules_path: &Path) -> Result<()> {
    let training = read_nonempty_records(input)?;
    let fetcher = Arc::new(CurlFetcher::from_config(cfg.fetch.as_ref()));
    let pipeline = Pipeline::from_config(cfg, fetcher);

    let (progress_tx, progress_handle) = progress::spawn_printer();
    let rules = pipeline.train(&training, Some(progress_tx)).await;
    let _ = progress_handle.await;
    let rules = rules?;

    write_rule_table(rules_path, &rules)
        .with_context(|| format!("write rule table {}", rules_path.display()))?;
    println!("Wrote {} rule(s) to {}", rules.len(), rules_path.display());
    Ok(())
}
