//! Cleaned-URL output rows.

use std::path::Path;

use anyhow::{Context, Result};

/// One cleaned URL. `params_dropped` and `params_kept` partition the
/// distinct parameter names of `canonical_url`, each in original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanUrlResult {
    pub url_id: String,
    pub canonical_url: String,
    pub clean_url: String,
    pub params_dropped: Vec<String>,
    pub params_kept: Vec<String>,
}

const HEADER: [&str; 5] = [
    "url_id",
    "canonical_url",
    "clean_url",
    "params_dropped",
    "params_kept",
];

/// Writes results as a tab-separated file with a header row. List columns
/// are JSON arrays; no field is ever quoted.
pub fn write_results(path: &Path, results: &[CleanUrlResult]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;

    writer.write_record(HEADER)?;
    for r in results {
        let dropped = serde_json::to_string(&r.params_dropped)?;
        let kept = serde_json::to_string(&r.params_kept)?;
        writer.write_record([
            r.url_id.as_str(),
            r.canonical_url.as_str(),
            r.clean_url.as_str(),
            dropped.as_str(),
            kept.as_str(),
        ])?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = results.len(), "wrote cleaned urls");
    Ok(())
}
