//! One unit of work: a URL's baseline plus all of its variants.

use std::sync::Arc;
use std::time::Duration;

use crate::compare::{compare, Comparison};
use crate::fetch::PageFetcher;
use crate::variants::generate;

use super::row::EvaluationRow;

/// Fetches `url` once as the baseline, then fetches every variant (the
/// AA-test copy first) and compares it against the baseline.
///
/// Blocking; the engine runs it on the blocking pool. When the baseline
/// itself fails, variants are not fetched and every row carries the
/// baseline's error.
pub fn evaluate_url(
    url: &str,
    fetcher: &dyn PageFetcher,
    fetch_timeout: Duration,
) -> Vec<EvaluationRow> {
    let baseline = fetcher.fetch(url, fetch_timeout);
    let variants = generate(url);

    if !baseline.success {
        let message = baseline
            .error_message
            .clone()
            .unwrap_or_else(|| format!("baseline fetch failed, url: {}", url));
        tracing::debug!(url, "baseline failed; skipping {} variant(s)", variants.len());
        return variants
            .into_iter()
            .map(|v| EvaluationRow::from_comparison(url, v, Comparison::failed(message.clone())))
            .collect();
    }

    variants
        .into_iter()
        .map(|v| {
            let doc = fetcher.fetch(&v.url, fetch_timeout);
            let cmp = compare(&baseline, &doc);
            EvaluationRow::from_comparison(url, v, cmp)
        })
        .collect()
}

/// Runs [`evaluate_url`] on the blocking pool under `task_timeout`.
///
/// A timeout or a failure of the worker (panic, cancellation) is turned into
/// one synthetic failure row for `url`. A timed-out worker is detached, not
/// killed; its remaining fetches are bounded by `fetch_timeout`.
pub(super) async fn run_unit(
    url: String,
    fetcher: Arc<dyn PageFetcher>,
    fetch_timeout: Duration,
    task_timeout: Duration,
) -> Vec<EvaluationRow> {
    let handle = tokio::task::spawn_blocking({
        let url = url.clone();
        move || evaluate_url(&url, &*fetcher, fetch_timeout)
    });

    match tokio::time::timeout(task_timeout, handle).await {
        Ok(Ok(rows)) => rows,
        Ok(Err(e)) => {
            let message = format!("other error: {}", e);
            tracing::error!(url = %url, "{}", message);
            vec![EvaluationRow::failure(&url, message)]
        }
        Err(_) => {
            let message = format!(
                "evaluation took longer than {} seconds",
                task_timeout.as_secs_f64()
            );
            tracing::error!(url = %url, "{}", message);
            vec![EvaluationRow::failure(&url, message)]
        }
    }
}
