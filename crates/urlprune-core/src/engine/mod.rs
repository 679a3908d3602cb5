//! Parallel fetch-and-compare evaluation.
//!
//! URLs are processed in sequential chunks. Within a chunk, up to
//! `pool_size` URLs are in flight at once; when one finishes, the next
//! queued URL of the chunk starts. Each URL is one unit of work with one
//! timeout, and its rows come back by value through the join set.

mod progress;
mod row;
mod unit;

pub use progress::EvalProgress;
pub use row::EvaluationRow;
pub use unit::evaluate_url;

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use tokio::sync::mpsc;

use crate::fetch::PageFetcher;

/// Sizing and timeouts for [`evaluate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// URLs per chunk; chunks run one after another.
    pub chunk_size: usize,
    /// Maximum URLs in flight within a chunk.
    ///
    /// Counts scheduled units only. A unit that hits `task_timeout` frees its
    /// slot at once, but its blocking worker runs on until its current fetch
    /// ends, so live fetches can briefly exceed this number. Each abandoned
    /// worker is bounded by `fetch_timeout` per remaining variant.
    pub pool_size: usize,
    /// Budget for one URL's baseline and all its variants. The result is
    /// abandoned past this point; the blocking worker is not cancelled.
    pub task_timeout: Duration,
    /// Per-request fetch timeout.
    pub fetch_timeout: Duration,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            chunk_size: 200,
            pool_size: 4,
            task_timeout: Duration::from_secs(3600),
            fetch_timeout: Duration::from_secs(3),
        }
    }
}

/// Evaluates every URL and returns all rows, grouped by URL in input order.
///
/// Per-URL failures never abort the run: a timed-out or crashed unit
/// contributes one failure row. Progress is logged per chunk and, if
/// `progress_tx` is given, sent after every finished URL. Errors only when
/// `urls` is empty.
pub async fn evaluate(
    urls: &[String],
    fetcher: Arc<dyn PageFetcher>,
    opts: &EngineOptions,
    progress_tx: Option<mpsc::Sender<EvalProgress>>,
) -> Result<Vec<EvaluationRow>> {
    if urls.is_empty() {
        anyhow::bail!("no URLs to evaluate");
    }
    let chunk_size = opts.chunk_size.max(1);
    let pool_size = opts.pool_size.max(1);
    let total = urls.len();
    let start = Instant::now();

    let mut slots: Vec<Option<Vec<EvaluationRow>>> = vec![None; total];
    let mut done = 0usize;

    for (chunk_idx, chunk) in urls.chunks(chunk_size).enumerate() {
        let offset = chunk_idx * chunk_size;
        tracing::info!(
            "{:.1} percent complete, elapsed {:.1}s",
            done as f64 / total as f64 * 100.0,
            start.elapsed().as_secs_f64()
        );

        let mut join_set = tokio::task::JoinSet::new();
        let mut next = 0usize;
        loop {
            while join_set.len() < pool_size && next < chunk.len() {
                let idx = offset + next;
                let url = chunk[next].clone();
                let fetcher = Arc::clone(&fetcher);
                let fetch_timeout = opts.fetch_timeout;
                let task_timeout = opts.task_timeout;
                join_set.spawn(async move {
                    let rows = unit::run_unit(url, fetcher, fetch_timeout, task_timeout).await;
                    (idx, rows)
                });
                next += 1;
            }

            let Some(res) = join_set.join_next().await else {
                break;
            };
            match res {
                Ok((idx, rows)) => {
                    slots[idx] = Some(rows);
                    done += 1;
                    if let Some(ref tx) = progress_tx {
                        let _ = tx.try_send(EvalProgress {
                            urls_done: done,
                            urls_total: total,
                            elapsed_secs: start.elapsed().as_secs_f64(),
                        });
                    }
                }
                // Its URL is filled in below once the chunk drains.
                Err(e) => tracing::error!("evaluation task join: {}", e),
            }
        }

        for (i, url) in chunk.iter().enumerate() {
            let slot = &mut slots[offset + i];
            if slot.is_none() {
                *slot = Some(vec![EvaluationRow::failure(url, "worker terminated unexpectedly")]);
                done += 1;
            }
        }
    }

    let elapsed = start.elapsed().as_secs_f64();
    let summary = EvalProgress {
        urls_done: done,
        urls_total: total,
        elapsed_secs: elapsed,
    };
    tracing::info!(
        "evaluated {} url(s) in {:.1}s, rate {:.2} urls per second",
        total,
        elapsed,
        summary.urls_per_sec()
    );

    Ok(slots.into_iter().flatten().flatten().collect())
}
