//! Progress printer shared by commands that evaluate URLs.

use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use urlprune_core::engine::EvalProgress;

const PROGRESS_INTERVAL_MS: u128 = 500;

/// Spawns a task that prints progress lines to stderr until the sender is dropped.
pub(super) fn spawn_printer() -> (mpsc::Sender<EvalProgress>, JoinHandle<()>) {
    let (tx, mut rx) = mpsc::channel::<EvalProgress>(16);
    let handle = tokio::spawn(async move {
        let mut last_print: Option<Instant> = None;
        while let Some(p) = rx.recv().await {
            let now = Instant::now();
            let due = last_print
                .map_or(true, |t| now.duration_since(t).as_millis() >= PROGRESS_INTERVAL_MS);
            if due || p.urls_done >= p.urls_total {
                eprintln!(
                    "  {} / {} urls ({:.1}%)  {:.0}s elapsed  {:.2} urls/s",
                    p.urls_done,
                    p.urls_total,
                    p.fraction() * 100.0,
                    p.elapsed_secs,
                    p.urls_per_sec()
                );
                last_print = Some(now);
            }
        }
    });
    (tx, handle)
}
