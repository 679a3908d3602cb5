//! `urlprune probe <url>` – evaluate one URL and print its rows.

use anyhow::Result;
use std::sync::Arc;
use urlprune_core::config::PruneConfig;
use urlprune_core::engine::{self, EvaluationRow};
use urlprune_core::fetch::CurlFetcher;

fn print_rows(rows: &[EvaluationRow]) {
    println!(
        "  {:<20}  {:>6}  {:>6}  {:>8}  {:>7}  {}",
        "Param", "QSim", "Title", "Body", "Time(s)", "Status"
    );
    println!(
        "  {}  {}  {}  {}  {}  {}",
        "--------------------", "------", "------", "--------", "-------", "------"
    );
    for r in rows {
        let param = match (&r.param, &r.mod_url) {
            (Some(p), _) => p.as_str(),
            (None, Some(_)) => "(aa test)",
            (None, None) => "-",
        };
        let qsim = r.qsim.map(|q| format!("{:.3}", q)).unwrap_or_else(|| "-".into());
        let title = r.same_title.map(|t| if t { "same" } else { "diff" }).unwrap_or("-");
        let body = r.body_length.map(|b| b.to_string()).unwrap_or_else(|| "-".into());
        let time = r.running_time.map(|t| format!("{:.3}", t)).unwrap_or_else(|| "-".into());
        let status = if r.success {
            "ok".to_string()
        } else {
            r.message.clone().unwrap_or_else(|| "failed".into())
        };
        println!(
            "  {:<20}  {:>6}  {:>6}  {:>8}  {:>7}  {}",
            param, qsim, title, body, time, status
        );
    }
}

pub async fn run_probe(cfg: &PruneConfig, url: &str) -> Result<()> {
    let fetcher = Arc::new(CurlFetcher::from_config(cfg.fetch.as_ref()));
    let rows = engine::evaluate(&[url.to_string()], fetcher, &cfg.engine_options(), None).await?;
    print_rows(&rows);
    Ok(())
}
