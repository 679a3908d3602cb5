//! Integration test: local HTML server, curl transport, full train and clean.
//!
//! Serves an item page whose `id` parameter changes the content and whose
//! `utm_source` parameter does not, then checks the learned rules and the
//! cleaned output file.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::html_server::{self, Page};
use tempfile::tempdir;
use urlprune_core::dataset::{
    read_nonempty_records, read_rule_table, write_results, write_rule_table,
};
use urlprune_core::engine::EngineOptions;
use urlprune_core::fetch::{CurlFetcher, PageFetcher};
use urlprune_core::pipeline::Pipeline;

fn item_body() -> String {
    "Item seven is a sturdy oak table with four legs and a lacquered top. ".repeat(4)
}

fn home_body() -> String {
    "Welcome to the shop. Browse our catalogue of chairs, lamps and rugs today! ".repeat(3)
}

fn engine_options() -> EngineOptions {
    EngineOptions {
        chunk_size: 10,
        pool_size: 2,
        task_timeout: Duration::from_secs(30),
        fetch_timeout: Duration::from_secs(5),
    }
}

#[test]
fn curl_fetcher_parses_title_and_body() {
    let origin = html_server::start(vec![("/page?x=1", Page::new("Hello", "Some text"))]);
    let doc = CurlFetcher::new().fetch(&format!("{}/page?x=1", origin), Duration::from_secs(5));
    assert!(doc.success, "fetch failed: {:?}", doc.error_message);
    assert_eq!(doc.title, "Hello");
    assert_eq!(doc.body_text, "Some text");
}

#[test]
fn curl_fetcher_reports_http_errors_as_failed_documents() {
    let origin = html_server::start(vec![]);
    let url = format!("{}/missing", origin);
    let doc = CurlFetcher::new().fetch(&url, Duration::from_secs(5));
    assert!(!doc.success);
    let msg = doc.error_message.unwrap_or_default();
    assert!(msg.contains("404"), "unexpected message: {}", msg);
    assert!(msg.contains(&url));
}

#[tokio::test]
async fn train_and_clean_against_local_server() {
    let item = item_body();
    let home = home_body();
    let origin = html_server::start(vec![
        ("/item?id=7&utm_source=mail", Page::new("Oak table", &item)),
        ("/item?id=7", Page::new("Oak table", &item)),
        ("/item?utm_source=mail", Page::new("Shop", &home)),
    ]);
    let url = format!("{}/item?id=7&utm_source=mail", origin);

    let dir = tempdir().unwrap();
    let input = dir.path().join("train.tsv");
    std::fs::write(&input, format!("canonical_url\n{}\n", url)).unwrap();
    let records = read_nonempty_records(&input).unwrap();
    assert_eq!(records.len(), 1);

    let pipeline =
        Pipeline::new(Arc::new(CurlFetcher::new())).with_engine_options(engine_options());
    let rules = pipeline.train(&records, None).await.unwrap();

    let domain = &records[0].full_domain;
    let id = rules.get(domain, "id").expect("stat for id");
    assert_eq!(id.same_title, 0.0);
    assert!(id.diff_gsim > 0.02, "diff_gsim = {}", id.diff_gsim);
    let utm = rules.get(domain, "utm_source").expect("stat for utm_source");
    assert_eq!(utm.diff_gsim, 0.0);

    // rule table survives a round trip through disk
    let rules_path = dir.path().join("rules.tsv");
    write_rule_table(&rules_path, &rules).unwrap();
    let rules = read_rule_table(&rules_path).unwrap();
    assert_eq!(rules.len(), 2);

    let results = pipeline.clean(&records, &rules);
    assert_eq!(results[0].clean_url, format!("{}/item?id=7", origin));
    assert_eq!(results[0].params_kept, vec!["id"]);
    assert_eq!(results[0].params_dropped, vec!["utm_source"]);

    let output = dir.path().join("clean.tsv");
    write_results(&output, &results).unwrap();
    let written = std::fs::read_to_string(&output).unwrap();
    let mut lines = written.lines();
    assert_eq!(
        lines.next(),
        Some("url_id\tcanonical_url\tclean_url\tparams_dropped\tparams_kept")
    );
    let row: Vec<&str> = lines.next().unwrap().split('\t').collect();
    assert_eq!(row[1], url);
    assert_eq!(row[2], format!("{}/item?id=7", origin));
    assert_eq!(row[3], r#"["utm_source"]"#);
    assert_eq!(row[4], r#"["id"]"#);
}
