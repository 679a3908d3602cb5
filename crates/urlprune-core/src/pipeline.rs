//! End-to-end flow: train a rule table from sampled URLs, then clean a full
//! URL set with it.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::mpsc;

use crate::apply::apply;
use crate::config::PruneConfig;
use crate::dataset::{dedupe_by_id, CleanUrlResult, UrlRecord};
use crate::engine::{self, EngineOptions, EvalProgress, EvaluationRow};
use crate::fetch::PageFetcher;
use crate::prune::{decide, PhoneGuard, PruneDecision, Thresholds};
use crate::query::distinct_names;
use crate::redact::scrub;
use crate::rules::{self, OverrideTable, ParameterObservation, RuleTable, AA_TEST_PARAM};

pub struct Pipeline {
    fetcher: Arc<dyn PageFetcher>,
    engine: EngineOptions,
    thresholds: Thresholds,
    overrides: OverrideTable,
    phones: PhoneGuard,
}

impl Pipeline {
    /// Pipeline with built-in defaults for every setting.
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            fetcher,
            engine: EngineOptions::default(),
            thresholds: Thresholds::default(),
            overrides: OverrideTable::default(),
            phones: PhoneGuard::default(),
        }
    }

    pub fn from_config(cfg: &PruneConfig, fetcher: Arc<dyn PageFetcher>) -> Self {
        let phones = match cfg.phone_regions {
            Some(ref regions) => PhoneGuard::new(regions),
            None => PhoneGuard::default(),
        };
        Self {
            fetcher,
            engine: cfg.engine_options(),
            thresholds: cfg.thresholds(),
            overrides: OverrideTable::default(),
            phones,
        }
    }

    pub fn with_engine_options(mut self, engine: EngineOptions) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_overrides(mut self, overrides: OverrideTable) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn engine_options(&self) -> &EngineOptions {
        &self.engine
    }

    /// Fetches and compares every distinct training URL, then builds the
    /// rule table from the observations.
    pub async fn train(
        &self,
        training: &[UrlRecord],
        progress_tx: Option<mpsc::Sender<EvalProgress>>,
    ) -> Result<RuleTable> {
        let mut seen = HashSet::new();
        let urls: Vec<String> = training
            .iter()
            .filter(|r| seen.insert(r.canonical_url.as_str()))
            .map(|r| r.canonical_url.clone())
            .collect();
        tracing::info!(urls = urls.len(), "training on distinct urls");

        let rows = engine::evaluate(&urls, Arc::clone(&self.fetcher), &self.engine, progress_tx)
            .await
            .context("evaluate training urls")?;
        let observations = observations_from_rows(training, &rows);
        let stats = rules::build(&observations, &self.overrides);
        Ok(RuleTable::from_stats(stats))
    }

    /// Cleans every record with `rules`. Records sharing a `url_id` are
    /// collapsed first (first occurrence wins). One result per record.
    pub fn clean(&self, records: &[UrlRecord], rules: &RuleTable) -> Vec<CleanUrlResult> {
        let records = dedupe_by_id(records.to_vec());
        let results: Vec<CleanUrlResult> = records
            .iter()
            .map(|rec| clean_record(rec, rules, &self.thresholds, &self.phones))
            .collect();

        let dropped: usize = results.iter().map(|r| r.params_dropped.len()).sum();
        let kept: usize = results.iter().map(|r| r.params_kept.len()).sum();
        tracing::info!(urls = results.len(), dropped, kept, "cleaned urls");
        results
    }

    /// Trains on `training`, then cleans `full`.
    pub async fn run(
        &self,
        training: &[UrlRecord],
        full: &[UrlRecord],
        progress_tx: Option<mpsc::Sender<EvalProgress>>,
    ) -> Result<Vec<CleanUrlResult>> {
        let rules = self.train(training, progress_tx).await?;
        Ok(self.clean(full, &rules))
    }
}

/// Joins evaluation rows back to their training records by URL.
///
/// Rows whose URL matches no record are dropped. Rows without a parameter
/// (AA tests and synthetic failures) map to the AA-test sentinel; failed
/// rows stay in, marked unsuccessful.
pub fn observations_from_rows(
    records: &[UrlRecord],
    rows: &[EvaluationRow],
) -> Vec<ParameterObservation> {
    let mut by_url: HashMap<&str, &UrlRecord> = HashMap::new();
    for rec in records {
        by_url.entry(rec.canonical_url.as_str()).or_insert(rec);
    }

    let mut unmatched = 0usize;
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let Some(rec) = by_url.get(row.url.as_str()) else {
            unmatched += 1;
            continue;
        };
        out.push(ParameterObservation {
            url_id: rec.url_id.clone(),
            full_domain: rec.full_domain.clone(),
            param: row.param.clone().unwrap_or_else(|| AA_TEST_PARAM.to_string()),
            success: row.success,
            qsim: row.qsim,
            same_title: row.same_title,
            body_length: row.body_length,
        });
    }
    if unmatched > 0 {
        tracing::warn!(unmatched, "evaluation rows without a matching record");
    }
    out
}

/// One decision per distinct parameter of `rec`, in first-seen order.
pub fn decide_params(
    rec: &UrlRecord,
    rules: &RuleTable,
    thresholds: &Thresholds,
) -> Vec<PruneDecision> {
    distinct_names(&rec.canonical_url)
        .into_iter()
        .map(|param| {
            let keep = decide(&param, rules.get(&rec.full_domain, &param), thresholds);
            PruneDecision {
                url_id: rec.url_id.clone(),
                param,
                keep,
            }
        })
        .collect()
}

/// Prunes one URL: rule + deny-list decisions, phone guard, e-mail scrub.
pub fn clean_record(
    rec: &UrlRecord,
    rules: &RuleTable,
    thresholds: &Thresholds,
    phones: &PhoneGuard,
) -> CleanUrlResult {
    let decisions: HashMap<String, bool> = decide_params(rec, rules, thresholds)
        .into_iter()
        .map(|d| (d.param, d.keep))
        .collect();
    let applied = apply(&rec.canonical_url, &decisions, phones);
    CleanUrlResult {
        url_id: rec.url_id.clone(),
        canonical_url: rec.canonical_url.clone(),
        clean_url: scrub(&applied.clean_url),
        params_dropped: applied.dropped,
        params_kept: applied.kept,
    }
}
