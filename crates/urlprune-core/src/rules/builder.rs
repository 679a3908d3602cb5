//! Aggregation of observations into baseline-adjusted domain statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::observation::ParameterObservation;
use super::overrides::OverrideTable;

/// Mean metrics for one (domain, parameter) pair, with the domain's AA-test
/// baseline subtracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainParamStat {
    pub full_domain: String,
    pub param: String,
    /// Mean similarity when the parameter is removed.
    pub qsim: f64,
    /// Fraction of observations where the title was unchanged.
    pub same_title: f64,
    /// Mean baseline body length in characters.
    pub body_length: f64,
    /// Mean AA-test similarity for the domain.
    pub baseline_qsim: f64,
    /// Mean AA-test same-title rate for the domain.
    pub baseline_same_title: f64,
    /// `baseline_qsim - qsim`.
    pub diff_gsim: f64,
    /// `baseline_same_title - same_title`.
    pub diff_same_title: f64,
    /// Number of successful observations behind the means.
    pub observations: u64,
}

#[derive(Debug, Default)]
struct MeanAcc {
    n: u64,
    qsim: f64,
    same_title: f64,
    body_length: f64,
}

impl MeanAcc {
    fn push(&mut self, qsim: f64, same_title: bool, body_length: u64) {
        self.n += 1;
        self.qsim += qsim;
        self.same_title += if same_title { 1.0 } else { 0.0 };
        self.body_length += body_length as f64;
    }

    fn means(&self) -> (f64, f64, f64) {
        let n = self.n as f64;
        (self.qsim / n, self.same_title / n, self.body_length / n)
    }
}

/// Builds domain statistics from one training pass.
///
/// Failed observations are ignored. Parameter observations matching an entry
/// in `overrides` count as title-changing. A (domain, parameter) pair gets a
/// row only if it has at least one successful observation and its domain has
/// at least one successful AA-test observation. Rows are sorted by domain,
/// then parameter.
pub fn build(
    observations: &[ParameterObservation],
    overrides: &OverrideTable,
) -> Vec<DomainParamStat> {
    let mut baseline: BTreeMap<&str, MeanAcc> = BTreeMap::new();
    let mut params: BTreeMap<(&str, &str), MeanAcc> = BTreeMap::new();
    let mut skipped = 0usize;

    for obs in observations {
        let Some((qsim, same_title, body_length)) = obs.metrics() else {
            skipped += 1;
            continue;
        };
        if obs.is_aa_test() {
            baseline
                .entry(obs.full_domain.as_str())
                .or_default()
                .push(qsim, same_title, body_length);
        } else {
            let same_title =
                same_title && !overrides.forces_unsafe(&obs.full_domain, &obs.param);
            params
                .entry((obs.full_domain.as_str(), obs.param.as_str()))
                .or_default()
                .push(qsim, same_title, body_length);
        }
    }

    let mut stats = Vec::with_capacity(params.len());
    let mut no_baseline = 0usize;
    for ((domain, param), acc) in &params {
        let Some(base) = baseline.get(domain) else {
            no_baseline += 1;
            continue;
        };
        let (qsim, same_title, body_length) = acc.means();
        let (baseline_qsim, baseline_same_title, _) = base.means();
        stats.push(DomainParamStat {
            full_domain: domain.to_string(),
            param: param.to_string(),
            qsim,
            same_title,
            body_length,
            baseline_qsim,
            baseline_same_title,
            diff_gsim: baseline_qsim - qsim,
            diff_same_title: baseline_same_title - same_title,
            observations: acc.n,
        });
    }

    tracing::info!(
        observations = observations.len(),
        skipped,
        domains = baseline.len(),
        stats = stats.len(),
        no_baseline,
        "built domain parameter stats"
    );
    stats
}
