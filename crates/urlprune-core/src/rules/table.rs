//! Lookup table over built domain statistics.

use std::collections::HashMap;

use super::builder::DomainParamStat;

/// Read-only (domain, parameter) → stat index.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    stats: HashMap<(String, String), DomainParamStat>,
}

impl RuleTable {
    pub fn from_stats(stats: Vec<DomainParamStat>) -> Self {
        let stats = stats
            .into_iter()
            .map(|s| ((s.full_domain.clone(), s.param.clone()), s))
            .collect();
        Self { stats }
    }

    pub fn get(&self, full_domain: &str, param: &str) -> Option<&DomainParamStat> {
        self.stats.get(&(full_domain.to_string(), param.to_string()))
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// All stats sorted by domain, then parameter.
    pub fn to_sorted_vec(&self) -> Vec<DomainParamStat> {
        let mut v: Vec<DomainParamStat> = self.stats.values().cloned().collect();
        v.sort_by(|a, b| (&a.full_domain, &a.param).cmp(&(&b.full_domain, &b.param)));
        v
    }
}
