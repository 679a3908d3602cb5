//! Rule table persistence, so training and applying can run separately.

use std::path::Path;

use anyhow::{Context, Result};

use crate::rules::{DomainParamStat, RuleTable};

/// Writes one tab-separated row per stat, with a header. Parameter names are
/// decoded and may hold tabs, quotes or newlines; such fields are quoted.
pub fn write_rule_table(path: &Path, table: &RuleTable) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Necessary)
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    for stat in table.to_sorted_vec() {
        writer.serialize(&stat)?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    tracing::info!(path = %path.display(), stats = table.len(), "wrote rule table");
    Ok(())
}

pub fn read_rule_table(path: &Path) -> Result<RuleTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_path(path)
        .with_context(|| format!("open rule table {}", path.display()))?;
    let mut stats = Vec::new();
    for row in reader.deserialize::<DomainParamStat>() {
        stats.push(row.with_context(|| format!("parse rule table {}", path.display()))?);
    }
    Ok(RuleTable::from_stats(stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(param: &str) -> DomainParamStat {
        DomainParamStat {
            full_domain: "a.test:8080".into(),
            param: param.into(),
            qsim: 0.4,
            same_title: 0.0,
            body_length: 500.0,
            baseline_qsim: 0.99,
            baseline_same_title: 1.0,
            diff_gsim: 0.59,
            diff_same_title: 1.0,
            observations: 3,
        }
    }

    #[test]
    fn rule_table_survives_a_write_and_read() {
        let stat = stat("id");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.tsv");
        write_rule_table(&path, &RuleTable::from_stats(vec![stat.clone()])).unwrap();
        let table = read_rule_table(&path).unwrap();
        assert_eq!(table.get("a.test:8080", "id"), Some(&stat));
        assert!(table.get("a.test:8080", "other").is_none());
    }

    #[test]
    fn names_with_delimiters_and_newlines_round_trip() {
        let names = ["a\tb", "a\nb", "say \"hi\"", "id"];
        let stats: Vec<DomainParamStat> = names.iter().map(|n| stat(n)).collect();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.tsv");
        write_rule_table(&path, &RuleTable::from_stats(stats.clone())).unwrap();

        let table = read_rule_table(&path).unwrap();
        assert_eq!(table.len(), names.len());
        for s in &stats {
            assert_eq!(table.get("a.test:8080", &s.param), Some(s));
        }
    }
}
