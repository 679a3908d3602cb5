//! `urlprune apply` – clean URLs with a saved rule table.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use urlprune_core::config::PruneConfig;
use urlprune_core::dataset::{read_nonempty_records, read_rule_table, write_results};
use urlprune_core::fetch::CurlFetcher;
use urlprune_core::pipeline::Pipeline;

pub fn run_apply(cfg: &PruneConfig, rules_path: &Path, input: &Path, output: &Path) -> Result<()> {
    let rules = read_rule_table(rules_path)?;
    let records = read_nonempty_records(input)?;
    if rules.is_empty() {
        tracing::warn!(
            "rule table {} is empty; every parameter will be dropped",
            rules_path.display()
        );
    }

    // Cleaning does not fetch.
    let pipeline = Pipeline::from_config(cfg, Arc::new(CurlFetcher::new()));
    let results = pipeline.clean(&records, &rules);
    write_results(output, &results).with_context(|| format!("write results {}", output.display()))?;
    println!("Cleaned {} url(s) into {}", results.len(), output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use urlprune_core::dataset::write_rule_table;
    use urlprune_core::rules::{DomainParamStat, RuleTable};

    fn id_rule() -> DomainParamStat {
        DomainParamStat {
            full_domain: "example.com".into(),
            param: "id".into(),
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
    fn apply_writes_cleaned_rows() {
        let dir = tempfile::tempdir().unwrap();
        let rules = dir.path().join("rules.tsv");
        let input = dir.path().join("all.tsv");
        let output = dir.path().join("clean.tsv");
        write_rule_table(&rules, &RuleTable::from_stats(vec![id_rule()])).unwrap();
        std::fs::write(
            &input,
            "canonical_url\turl_id\tfull_domain\n\
             https://example.com/item?id=7&utm_source=x\tu1\texample.com\n",
        )
        .unwrap();

        run_apply(&PruneConfig::default(), &rules, &input, &output).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "u1\thttps://example.com/item?id=7&utm_source=x\thttps://example.com/item?id=7\
             \t[\"utm_source\"]\t[\"id\"]"
        );
    }

    #[test]
    fn apply_rejects_input_without_rows() {
        let dir = tempfile::tempdir().unwrap();
        let rules = dir.path().join("rules.tsv");
        let input = dir.path().join("empty.tsv");
        let output = dir.path().join("clean.tsv");
        write_rule_table(&rules, &RuleTable::from_stats(vec![id_rule()])).unwrap();
        std::fs::write(&input, "canonical_url\n").unwrap();

        assert!(run_apply(&PruneConfig::default(), &rules, &input, &output).is_err());
        assert!(!output.exists());
    }
}
