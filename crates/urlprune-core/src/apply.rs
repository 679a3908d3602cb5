//! Rebuilds a URL from per-parameter keep decisions.

use std::collections::HashMap;

use crate::prune::PhoneGuard;
use crate::query::{query_params, retain_params, split_url};

/// Cleaned URL and the partition of its parameter names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub clean_url: String,
    pub dropped: Vec<String>,
    pub kept: Vec<String>,
}

/// Applies `decisions` (parameter name → keep) to `url`.
///
/// A parameter survives only if its decision is `true` and none of its
/// values contains a phone number. Parameters without a decision are
/// dropped. Surviving segments keep their original order and encoding;
/// scheme, authority, path and fragment are untouched.
pub fn apply(url: &str, decisions: &HashMap<String, bool>, phones: &PhoneGuard) -> Applied {
    let params = split_url(url).query.map(query_params).unwrap_or_default();

    let mut dropped: Vec<String> = Vec::new();
    let mut kept: Vec<String> = Vec::new();
    for p in &params {
        if dropped.contains(&p.name) || kept.contains(&p.name) {
            continue;
        }
        let keep = decisions.get(&p.name).copied().unwrap_or(false)
            && !params
                .iter()
                .filter(|q| q.name == p.name)
                .any(|q| phones.contains_phone_number(&q.value));
        if keep {
            kept.push(p.name.clone());
        } else {
            dropped.push(p.name.clone());
        }
    }

    let clean_url = retain_params(url, |p| kept.contains(&p.name));
    Applied {
        clean_url,
        dropped,
        kept,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decisions(pairs: &[(&str, bool)]) -> HashMap<String, bool> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn keeps_in_original_order() {
        let d = decisions(&[("b", true), ("a", true), ("c", false)]);
        let out = apply("https://e.com/p?a=1&c=2&b=3#frag", &d, &PhoneGuard::default());
        assert_eq!(out.clean_url, "https://e.com/p?a=1&b=3#frag");
        assert_eq!(out.kept, vec!["a", "b"]);
        assert_eq!(out.dropped, vec!["c"]);
    }

    #[test]
    fn undecided_parameters_drop() {
        let out = apply("https://e.com/?x=1", &HashMap::new(), &PhoneGuard::default());
        assert_eq!(out.clean_url, "https://e.com/");
        assert_eq!(out.dropped, vec!["x"]);
        assert!(out.kept.is_empty());
    }

    #[test]
    fn phone_value_downgrades_keep() {
        let d = decisions(&[("id", true), ("tel", true)]);
        let out = apply(
            "https://e.com/?id=42&tel=%28650%29+253-0000",
            &d,
            &PhoneGuard::default(),
        );
        assert_eq!(out.kept, vec!["id"]);
        assert_eq!(out.dropped, vec!["tel"]);
        assert_eq!(out.clean_url, "https://e.com/?id=42");
    }

    #[test]
    fn phone_in_any_repeated_value_drops_the_name() {
        let d = decisions(&[("n", true)]);
        let out = apply("https://e.com/?n=1&n=650-253-0000", &d, &PhoneGuard::default());
        assert_eq!(out.dropped, vec!["n"]);
        assert_eq!(out.clean_url, "https://e.com/");
    }

    #[test]
    fn partition_is_exact() {
        let url = "https://e.com/?a=1&b=2&a=3&c&d=4";
        let d = decisions(&[("a", true), ("c", true)]);
        let out = apply(url, &d, &PhoneGuard::default());
        let mut all: Vec<String> = out.dropped.iter().chain(out.kept.iter()).cloned().collect();
        all.sort();
        assert_eq!(all, vec!["a", "b", "c", "d"]);
        assert!(out.dropped.iter().all(|n| !out.kept.contains(n)));
        assert_eq!(out.clean_url, "https://e.com/?a=1&a=3&c");
    }

    #[test]
    fn applying_twice_is_a_fixed_point() {
        let d = decisions(&[("a", true), ("b", false)]);
        let once = apply("https://e.com/?a=1&b=2", &d, &PhoneGuard::default());
        let twice = apply(&once.clean_url, &d, &PhoneGuard::default());
        assert_eq!(once.clean_url, twice.clean_url);
        assert!(twice.dropped.is_empty());
        assert_eq!(twice.kept, once.kept);
    }
}
