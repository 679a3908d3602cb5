//! Baseline + one-parameter-removed URL variants.

use crate::query::{distinct_names, retain_params};

/// A URL to fetch and compare against the baseline. `param` is `None` for
/// the AA-test copy of the unmodified URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub param: Option<String>,
    pub url: String,
}

/// Enumerates the AA-test baseline followed by one variant per distinct
/// query parameter (first-seen order), each with that parameter and all of
/// its values removed.
pub fn generate(url: &str) -> Vec<Variant> {
    let mut out = vec![Variant {
        param: None,
        url: url.to_string(),
    }];
    for name in distinct_names(url) {
        let mod_url = retain_params(url, |p| p.name != name);
        out.push(Variant {
            param: Some(name),
            url: mod_url,
        });
    }
    out
}
