//! One fetch-and-compare result row.

use crate::compare::Comparison;
use crate::variants::Variant;

/// Result of comparing one variant of `url` against its baseline, or a
/// synthetic failure standing in for a whole URL that could not be evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationRow {
    /// Originating URL.
    pub url: String,
    /// Removed parameter; `None` for the AA test and for synthetic failures.
    pub param: Option<String>,
    /// Variant URL that was fetched; `None` for synthetic failures.
    pub mod_url: Option<String>,
    pub success: bool,
    pub message: Option<String>,
    pub qsim: Option<f64>,
    pub same_title: Option<bool>,
    pub body_length: Option<u64>,
    pub running_time: Option<f64>,
}

impl EvaluationRow {
    pub fn from_comparison(url: &str, variant: Variant, cmp: Comparison) -> Self {
        Self {
            url: url.to_string(),
            param: variant.param,
            mod_url: Some(variant.url),
            success: cmp.success,
            message: cmp.message,
            qsim: cmp.qsim,
            same_title: cmp.same_title,
            body_length: cmp.body_length,
            running_time: cmp.running_time,
        }
    }

    /// Single row replacing every result of a URL whose unit of work failed.
    pub fn failure(url: &str, message: impl Into<String>) -> Self {
        Self {
            url: url.to_string(),
            param: None,
            mod_url: None,
            success: false,
            message: Some(message.into()),
            qsim: None,
            same_title: None,
            body_length: None,
            running_time: None,
        }
    }

    /// True for the AA-test comparison of a URL against itself.
    pub fn is_aa_test(&self) -> bool {
        self.param.is_none() && self.mod_url.is_some()
    }
}
