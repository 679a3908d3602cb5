//! Keep/drop decision for one (URL, parameter) pair.

mod deny_list;
mod phone;

pub use deny_list::{is_denied, DENY_LIST};
pub use phone::{PhoneGuard, DEFAULT_PHONE_REGIONS};

use serde::{Deserialize, Serialize};

use crate::rules::DomainParamStat;

/// Bounds for the statistical keep rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub same_title_upper_bound: f64,
    pub diff_gsim_lower_bound: f64,
    pub diff_gsim_upper_bound: f64,
    pub body_length_lower_bound: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            same_title_upper_bound: 0.95,
            diff_gsim_lower_bound: 0.02,
            diff_gsim_upper_bound: 0.98,
            body_length_lower_bound: 100.0,
        }
    }
}

/// Keep/drop outcome for one parameter of one URL. Produced per apply
/// pass; never written back into the rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneDecision {
    pub url_id: String,
    pub param: String,
    pub keep: bool,
}

/// Statistical rule alone: keep a parameter whose removal changes the title
/// often enough and moves similarity beyond noise, or changes the page
/// almost entirely, on pages with a non-trivial body.
pub fn statistically_significant(stat: &DomainParamStat, t: &Thresholds) -> bool {
    let title_and_content = stat.same_title < t.same_title_upper_bound
        && stat.diff_gsim.abs() > t.diff_gsim_lower_bound;
    let content_replaced = stat.diff_gsim > t.diff_gsim_upper_bound;
    (title_and_content || content_replaced) && stat.body_length > t.body_length_lower_bound
}

/// Decides whether `param` should be kept, given its domain stat if one
/// was measured.
///
/// No stat means the parameter was never successfully measured on this
/// domain: drop. Deny-listed names are dropped regardless of the stat.
pub fn decide(param: &str, stat: Option<&DomainParamStat>, t: &Thresholds) -> bool {
    let keep = stat.is_some_and(|s| statistically_significant(s, t));
    keep && !is_denied(param)
}
