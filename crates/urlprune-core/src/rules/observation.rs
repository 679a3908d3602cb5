//! One measured (URL, parameter) comparison.

/// Parameter name of the AA-test observation (URL compared to itself).
pub const AA_TEST_PARAM: &str = "";

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterObservation {
    pub url_id: String,
    pub full_domain: String,
    /// Removed parameter, or [`AA_TEST_PARAM`] for the AA test.
    pub param: String,
    pub success: bool,
    pub qsim: Option<f64>,
    pub same_title: Option<bool>,
    pub body_length: Option<u64>,
}

impl ParameterObservation {
    pub fn is_aa_test(&self) -> bool {
        self.param == AA_TEST_PARAM
    }

    /// Metrics of a successful observation; `None` for failures or rows with
    /// any metric missing.
    pub(super) fn metrics(&self) -> Option<(f64, bool, u64)> {
        if !self.success {
            return None;
        }
        Some((self.qsim?, self.same_title?, self.body_length?))
    }
}
