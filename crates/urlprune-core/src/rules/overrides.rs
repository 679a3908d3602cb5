//! Parameters known to determine page content on specific domains.

/// Marks `param` as content-determining on any domain containing
/// `domain_pattern`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamOverride {
    pub domain_pattern: String,
    pub param: String,
}

/// Table of forced-unsafe (domain pattern, parameter) entries. Matching
/// observations are recorded with `same_title = false` before aggregation,
/// so the parameter can never look safe to drop on a title basis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideTable {
    entries: Vec<ParamOverride>,
}

impl Default for OverrideTable {
    fn default() -> Self {
        Self::empty()
            .with("www.youtube.com", "v")
            .with("www.google.com", "url")
    }
}

impl OverrideTable {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with(mut self, domain_pattern: impl Into<String>, param: impl Into<String>) -> Self {
        self.entries.push(ParamOverride {
            domain_pattern: domain_pattern.into(),
            param: param.into(),
        });
        self
    }

    pub fn entries(&self) -> &[ParamOverride] {
        &self.entries
    }

    /// True if `param` on `full_domain` must be treated as content-determining.
    pub fn forces_unsafe(&self, full_domain: &str, param: &str) -> bool {
        self.entries
            .iter()
            .any(|o| o.param == param && full_domain.contains(o.domain_pattern.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_entries() {
        let t = OverrideTable::default();
        assert!(t.forces_unsafe("www.youtube.com", "v"));
        assert!(t.forces_unsafe("www.google.com", "url"));
        assert!(!t.forces_unsafe("www.youtube.com", "t"));
        assert!(!t.forces_unsafe("m.youtube.com", "v"));
    }

    #[test]
    fn domain_is_substring_match() {
        let t = OverrideTable::empty().with("example.org", "page");
        assert!(t.forces_unsafe("shop.example.org:8443", "page"));
        assert!(!t.forces_unsafe("example.com", "page"));
    }
}
