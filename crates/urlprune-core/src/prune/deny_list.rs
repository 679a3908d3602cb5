//! Parameter names that are never kept, whatever the measurements say.

/// Known personally-identifying and tracking parameter names. A parameter is
/// denied if its name contains any entry (case-sensitive).
pub const DENY_LIST: &[&str] = &[
    // personally identifying
    "pw", "pass", "password", "key", "username", "name", "email", "address",
    "account", "ssn", "dob", "zipcode", "user_id", "userid", "accountid",
    "account_id",
    // tracking and tokens
    "utm_source", "utm_medium", "utm_campaign", "utm_content", "source",
    "utm_term", "usp", "edit_requested", "ogsrc", "fbclid", "entrypoint",
    "redirect", "platform", "widgetTypeCall", "logType", "uuid", "app_id",
    "campaign", "src", "caption", "fbrefresh", "user", "cp", "desc", "c_id",
    "geo", "cmpid", "cHash", "_reff", "pk_campaign", "ctype", "s_src",
    "referrer", "channel", "uc_param_str", "fb-share-results", "cpidfb",
    "content_type", "tag", "campaign_id", "cID", "channel_id", "NONCE_TOKEN",
    "reco_id", "promo_id",
];

pub fn is_denied(param: &str) -> bool {
    DENY_LIST.iter().any(|entry| param.contains(entry))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_and_substring_matches() {
        assert!(is_denied("utm_source"));
        assert!(is_denied("email"));
        assert!(is_denied("user_email_hash"));
        assert!(is_denied("my_utm_campaign_v2"));
        assert!(is_denied("apikey"));
    }

    #[test]
    fn ordinary_names_pass() {
        for p in ["id", "q", "page", "v", "t", "lang", "sort"] {
            assert!(!is_denied(p), "{} should not be denied", p);
        }
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(is_denied("cHash"));
        assert!(!is_denied("CHASH"));
    }
}
