//! URL records and deterministic id/domain derivation.

use sha2::{Digest, Sha256};

/// Number of hex characters kept from the SHA-256 digest for a derived `url_id`.
const URL_ID_HEX_LEN: usize = 16;

/// One input URL. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub canonical_url: String,
    pub url_id: String,
    pub full_domain: String,
}

impl UrlRecord {
    /// Builds a record, deriving `url_id` and `full_domain` when absent or empty.
    pub fn new(
        canonical_url: impl Into<String>,
        url_id: Option<String>,
        full_domain: Option<String>,
    ) -> Self {
        let canonical_url = canonical_url.into();
        let url_id = url_id
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| derive_url_id(&canonical_url));
        let full_domain = full_domain
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| derive_full_domain(&canonical_url));
        Self {
            canonical_url,
            url_id,
            full_domain,
        }
    }
}

/// Stable id for a URL: leading hex of its SHA-256 digest.
pub fn derive_url_id(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    let mut id = hex::encode(digest);
    id.truncate(URL_ID_HEX_LEN);
    id
}

/// Network location of a URL: host, plus `:port` when one is given.
/// Userinfo is never included.
pub fn derive_full_domain(url: &str) -> String {
    if let Ok(parsed) = url::Url::parse(url) {
        if let Some(host) = parsed.host_str() {
            return match parsed.port() {
                Some(p) => format!("{}:{}", host, p),
                None => host.to_string(),
            };
        }
    }
    // Scheme-less or otherwise unparseable: take the authority by hand.
    let rest = url.split_once("://").map(|(_, r)| r).unwrap_or(url);
    let authority = rest
        .split(|c| c == '/' || c == '?' || c == '#')
        .next()
        .unwrap_or("");
    let authority = authority.rsplit_once('@').map(|(_, h)| h).unwrap_or(authority);
    authority.to_ascii_lowercase()
}
