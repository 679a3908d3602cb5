//! User-agent rotation keyed by a stable digest of host + path.

use sha2::{Digest, Sha256};

pub const DEFAULT_USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_9_3) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/35.0.1916.47 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/60.0.3112.113 Safari/537.36",
    "Mozilla/5.0 (Windows NT 6.1; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/60.0.3112.90 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/44.0.2403.157 Safari/537.36",
    "Mozilla/5.0 (Windows NT 6.3; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/60.0.3112.113 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/57.0.2987.133 Safari/537.36",
];

/// Picks a user agent for `url` from `agents`.
///
/// The same host + path always maps to the same agent, so the baseline and
/// every variant of a URL are requested with one identity. Falls back to the
/// built-in list when `agents` is empty.
pub fn pick_user_agent<'a>(url: &str, agents: &'a [String]) -> &'a str {
    let key = match url::Url::parse(url) {
        Ok(u) => format!("{}{}", authority(&u), u.path()),
        Err(_) => url.to_string(),
    };
    let digest = Sha256::digest(key.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    let n = u64::from_be_bytes(head);

    if agents.is_empty() {
        return DEFAULT_USER_AGENTS[(n % DEFAULT_USER_AGENTS.len() as u64) as usize];
    }
    &agents[(n % agents.len() as u64) as usize]
}

fn authority(u: &url::Url) -> String {
    match (u.host_str(), u.port()) {
        (Some(h), Some(p)) => format!("{}:{}", h, p),
        (Some(h), None) => h.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_path_same_agent_regardless_of_query() {
        let a = pick_user_agent("https://example.com/page?x=1", &[]);
        let b = pick_user_agent("https://example.com/page?y=2&z=3", &[]);
        assert_eq!(a, b);
        assert!(DEFAULT_USER_AGENTS.contains(&a));
    }

    #[test]
    fn custom_list_is_used() {
        let agents = vec!["only-agent".to_string()];
        assert_eq!(pick_user_agent("https://example.com/", &agents), "only-agent");
    }
}
