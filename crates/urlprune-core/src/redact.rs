//! Final e-mail redaction pass over cleaned URLs.

use regex::Regex;
use std::sync::OnceLock;

pub const EMAIL_PLACEHOLDER: &str = "<EMAIL>";

/// Local part and domain label may contain percent escapes, since cleaned
/// URLs keep their raw encoding.
const EMAIL_PATTERN: &str = concat!(
    r"(?:[a-zA-Z0-9_.+-]|%[0-9A-Fa-f]{2})+",
    r"(?:@|%40)",
    r"(?:[a-zA-Z0-9-]|%[0-9A-Fa-f]{2})+",
    r"\.[a-zA-Z0-9.-]+",
);

static RE_EMAIL: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    RE_EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("static email pattern"))
}

/// Replaces every e-mail-shaped substring of `url` with [`EMAIL_PLACEHOLDER`].
/// The `@` may appear literally or percent-encoded as `%40`.
pub fn scrub(url: &str) -> String {
    email_re().replace_all(url, EMAIL_PLACEHOLDER).into_owned()
}
