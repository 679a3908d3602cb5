//! Page fetch boundary.
//!
//! The rest of the crate only sees [`PageFetcher::fetch`], which always
//! returns a [`Document`]; transport and parse failures are folded into a
//! failed document instead of propagating.

mod agent;
mod error;
mod html;
mod transport;

pub use agent::{pick_user_agent, DEFAULT_USER_AGENTS};
pub use error::FetchError;
pub use html::parse_html;
pub use transport::CurlFetcher;

use std::time::Duration;

/// A fetched and parsed page, or the record of a failed fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// URL that was requested.
    pub url: String,
    /// True when the page was fetched with a 2xx status and parsed.
    pub success: bool,
    /// Text of the `<title>` element ("" if missing).
    pub title: String,
    /// Text content of `<body>` ("" if missing).
    pub body_text: String,
    /// Diagnostic for failed fetches.
    pub error_message: Option<String>,
}

impl Document {
    pub fn ok(
        url: impl Into<String>,
        title: impl Into<String>,
        body_text: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            success: true,
            title: title.into(),
            body_text: body_text.into(),
            error_message: None,
        }
    }

    pub fn failed(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            success: false,
            title: String::new(),
            body_text: String::new(),
            error_message: Some(message.into()),
        }
    }
}

/// Fetches a URL and returns its parsed content.
///
/// Implementations are called from blocking worker threads and must not
/// panic on network or parse errors; return [`Document::failed`] instead.
pub trait PageFetcher: Send + Sync + 'static {
    fn fetch(&self, url: &str, timeout: Duration) -> Document;
}
