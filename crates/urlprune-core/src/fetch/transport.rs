//! libcurl-backed page fetcher.

use std::str;
use std::time::Duration;

use super::agent::pick_user_agent;
use super::error::FetchError;
use super::html::parse_html;
use super::{Document, PageFetcher};
use crate::config::FetchConfig;

/// Blocking GET fetcher. One `Easy` handle per request; call from
/// `spawn_blocking` when used from async code.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    user_agents: Vec<String>,
    proxy: Option<String>,
}

impl CurlFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(cfg: Option<&FetchConfig>) -> Self {
        match cfg {
            Some(c) => Self {
                user_agents: c.user_agents.clone(),
                proxy: c.proxy.clone(),
            },
            None => Self::default(),
        }
    }

    fn get(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(timeout)?;
        easy.timeout(timeout)?;
        easy.accept_encoding("gzip")?;
        easy.useragent(pick_user_agent(url, &self.user_agents))?;
        if let Some(ref proxy) = self.proxy {
            easy.proxy(proxy)?;
        }

        let mut list = curl::easy::List::new();
        list.append("X-Requested-With: XMLHttpRequest")?;
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

impl PageFetcher for CurlFetcher {
    fn fetch(&self, url: &str, timeout: Duration) -> Document {
        match self.get(url, timeout) {
            Ok(html) => {
                let (title, body_text) = parse_html(&html);
                Document::ok(url, title, body_text)
            }
            Err(e) => {
                if e.is_timeout() {
                    tracing::warn!(url, "fetch timed out after {:?}", timeout);
                } else {
                    tracing::warn!(url, "fetch failed: {}", e);
                }
                Document::failed(url, format!("fetch error: {}, url: {}", e, url))
            }
        }
    }
}
