//! Query-string splitting and rebuilding.
//!
//! Works on the raw URL string: the query is cut into `&`-separated
//! segments, names and values are form-decoded for matching, and surviving
//! segments are written back byte-for-byte so kept parameters keep their
//! original encoding.

use url::form_urlencoded;

/// A URL cut into the part before `?`, the raw query, and the raw fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitUrl<'a> {
    pub base: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

pub fn split_url(url: &str) -> SplitUrl<'_> {
    let (rest, fragment) = match url.split_once('#') {
        Some((r, f)) => (r, Some(f)),
        None => (url, None),
    };
    let (base, query) = match rest.split_once('?') {
        Some((b, q)) => (b, Some(q)),
        None => (rest, None),
    };
    SplitUrl {
        base,
        query,
        fragment,
    }
}

/// One `name=value` segment of a query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam<'a> {
    /// Form-decoded name.
    pub name: String,
    /// Form-decoded value ("" when absent).
    pub value: String,
    /// The segment exactly as it appears in the URL.
    pub raw: &'a str,
}

/// Parses a raw query into its segments, in order. Empty segments and
/// segments without a name are skipped.
pub fn query_params(query: &str) -> Vec<QueryParam<'_>> {
    query
        .split('&')
        .filter(|raw| !raw.is_empty())
        .filter_map(|raw| {
            let (name, value) = form_urlencoded::parse(raw.as_bytes()).next()?;
            if name.is_empty() {
                return None;
            }
            Some(QueryParam {
                name: name.into_owned(),
                value: value.into_owned(),
                raw,
            })
        })
        .collect()
}

/// Distinct parameter names of `url` in first-seen order.
pub fn distinct_names(url: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    if let Some(q) = split_url(url).query {
        for p in query_params(q) {
            if !names.contains(&p.name) {
                names.push(p.name);
            }
        }
    }
    names
}

/// Rebuilds `url` keeping only the query segments for which `keep` returns
/// true. Base and fragment are preserved; `?` is omitted when nothing is left.
pub fn retain_params<F>(url: &str, mut keep: F) -> String
where
    F: FnMut(&QueryParam<'_>) -> bool,
{
    let split = split_url(url);
    let kept: Vec<&str> = split
        .query
        .map(query_params)
        .unwrap_or_default()
        .iter()
        .filter(|p| keep(p))
        .map(|p| p.raw)
        .collect();

    let mut out = String::with_capacity(url.len());
    out.push_str(split.base);
    if !kept.is_empty() {
        out.push('?');
        out.push_str(&kept.join("&"));
    }
    if let Some(f) = split.fragment {
        out.push('#');
        out.push_str(f);
    }
    out
}
