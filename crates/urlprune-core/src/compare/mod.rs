//! Page-versus-page comparison.
//!
//! Compares a baseline [`Document`] with a variant and reports how similar
//! the body text is, whether the titles match, and how long the baseline
//! body is.

mod matcher;

pub use matcher::similarity_ratio;

use std::time::Instant;

use crate::fetch::Document;

/// Metrics for one baseline/variant pair. All metric fields are `None` when
/// either side failed to fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub success: bool,
    pub message: Option<String>,
    /// Body-text similarity ratio in [0, 1].
    pub qsim: Option<f64>,
    pub same_title: Option<bool>,
    /// Character length of the baseline body.
    pub body_length: Option<u64>,
    /// Seconds spent computing the comparison.
    pub running_time: Option<f64>,
}

impl Comparison {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            qsim: None,
            same_title: None,
            body_length: None,
            running_time: None,
        }
    }
}

/// Compares `base` against `other`.
pub fn compare(base: &Document, other: &Document) -> Comparison {
    if !base.success || !other.success {
        let message = [base, other]
            .iter()
            .filter(|d| !d.success)
            .map(|d| {
                d.error_message
                    .clone()
                    .unwrap_or_else(|| format!("fetch failed, url: {}", d.url))
            })
            .collect::<Vec<_>>()
            .join("; ");
        return Comparison::failed(message);
    }

    let start = Instant::now();
    let qsim = similarity_ratio(&base.body_text, &other.body_text);
    let body_length = base.body_text.chars().count() as u64;
    let same_title = base.title == other.title;

    Comparison {
        success: true,
        message: None,
        qsim: Some(qsim),
        same_title: Some(same_title),
        body_length: Some(body_length),
        running_time: Some(start.elapsed().as_secs_f64()),
    }
}
