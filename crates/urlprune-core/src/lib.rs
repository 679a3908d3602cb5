pub mod config;
pub mod logging;

pub mod apply;
pub mod compare;
pub mod dataset;
pub mod engine;
pub mod fetch;
pub mod pipeline;
pub mod prune;
pub mod query;
pub mod redact;
pub mod rules;
pub mod variants;
