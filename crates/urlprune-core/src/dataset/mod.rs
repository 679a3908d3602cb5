//! Tabular input and output.
//!
//! All files are tab-separated with a header row and no field quoting:
//! commas and quotes occur inside URLs, tabs do not.

mod error;
mod input;
mod output;
mod record;
mod rules_table;

pub use error::DatasetError;
pub use input::{dedupe_by_id, read_nonempty_records, read_records};
pub use output::{write_results, CleanUrlResult};
pub use record::{derive_full_domain, derive_url_id, UrlRecord};
pub use rules_table::{read_rule_table, write_rule_table};
