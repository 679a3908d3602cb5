//! Per-domain parameter rules.
//!
//! Turns the fetch-and-compare observations of one training pass into
//! [`DomainParamStat`] rows: per (domain, parameter) means, adjusted against
//! the domain's AA-test noise floor. The resulting [`RuleTable`] is read-only
//! and is what the pruner consults.

mod builder;
mod observation;
mod overrides;
mod table;

pub use builder::{build, DomainParamStat};
pub use observation::{ParameterObservation, AA_TEST_PARAM};
pub use overrides::{OverrideTable, ParamOverride};
pub use table::RuleTable;
