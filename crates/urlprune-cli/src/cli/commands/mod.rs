//! CLI command handlers, one file per command.

mod apply;
mod probe;
mod progress;
mod run;
mod train;
mod variants;

pub use apply::run_apply;
pub use probe::run_probe;
pub use run::run_pipeline;
pub use train::run_train;
pub use variants::run_variants;
