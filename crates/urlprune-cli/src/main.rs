use std::time::Duration;

use urlprune_core::logging;

mod cli;

use crate::cli::CliCommand;

/// How long exit waits for blocking workers abandoned after a task timeout.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(1);

fn main() {
    // File logging when possible, stderr otherwise.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(err) => {
            eprintln!("urlprune error: start runtime: {}", err);
            std::process::exit(1);
        }
    };
    let result = runtime.block_on(CliCommand::run_from_args());
    runtime.shutdown_timeout(SHUTDOWN_GRACE);

    if let Err(err) = result {
        eprintln!("urlprune error: {:#}", err);
        std::process::exit(1);
    }
}
