use dor_core::logging;

mod cli;

use crate::cli::{Cli, Outcome};

/// Exit status when the run finished but some files FAILED.
const EXIT_FILES_FAILED: i32 = 2;

fn main() {
    // Initialize logging as early as possible; never let it stop a run.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    match Cli::run_from_args() {
        Ok(Outcome::Clean) => {}
        Ok(Outcome::FilesFailed) => std::process::exit(EXIT_FILES_FAILED),
        Err(err) => {
            eprintln!("dor error: {:#}", err);
            std::process::exit(1);
        }
    }
}
