//! # Till Entry Point
//!
//! Runs a single change calculation on the console.
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    match till_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Transaction failed");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
