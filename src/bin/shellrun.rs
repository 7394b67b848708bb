// src/bin/shellrun.rs

//! The `shellrun` command-line tool.

use clap::Parser;
use colored::*;
use shellrun::{
    ExecutionError,
    cli::{Cli, dispatcher},
};

/// The main entry point of the `shellrun` application.
/// It sets up logging, parses arguments, dispatches to the correct handler,
/// and performs centralized error handling.
fn main() {
    env_logger::init();

    if let Err(e) = dispatcher::dispatch(Cli::parse()) {
        eprintln!("\n{}: {:#}", "Error".red().bold(), e);

        // A wrapped command that failed on its own terms passes its exit code through,
        // so `shellrun run ...` can stand in for the command in scripts.
        let code = e
            .downcast_ref::<ExecutionError>()
            .and_then(ExecutionError::exit_code)
            .filter(|code| *code != 0)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
