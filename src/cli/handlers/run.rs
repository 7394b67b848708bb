// src/cli/handlers/run.rs

use anyhow::Result;
use colored::*;

use crate::{cli::args::CommandArgs, core::formatter::format_with, system::shell::Shell};

/// Runs the formatted command line with inherited stdio.
///
/// The echoed command goes to stderr so that the command's own stdout stays clean.
pub fn handle(args: &CommandArgs, shell: &Shell) -> Result<()> {
    let command_line = format_with(args.policy(), &args.args);
    eprintln!("{} {}", "→".blue(), command_line.green());
    shell.run_line(&command_line)?;
    Ok(())
}
