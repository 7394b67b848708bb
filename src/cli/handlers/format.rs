// src/cli/handlers/format.rs

use anyhow::Result;

use crate::{cli::args::CommandArgs, core::formatter::format_with};

/// Prints the command line that `run` or `capture` would execute.
pub fn handle(args: &CommandArgs) -> Result<()> {
    println!("{}", format_with(args.policy(), &args.args));
    Ok(())
}
