// src/cli/handlers/seed.rs

use anyhow::Result;

use crate::{cli::args::SeedArgs, core::seed::seed_from_str};

/// Prints the seed derived from the given text.
pub fn handle(args: &SeedArgs) -> Result<()> {
    println!("{}", seed_from_str(&args.text));
    Ok(())
}
