// src/cli/handlers/capture.rs

use anyhow::{Context, Result};
use std::io::{self, Write};

use crate::{cli::args::CaptureArgs, core::formatter::format_with, system::shell::Shell};

/// Captures the command's stdout and writes it back out in one piece.
pub fn handle(args: &CaptureArgs, shell: &Shell) -> Result<()> {
    let command_line = format_with(args.command.policy(), &args.command.args);
    let output = shell.capture_line_bytes(&command_line)?;

    let mut stdout = io::stdout().lock();
    let written = if args.trim {
        writeln!(stdout, "{}", String::from_utf8_lossy(&output).trim())
    } else {
        stdout.write_all(&output)
    };
    written
        .and_then(|()| stdout.flush())
        .context("Failed to write captured output")
}
