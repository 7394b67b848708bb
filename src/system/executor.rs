// src/system/executor.rs

use nix::errno::Errno;
use std::ffi::{CString, NulError};
use std::os::unix::{ffi::OsStrExt, process::ExitStatusExt};
use std::path::Path;
use std::process::{Command as StdCommand, ExitStatus, Stdio};
use thiserror::Error;

/// Every way running or capturing a command line can fail.
///
/// Each variant carries the literal command text it was asked to run.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The shell binary could not be spawned.
    #[error("Command '{command}' could not be executed with '{shell}': {source}")]
    ShellUnavailable {
        /// The command line that was being run.
        command: String,
        /// The shell that failed to start.
        shell: String,
        /// The underlying spawn error.
        #[source]
        source: std::io::Error,
    },
    /// No pipe could be allocated for the capture.
    #[error("Cannot create a pipe for command '{command}': {source}")]
    Pipe {
        /// The command line that was being captured.
        command: String,
        /// The system error reported by `pipe`.
        #[source]
        source: Errno,
    },
    /// The process could not be forked.
    #[error("Cannot fork for command '{command}': {source}")]
    Fork {
        /// The command line that was being captured.
        command: String,
        /// The system error reported by `fork`.
        #[source]
        source: Errno,
    },
    /// The shell path or the command line contains a NUL byte and cannot be passed to `exec`.
    #[error("Command '{command}' cannot be passed to the shell: {source}")]
    InvalidCommand {
        /// The offending command line.
        command: String,
        /// Where the interior NUL byte was found.
        #[source]
        source: NulError,
    },
    /// Reading the child's output failed before end-of-stream.
    #[error("Failed to read the output of command '{command}': {source}")]
    Read {
        /// The command line whose output was being drained.
        command: String,
        /// The underlying read error.
        #[source]
        source: std::io::Error,
    },
    /// `waitpid` itself failed.
    #[error("Cannot wait for command '{command}' (pid {pid}): {source}")]
    Wait {
        /// The command line run by the child.
        command: String,
        /// The pid that was awaited.
        pid: i32,
        /// The system error reported by `waitpid`.
        #[source]
        source: Errno,
    },
    /// `waitpid` reported a different process, or a state other than termination.
    #[error("Cannot wait for command '{command}' (pid {pid})")]
    WaitMismatch {
        /// The command line run by the child.
        command: String,
        /// The pid that was awaited.
        pid: i32,
    },
    /// The command ran to completion and reported failure.
    #[error("Command '{command}' exited with code {code}")]
    NonZeroExit {
        /// The command line that failed.
        command: String,
        /// Its exit code.
        code: i32,
    },
    /// The command was killed by a signal.
    #[error("Command '{command}' was terminated by signal {signal}")]
    Signaled {
        /// The command line that was killed.
        command: String,
        /// The terminating signal number.
        signal: i32,
    },
    /// The captured output is not valid UTF-8.
    #[error("Command '{command}' produced output that was not valid UTF-8")]
    InvalidUtf8Output {
        /// The command line whose output was captured.
        command: String,
        /// The decoding error; the raw bytes can be recovered from it.
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl ExecutionError {
    /// The command line this error is about.
    pub fn command(&self) -> &str {
        match self {
            Self::ShellUnavailable { command, .. }
            | Self::Pipe { command, .. }
            | Self::Fork { command, .. }
            | Self::InvalidCommand { command, .. }
            | Self::Read { command, .. }
            | Self::Wait { command, .. }
            | Self::WaitMismatch { command, .. }
            | Self::NonZeroExit { command, .. }
            | Self::Signaled { command, .. }
            | Self::InvalidUtf8Output { command, .. } => command,
        }
    }

    /// The exit code of the command, if it ran and exited unsuccessfully.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::NonZeroExit { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Runs `command_line` through `shell -c`, blocking until it finishes.
///
/// Standard input, output and error are inherited from the caller; nothing is
/// captured. Fails if the shell cannot be started or the command does not exit
/// with status zero.
pub fn execute_command(shell: &Path, command_line: &str) -> Result<(), ExecutionError> {
    log::debug!("Running '{}' with {}", command_line, shell.display());
    reject_interior_nul(shell, command_line)?;

    let status = StdCommand::new(shell)
        .arg("-c")
        .arg(command_line)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| ExecutionError::ShellUnavailable {
            command: command_line.to_string(),
            shell: shell.display().to_string(),
            source,
        })?;

    check_exit_status(command_line, status)
}

/// `exec` cannot take strings with interior NUL bytes. Checked up front so both
/// executors report it as [`ExecutionError::InvalidCommand`].
fn reject_interior_nul(shell: &Path, command_line: &str) -> Result<(), ExecutionError> {
    let invalid = |source| ExecutionError::InvalidCommand {
        command: command_line.to_string(),
        source,
    };
    CString::new(shell.as_os_str().as_bytes()).map_err(invalid)?;
    CString::new(command_line).map_err(invalid)?;
    Ok(())
}

fn check_exit_status(command_line: &str, status: ExitStatus) -> Result<(), ExecutionError> {
    if status.success() {
        return Ok(());
    }
    log::debug!("'{}' finished with {}", command_line, status);

    match status.code() {
        Some(code) => Err(ExecutionError::NonZeroExit {
            command: command_line.to_string(),
            code,
        }),
        None => Err(ExecutionError::Signaled {
            command: command_line.to_string(),
            signal: status.signal().unwrap_or_default(),
        }),
    }
}
