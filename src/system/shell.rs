// src/system/shell.rs

use crate::{
    core::formatter::format_with,
    models::{Arg, Policy},
    system::{
        capture::capture_output,
        config::{self, ConfigError, ShellConfig},
        executor::{self, ExecutionError},
    },
};
use std::path::Path;

/// A configured shell that builds command lines from arguments and runs them.
///
/// ```no_run
/// use shellrun::{Policy, Shell};
///
/// let shell = Shell::default();
/// let listing = shell.capture(Policy::NoSubstitution, ["ls", "-1", "my dir"])?;
/// shell.run(Policy::AllowSubstitution, ["make", "&&", "make", "install"])?;
/// # Ok::<(), shellrun::ExecutionError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Shell {
    config: ShellConfig,
}

impl Shell {
    /// Creates a shell from an explicit configuration.
    pub fn new(config: ShellConfig) -> Self {
        Self { config }
    }

    /// Creates a shell from the user's `config.toml`, or defaults if there is none.
    pub fn from_config_file() -> Result<Self, ConfigError> {
        config::load_config().map(Self::new)
    }

    /// The configuration in use.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// The shell binary that interprets command lines.
    pub fn program(&self) -> &Path {
        &self.config.shell
    }

    /// Formats `args` under `policy` and runs the result, inheriting stdio.
    pub fn run<'a, I>(&self, policy: Policy, args: I) -> Result<(), ExecutionError>
    where
        I: IntoIterator,
        I::Item: Into<Arg<'a>>,
    {
        self.run_line(&format_with(policy, args))
    }

    /// Runs an already formatted command line, inheriting stdio.
    pub fn run_line(&self, command_line: &str) -> Result<(), ExecutionError> {
        executor::execute_command(&self.config.shell, command_line)
    }

    /// Formats `args` under `policy`, runs the result and returns its standard output.
    pub fn capture<'a, I>(&self, policy: Policy, args: I) -> Result<String, ExecutionError>
    where
        I: IntoIterator,
        I::Item: Into<Arg<'a>>,
    {
        self.capture_line(&format_with(policy, args))
    }

    /// Runs an already formatted command line and returns its standard output,
    /// which must be valid UTF-8.
    pub fn capture_line(&self, command_line: &str) -> Result<String, ExecutionError> {
        let bytes = self.capture_line_bytes(command_line)?;
        String::from_utf8(bytes).map_err(|source| ExecutionError::InvalidUtf8Output {
            command: command_line.to_string(),
            source,
        })
    }

    /// Like [`Shell::capture`], but returns the raw bytes.
    pub fn capture_bytes<'a, I>(&self, policy: Policy, args: I) -> Result<Vec<u8>, ExecutionError>
    where
        I: IntoIterator,
        I::Item: Into<Arg<'a>>,
    {
        self.capture_line_bytes(&format_with(policy, args))
    }

    /// Like [`Shell::capture_line`], but returns the raw bytes.
    pub fn capture_line_bytes(&self, command_line: &str) -> Result<Vec<u8>, ExecutionError> {
        capture_output(&self.config.shell, command_line, self.config.read_chunk_size)
    }
}
