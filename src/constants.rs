// src/constants.rs

use std::os::fd::RawFd;

/// Descriptor number of the standard input stream.
pub const STDIN_FILENO: RawFd = 0;

/// Descriptor number of the standard output stream.
pub const STDOUT_FILENO: RawFd = 1;

/// Descriptor number of the standard error stream.
pub const STDERR_FILENO: RawFd = 2;

/// The shell used to interpret command lines when no config overrides it.
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Device opened as the standard input of captured commands.
pub const NULL_DEVICE: &str = "/dev/null";

/// Bytes requested per `read` while draining a capture pipe.
pub const DEFAULT_READ_CHUNK_SIZE: usize = 4096;

/// Exit status of a forked child whose shell could not be started.
/// Matches the status POSIX shells use for "command not found / not executable".
pub const CHILD_EXEC_FAILURE_STATUS: i32 = 127;

/// The name of the directory holding shellrun configuration (inside the system config dir).
pub const CONFIG_DIR_NAME: &str = "shellrun";

/// The name of the configuration file (inside the shellrun config dir).
pub const CONFIG_FILENAME: &str = "config.toml";

/// The token an empty argument is escaped to under both quoting policies.
pub const EMPTY_ARGUMENT: &str = "''";
