//! # System Interaction Layer
//!
//! This module is the boundary between formatted command lines and the operating
//! system.
//!
//! ## Modules
//!
//! - **`executor`**: runs a command line through `shell -c` with inherited stdio and
//!   defines [`ExecutionError`](executor::ExecutionError), shared by every module here.
//! - **`capture`**: the pipe/fork/exec protocol that collects a command's standard
//!   output.
//! - **`wait`**: reaps one child and turns its status into success or an error.
//! - **`config`**: loads `config.toml` (which shell to use, how much to read at once).
//! - **`shell`**: the [`Shell`](shell::Shell) facade tying the above together.

pub mod capture;
/// Shell configuration loaded from `config.toml`.
pub mod config;
/// Non-capturing executor and the shared error type.
pub mod executor;
/// The [`Shell`](shell::Shell) facade.
pub mod shell;
/// Reaping forked children.
pub mod wait;
