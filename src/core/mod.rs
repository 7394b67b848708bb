// src/core/mod.rs

//! Pure string-level building blocks: quoting single arguments, joining them into
//! command lines, and deriving seeds. Nothing in here touches the OS.

/// Quoting primitives.
pub mod commons;
/// Turning one argument into one shell token.
pub mod escape;
/// Joining escaped tokens into command lines.
pub mod formatter;
/// Deterministic seeds derived from strings.
pub mod seed;
