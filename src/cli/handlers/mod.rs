// src/cli/handlers/mod.rs

//! One module per CLI action.

/// `shellrun capture`.
pub mod capture;
/// Helpers shared by the handlers.
pub mod commons;
/// `shellrun format`.
pub mod format;
/// `shellrun run`.
pub mod run;
/// `shellrun seed`.
pub mod seed;
