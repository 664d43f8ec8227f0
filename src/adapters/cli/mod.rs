//! CLI Adapter
//!
//! Command definitions and terminal presentation for the core's outputs.

pub mod commands;
pub mod display;

pub use commands::{CliApp, Command, HoldersCmd, ResolveCmd, TopCmd};
