//! CLI module for jobtrack - command-line interface and subcommands.
//!
//! `commands` defines what can be typed; `render` turns records into
//! terminal output.

pub mod commands;
pub mod render;

pub use commands::Cli;
