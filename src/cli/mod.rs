//! CLI module
//!
//! Command-line entry point for the Terraform external data source.
//! The program takes no subcommands. It reads a single request from stdin
//! and writes a single response to stdout.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
