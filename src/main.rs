//! json-columns CLI
//!
//! Terraform external data source program: request on stdin, response on stdout.

use clap::Parser;
use json_columns::cli::{Cli, Runner};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // stdout carries the protocol response, so logs always go to stderr
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run() {
        tracing::debug!(kind = e.kind(), "Run failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
