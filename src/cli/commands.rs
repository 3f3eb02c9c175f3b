//! CLI argument parsing

use crate::protocol::{DEFAULT_COLUMNS_KEY, DEFAULT_PATH_KEY};
use clap::Parser;

/// Infer column types from a JSON document for the Terraform external data source.
///
/// Reads `{"file": "<path>"}` on stdin and prints `{"columns": "<json list>"}` on stdout.
#[derive(Parser, Debug, Clone)]
#[command(name = "json-columns")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Request field holding the document path
    #[arg(long, default_value = DEFAULT_PATH_KEY)]
    pub path_key: String,

    /// Response field that receives the encoded column list
    #[arg(long, default_value = DEFAULT_COLUMNS_KEY)]
    pub columns_key: String,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            path_key: DEFAULT_PATH_KEY.to_string(),
            columns_key: DEFAULT_COLUMNS_KEY.to_string(),
            verbose: false,
        }
    }
}
