//! External data source protocol
//!
//! The caller writes one JSON object on stdin and expects exactly one JSON
//! object on stdout, with every value encoded as a string.
//!
//! ```text
//! stdin:  {"file": "/path/to/data.json"}
//! stdout: {"columns": "[{\"name\": \"age\", \"type\": \"int\"}]"}
//! ```

mod format;
mod request;
mod response;

pub use format::{to_spaced_string, SpacedAsciiFormatter};
pub use request::{Request, RequestReader, DEFAULT_PATH_KEY};
pub use response::{ResponseWriter, DEFAULT_COLUMNS_KEY};

#[cfg(test)]
mod tests;
