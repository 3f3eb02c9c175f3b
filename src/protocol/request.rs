//! Request reader

use crate::error::{Error, Result};
use crate::types::{value_kind, JsonValue};
use std::io::Read;
use std::path::PathBuf;

/// Default request field holding the document path
pub const DEFAULT_PATH_KEY: &str = "file";

/// A parsed provider request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Path of the JSON document to inspect
    pub path: PathBuf,
}

/// Reads the provider request from a stream
#[derive(Debug, Clone)]
pub struct RequestReader {
    path_key: String,
}

impl Default for RequestReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestReader {
    /// Create a reader that looks up the path under `file`
    pub fn new() -> Self {
        Self {
            path_key: DEFAULT_PATH_KEY.to_string(),
        }
    }

    /// Set the request field that names the document path
    #[must_use]
    pub fn with_path_key(mut self, key: impl Into<String>) -> Self {
        self.path_key = key.into();
        self
    }

    /// Get the configured path key
    pub fn path_key(&self) -> &str {
        &self.path_key
    }

    /// Consume the whole reader and parse it as a request
    ///
    /// Read failures are `Io`. Bytes that do not decode as JSON, including
    /// invalid UTF-8, are `MalformedRequest`.
    pub fn read_from<R: Read>(&self, mut reader: R) -> Result<Request> {
        let mut input = Vec::new();
        reader.read_to_end(&mut input)?;
        self.parse(&input)
    }

    /// Parse a request from its JSON text
    pub fn parse(&self, input: impl AsRef<[u8]>) -> Result<Request> {
        let value: JsonValue = serde_json::from_slice(input.as_ref())
            .map_err(|e| Error::malformed_request(format!("invalid JSON: {e}")))?;

        let query = match value {
            JsonValue::Object(query) => query,
            other => {
                return Err(Error::malformed_request(format!(
                    "expected object, found {}",
                    value_kind(&other)
                )))
            }
        };

        let path = match query.get(&self.path_key) {
            Some(JsonValue::String(path)) => path,
            Some(other) => {
                return Err(Error::malformed_request(format!(
                    "field '{}' must be a string, found {}",
                    self.path_key,
                    value_kind(other)
                )))
            }
            None => {
                return Err(Error::malformed_request(format!(
                    "missing field '{}'",
                    self.path_key
                )))
            }
        };

        tracing::debug!(path = %path, ignored = query.len() - 1, "Parsed request");

        Ok(Request {
            path: PathBuf::from(path),
        })
    }
}
