//! Response writer

use super::format::to_spaced_string;
use crate::error::{Error, Result};
use crate::schema::ColumnDescriptor;
use crate::types::JsonObject;
use serde_json::Value;
use std::io::Write;

/// Default response field holding the encoded column list
pub const DEFAULT_COLUMNS_KEY: &str = "columns";

/// Writes the provider response to a stream
#[derive(Debug, Clone)]
pub struct ResponseWriter {
    columns_key: String,
}

impl Default for ResponseWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseWriter {
    /// Create a writer that emits the list under `columns`
    pub fn new() -> Self {
        Self {
            columns_key: DEFAULT_COLUMNS_KEY.to_string(),
        }
    }

    /// Set the response field name
    #[must_use]
    pub fn with_columns_key(mut self, key: impl Into<String>) -> Self {
        self.columns_key = key.into();
        self
    }

    /// Get the configured columns key
    pub fn columns_key(&self) -> &str {
        &self.columns_key
    }

    /// Render the full response line, without the trailing newline.
    ///
    /// The provider protocol only accepts string values, so the column
    /// list is encoded to a string first and then wrapped.
    pub fn render(&self, columns: &[ColumnDescriptor]) -> Result<String> {
        let encoded = to_spaced_string(columns).map_err(Error::Serialize)?;

        let mut response = JsonObject::new();
        response.insert(self.columns_key.clone(), Value::String(encoded));

        to_spaced_string(&response).map_err(Error::Serialize)
    }

    /// Render and write the response followed by a newline.
    ///
    /// Nothing is written unless rendering succeeds.
    pub fn write_to<W: Write>(&self, mut writer: W, columns: &[ColumnDescriptor]) -> Result<()> {
        let mut line = self.render(columns)?;
        line.push('\n');

        writer.write_all(line.as_bytes())?;
        writer.flush()?;

        tracing::debug!(bytes = line.len(), "Wrote response");
        Ok(())
    }
}
