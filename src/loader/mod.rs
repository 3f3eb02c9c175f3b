//! Document loader
//!
//! Reads the JSON file named by the request and checks that its top-level
//! value is an object.

use crate::error::{Error, Result};
use crate::types::{value_kind, JsonObject, JsonValue};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a JSON object from a file.
///
/// The file handle is dropped before this returns, on both paths.
pub fn load_document(path: impl AsRef<Path>) -> Result<JsonObject> {
    let path = path.as_ref();

    let value: JsonValue = {
        let file = File::open(path).map_err(|e| Error::file_not_found(path, e))?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            if e.is_io() {
                // Read failures (e.g. path is a directory) count as unreadable
                Error::file_not_found(path, std::io::Error::from(e))
            } else {
                Error::invalid_document(path, e)
            }
        })?
    };

    parse_document(path, value)
}

/// Load a JSON object from an in-memory string
pub fn load_document_from_str(content: &str) -> Result<JsonObject> {
    let path = Path::new("<string>");
    let value: JsonValue =
        serde_json::from_str(content).map_err(|e| Error::invalid_document(path, e))?;
    parse_document(path, value)
}

fn parse_document(path: &Path, value: JsonValue) -> Result<JsonObject> {
    match value {
        JsonValue::Object(map) => {
            tracing::debug!(path = %path.display(), keys = map.len(), "Loaded document");
            Ok(map)
        }
        other => Err(Error::unsupported_shape(path, value_kind(&other))),
    }
}
