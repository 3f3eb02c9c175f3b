//! Common types used throughout json-columns

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type.
///
/// `serde_json` is built with `preserve_order`, so iteration follows the
/// order keys appeared in the source text.
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Name of a JSON value's kind, as used in error messages
pub fn value_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
