//! Column type inference from JSON values

use super::types::{ColumnDescriptor, TypeTag};
use crate::types::JsonObject;
use serde_json::{Number, Value};

/// Classify a single JSON value.
///
/// Booleans are matched before numbers. A number is `int` when its
/// written form has no fraction or exponent, whatever its magnitude.
/// `null` falls back to `string`.
pub fn classify(value: &Value) -> TypeTag {
    match value {
        Value::Bool(_) => TypeTag::Boolean,
        Value::Number(n) => classify_number(n),
        Value::String(_) => TypeTag::String,
        Value::Object(_) | Value::Array(_) => TypeTag::Dynamic,
        Value::Null => TypeTag::String,
    }
}

// serde_json is built with `arbitrary_precision`, so `Display` yields the
// number's source text (`-0`, `1e400` and 30-digit integers stay intact).
fn classify_number(n: &Number) -> TypeTag {
    if n.to_string().contains(|c: char| matches!(c, '.' | 'e' | 'E')) {
        TypeTag::Real
    } else {
        TypeTag::Int
    }
}

/// Build one descriptor per top-level key, in document order
pub fn build_columns(document: &JsonObject) -> Vec<ColumnDescriptor> {
    document
        .iter()
        .map(|(key, value)| {
            let type_tag = classify(value);
            tracing::trace!(column = %key, column_type = %type_tag, "Classified column");
            ColumnDescriptor::new(key.clone(), type_tag)
        })
        .collect()
}
