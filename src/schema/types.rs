//! Schema types

use serde::{Deserialize, Serialize};

/// Coarse column type reported to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Boolean,
    Int,
    Real,
    String,
    Dynamic,
}

impl TypeTag {
    /// Wire name of the tag
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Boolean => "boolean",
            TypeTag::Int => "int",
            TypeTag::Real => "real",
            TypeTag::String => "string",
            TypeTag::Dynamic => "dynamic",
        }
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One inferred column: a top-level key and its type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Key in the source document
    pub name: String,

    /// Inferred type
    #[serde(rename = "type")]
    pub type_tag: TypeTag,
}

impl ColumnDescriptor {
    /// Create a new column descriptor
    pub fn new(name: impl Into<String>, type_tag: TypeTag) -> Self {
        Self {
            name: name.into(),
            type_tag,
        }
    }
}
