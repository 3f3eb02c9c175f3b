//! # json-columns
//!
//! Column type inference for the Terraform `external` data source.
//!
//! The program reads a request naming a JSON file, loads that file's
//! top-level object, and reports one `{name, type}` descriptor per key.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use json_columns::{build_columns, load_document, load_document_from_str, Result, TypeTag};
//!
//! fn main() -> Result<()> {
//!     let document = load_document("data.json")?;
//!     let inline = load_document_from_str(r#"{"id": 1}"#)?;
//!     assert_eq!(build_columns(&inline)[0].type_tag, TypeTag::Int);
//!     for column in build_columns(&document) {
//!         println!("{} -> {}", column.name, column.type_tag);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! stdin ──► RequestReader ──► load_document ──► build_columns ──► ResponseWriter ──► stdout
//!            {"file": …}        JSON object      Vec<Column>      {"columns": "…"}
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Column type inference
pub mod schema;

/// JSON document loading
pub mod loader;

/// Provider request/response protocol
pub mod protocol;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use loader::{load_document, load_document_from_str};
pub use schema::{build_columns, classify, ColumnDescriptor, TypeTag};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
