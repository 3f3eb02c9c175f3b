//! Schema inference module
//!
//! Maps each top-level field of a JSON object to a coarse column type.
//!
//! # Types
//!
//! | JSON value          | Tag       |
//! |---------------------|-----------|
//! | `true` / `false`    | `boolean` |
//! | integral number     | `int`     |
//! | fractional number   | `real`    |
//! | string              | `string`  |
//! | object / array      | `dynamic` |
//! | `null`              | `string`  |
//!
//! Nested values are not inspected.

mod inference;
mod types;

pub use inference::{build_columns, classify};
pub use types::{ColumnDescriptor, TypeTag};
