//! Typed errors for documents that do not have the shape the traversal expects.
//!
//! Every variant carries a JSON-pointer style location (`#/paths/~1items/get`)
//! so the operator can find the offending node.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("expected an object at '{pointer}'")]
    NotAnObject { pointer: String },

    #[error("expected an array at '{pointer}'")]
    NotAnArray { pointer: String },

    #[error("expected a string at '{pointer}'")]
    NotAString { pointer: String },

    #[error("missing required key '{key}' at '{pointer}'")]
    MissingKey { pointer: String, key: String },
}

/// Append one reference token to a pointer, escaping `~` and `/`.
pub fn child_pointer(base: &str, token: &str) -> String {
    format!("{}/{}", base, token.replace('~', "~0").replace('/', "~1"))
}

/// Location of the `schema` object below a parameter.
pub fn schema_pointer(param_pointer: &str) -> String {
    child_pointer(param_pointer, "schema")
}
