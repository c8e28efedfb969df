//! OpenAPI document layer: the in-memory tree and checked views into it.

pub mod access;
pub mod document;
pub mod method;
pub mod operation;

pub use document::Document;
pub use method::Method;
pub use operation::{Operation, OperationMut};
