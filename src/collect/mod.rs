//! Collectors: find every parameter and request-body property that still
//! lacks an `example`, together with the context needed to prompt for it.
//!
//! Collection never writes to the document; context lives in the site records.

pub mod body;
pub mod params;
pub mod site;

pub use body::collect_body_properties;
pub use params::collect_params;
pub use site::{ParamSite, PropertySite};

use crate::error::DocumentError;
use crate::oas::access::required;
use serde_json::{Map, Value};

/// Human-readable `type` of a schema; non-string types (OAS 3.1 arrays) are
/// shown as JSON.
fn describe_type(schema: &Map<String, Value>, pointer: &str) -> Result<String, DocumentError> {
    match required(schema, "type", pointer)? {
        Value::String(ty) => Ok(ty.clone()),
        other => Ok(other.to_string()),
    }
}

/// True if `schema` already carries an `example` key (any value, even null).
fn has_example(schema: &Map<String, Value>) -> bool {
    schema.contains_key("example")
}
