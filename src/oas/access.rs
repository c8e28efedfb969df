//! Checked accessors over `serde_json::Value` that report shape problems as
//! `DocumentError` instead of panicking.

use crate::error::DocumentError;
use serde_json::{Map, Value};

pub fn as_object<'a>(value: &'a Value, pointer: &str) -> Result<&'a Map<String, Value>, DocumentError> {
    value.as_object().ok_or_else(|| DocumentError::NotAnObject {
        pointer: pointer.to_string(),
    })
}

pub fn as_object_mut<'a>(
    value: &'a mut Value,
    pointer: &str,
) -> Result<&'a mut Map<String, Value>, DocumentError> {
    value.as_object_mut().ok_or_else(|| DocumentError::NotAnObject {
        pointer: pointer.to_string(),
    })
}

pub fn as_array<'a>(value: &'a Value, pointer: &str) -> Result<&'a [Value], DocumentError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| DocumentError::NotAnArray {
            pointer: pointer.to_string(),
        })
}

pub fn as_array_mut<'a>(value: &'a mut Value, pointer: &str) -> Result<&'a mut [Value], DocumentError> {
    value
        .as_array_mut()
        .map(Vec::as_mut_slice)
        .ok_or_else(|| DocumentError::NotAnArray {
            pointer: pointer.to_string(),
        })
}

pub fn as_str<'a>(value: &'a Value, pointer: &str) -> Result<&'a str, DocumentError> {
    value.as_str().ok_or_else(|| DocumentError::NotAString {
        pointer: pointer.to_string(),
    })
}

/// Look up `key` in an object located at `pointer`.
pub fn required<'a>(
    map: &'a Map<String, Value>,
    key: &str,
    pointer: &str,
) -> Result<&'a Value, DocumentError> {
    map.get(key).ok_or_else(|| missing(key, pointer))
}

pub fn required_mut<'a>(
    map: &'a mut Map<String, Value>,
    key: &str,
    pointer: &str,
) -> Result<&'a mut Value, DocumentError> {
    map.get_mut(key).ok_or_else(|| missing(key, pointer))
}

fn missing(key: &str, pointer: &str) -> DocumentError {
    DocumentError::MissingKey {
        pointer: pointer.to_string(),
        key: key.to_string(),
    }
}
