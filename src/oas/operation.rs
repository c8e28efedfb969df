//! Borrowed views of one operation node (`paths -> path-item -> verb`).

use crate::error::{DocumentError, child_pointer};
use crate::oas::Method;
use crate::oas::access::{as_array, as_array_mut, as_object, as_object_mut, required, required_mut};
use serde_json::{Map, Value};

/// The only request-body media type that is inspected.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Location of the JSON body `properties` object below an operation.
pub fn body_properties_pointer(operation_pointer: &str) -> String {
    ["requestBody", "content", JSON_MEDIA_TYPE, "schema", "properties"]
        .iter()
        .fold(operation_pointer.to_string(), |ptr, token| child_pointer(&ptr, token))
}

#[derive(Debug)]
pub struct Operation<'a> {
    pub path: &'a str,
    pub method: Method,
    /// Location of the operation node, e.g. `#/paths/~1items/get`.
    pub pointer: String,
    node: &'a Map<String, Value>,
}

#[derive(Debug)]
pub struct OperationMut<'a> {
    pub path: &'a str,
    pub method: Method,
    pub pointer: String,
    node: &'a mut Map<String, Value>,
}

impl<'a> Operation<'a> {
    pub(crate) fn new(path: &'a str, method: Method, pointer: String, node: &'a Map<String, Value>) -> Self {
        Self {
            path,
            method,
            pointer,
            node,
        }
    }

    /// Entries of the `parameters` list; empty when the key is absent.
    pub fn parameters(&self) -> Result<&'a [Value], DocumentError> {
        let node: &'a Map<String, Value> = self.node;
        match node.get("parameters") {
            None => Ok(&[]),
            Some(list) => as_array(list, &child_pointer(&self.pointer, "parameters")),
        }
    }

    /// `requestBody.content["application/json"].schema.properties`.
    ///
    /// `None` when the operation has no request body or no JSON content. Once
    /// JSON content is present, `schema` and `properties` are required.
    pub fn json_body_properties(&self) -> Result<Option<&'a Map<String, Value>>, DocumentError> {
        let node: &'a Map<String, Value> = self.node;

        let body_ptr = child_pointer(&self.pointer, "requestBody");
        let Some(body) = node.get("requestBody") else {
            return Ok(None);
        };
        let body = as_object(body, &body_ptr)?;

        let content_ptr = child_pointer(&body_ptr, "content");
        let Some(content) = body.get("content") else {
            return Ok(None);
        };
        let content = as_object(content, &content_ptr)?;

        let media_ptr = child_pointer(&content_ptr, JSON_MEDIA_TYPE);
        let Some(media) = content.get(JSON_MEDIA_TYPE) else {
            return Ok(None);
        };
        let media = as_object(media, &media_ptr)?;

        let schema_ptr = child_pointer(&media_ptr, "schema");
        let schema = as_object(required(media, "schema", &media_ptr)?, &schema_ptr)?;

        let props_ptr = child_pointer(&schema_ptr, "properties");
        as_object(required(schema, "properties", &schema_ptr)?, &props_ptr).map(Some)
    }
}

impl<'a> OperationMut<'a> {
    pub(crate) fn new(path: &'a str, method: Method, pointer: String, node: &'a mut Map<String, Value>) -> Self {
        Self {
            path,
            method,
            pointer,
            node,
        }
    }

    pub fn parameters_mut(&mut self) -> Result<&mut [Value], DocumentError> {
        let pointer = child_pointer(&self.pointer, "parameters");
        match self.node.get_mut("parameters") {
            None => Ok(&mut []),
            Some(list) => as_array_mut(list, &pointer),
        }
    }

    pub fn json_body_properties_mut(&mut self) -> Result<Option<&mut Map<String, Value>>, DocumentError> {
        let body_ptr = child_pointer(&self.pointer, "requestBody");
        let Some(body) = self.node.get_mut("requestBody") else {
            return Ok(None);
        };
        let body = as_object_mut(body, &body_ptr)?;

        let content_ptr = child_pointer(&body_ptr, "content");
        let Some(content) = body.get_mut("content") else {
            return Ok(None);
        };
        let content = as_object_mut(content, &content_ptr)?;

        let media_ptr = child_pointer(&content_ptr, JSON_MEDIA_TYPE);
        let Some(media) = content.get_mut(JSON_MEDIA_TYPE) else {
            return Ok(None);
        };
        let media = as_object_mut(media, &media_ptr)?;

        let schema_ptr = child_pointer(&media_ptr, "schema");
        let schema = as_object_mut(required_mut(media, "schema", &media_ptr)?, &schema_ptr)?;

        let props_ptr = child_pointer(&schema_ptr, "properties");
        as_object_mut(required_mut(schema, "properties", &schema_ptr)?, &props_ptr).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn op(node: &Value) -> Operation<'_> {
        Operation::new("/items", Method::Post, "#/paths/~1items/post".into(), node.as_object().unwrap())
    }

    #[test]
    fn absent_parameters_are_empty() {
        let node = json!({ "summary": "x" });
        assert!(op(&node).parameters().unwrap().is_empty());
    }

    #[test]
    fn parameters_must_be_a_list() {
        let node = json!({ "parameters": { "name": "id" } });
        assert_eq!(
            op(&node).parameters().unwrap_err(),
            DocumentError::NotAnArray {
                pointer: "#/paths/~1items/post/parameters".into()
            }
        );
    }

    #[test]
    fn non_json_bodies_are_ignored() {
        let node = json!({
            "requestBody": { "content": { "application/xml": { "schema": {} } } }
        });
        assert_eq!(op(&node).json_body_properties().unwrap(), None);

        let node = json!({ "requestBody": { "description": "no content" } });
        assert_eq!(op(&node).json_body_properties().unwrap(), None);
    }

    #[test]
    fn json_body_without_properties_is_an_error() {
        let node = json!({
            "requestBody": { "content": { "application/json": { "schema": { "type": "array" } } } }
        });
        assert_eq!(
            op(&node).json_body_properties().unwrap_err(),
            DocumentError::MissingKey {
                pointer: "#/paths/~1items/post/requestBody/content/application~1json/schema".into(),
                key: "properties".into(),
            }
        );
    }

    #[test]
    fn mutable_view_reaches_the_same_properties() {
        let mut node = json!({
            "requestBody": { "content": { "application/json": {
                "schema": { "properties": { "name": { "type": "string" } } }
            } } }
        });
        let mut op = OperationMut::new(
            "/items",
            Method::Post,
            "#/paths/~1items/post".into(),
            node.as_object_mut().unwrap(),
        );
        let props = op.json_body_properties_mut().unwrap().unwrap();
        props["name"]["example"] = json!("Widget");

        assert_eq!(
            node["requestBody"]["content"]["application/json"]["schema"]["properties"]["name"],
            json!({ "type": "string", "example": "Widget" })
        );
    }
}
