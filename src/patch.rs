//! Write operator answers back into the document.
//!
//! Existing `example` values are never replaced, so applying the same answers
//! twice leaves the document unchanged after the first pass.

use crate::error::{DocumentError, child_pointer, schema_pointer};
use crate::examples::{BodyExamples, BodyKey, ParamExamples};
use crate::oas::Document;
use crate::oas::access::{as_object_mut, as_str, required, required_mut};
use crate::oas::operation::body_properties_pointer;

use serde_json::Value;

/// Keys older tooling stashed on parameter objects; never valid OpenAPI.
const ANNOTATION_KEYS: [&str; 2] = ["method", "endpoint"];

/// Set `schema.example` on every parameter whose name was answered and strip
/// the `method`/`endpoint` annotation keys from it. Returns how many examples
/// were written.
pub fn apply_param_examples(doc: &mut Document, examples: &ParamExamples) -> Result<usize, DocumentError> {
    let mut written = 0;

    for mut op in doc.operations_mut()? {
        let list_ptr = child_pointer(&op.pointer, "parameters");
        for (index, param) in op.parameters_mut()?.iter_mut().enumerate() {
            let ptr = child_pointer(&list_ptr, &index.to_string());
            let param = as_object_mut(param, &ptr)?;

            let name = as_str(required(param, "name", &ptr)?, &child_pointer(&ptr, "name"))?;
            let Some(example) = examples.get(name) else {
                continue;
            };

            let schema_ptr = schema_pointer(&ptr);
            let schema = as_object_mut(required_mut(param, "schema", &ptr)?, &schema_ptr)?;
            if !schema.contains_key("example") {
                schema.insert("example".to_string(), Value::String(example.clone()));
                written += 1;
            }

            for key in ANNOTATION_KEYS {
                param.shift_remove(key);
            }
        }
    }

    Ok(written)
}

/// Set `example` on answered request-body properties of write operations that
/// still lack one. Answers only apply to the operation they were given for.
pub fn apply_body_examples(doc: &mut Document, examples: &BodyExamples) -> Result<usize, DocumentError> {
    let mut written = 0;

    for mut op in doc.operations_mut()? {
        if !op.method.is_write() {
            continue;
        }
        let path = op.path;
        let method = op.method;
        let props_ptr = body_properties_pointer(&op.pointer);
        let Some(properties) = op.json_body_properties_mut()? else {
            continue;
        };

        for (name, schema) in properties.iter_mut() {
            let Some(example) = examples.get(&BodyKey::new(path, method, name.as_str())) else {
                continue;
            };
            let schema = as_object_mut(schema, &child_pointer(&props_ptr, name))?;
            if schema.contains_key("example") {
                continue;
            }
            schema.insert("example".to_string(), Value::String(example.clone()));
            written += 1;
        }
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::Method;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn params(pairs: &[(&str, &str)]) -> ParamExamples {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn parameter_example_is_written_and_annotations_removed() {
        let mut doc = Document::from_value(json!({
            "paths": { "/items": { "get": { "parameters": [
                { "name": "id", "in": "query", "schema": { "type": "string" },
                  "method": "get", "endpoint": "/items" }
            ] } } }
        }))
        .unwrap();

        let written = apply_param_examples(&mut doc, &params(&[("id", "42")])).unwrap();

        assert_eq!(written, 1);
        assert_eq!(
            doc.as_value()["paths"]["/items"]["get"]["parameters"][0],
            json!({ "name": "id", "in": "query", "schema": { "type": "string", "example": "42" } })
        );
    }

    #[test]
    fn existing_parameter_examples_are_kept() {
        let mut doc = Document::from_value(json!({
            "paths": {
                "/a": { "get": { "parameters": [
                    { "name": "id", "schema": { "type": "integer", "example": 7 } }
                ] } },
                "/b": { "get": { "parameters": [
                    { "name": "id", "schema": { "type": "string" } }
                ] } }
            }
        }))
        .unwrap();

        let written = apply_param_examples(&mut doc, &params(&[("id", "x")])).unwrap();

        assert_eq!(written, 1);
        let paths = &doc.as_value()["paths"];
        assert_eq!(paths["/a"]["get"]["parameters"][0]["schema"]["example"], json!(7));
        assert_eq!(paths["/b"]["get"]["parameters"][0]["schema"]["example"], json!("x"));
    }

    #[test]
    fn unanswered_parameters_are_untouched() {
        let value = json!({
            "paths": { "/items": { "get": { "parameters": [
                { "name": "q", "schema": { "type": "string" }, "method": "get" }
            ] } } }
        });
        let mut doc = Document::from_value(value.clone()).unwrap();
        apply_param_examples(&mut doc, &params(&[("id", "1")])).unwrap();
        assert_eq!(doc.as_value(), &value);
    }

    #[test]
    fn body_property_examples_fill_only_missing_ones() {
        let mut doc = Document::from_value(json!({
            "paths": { "/items": { "post": { "requestBody": { "content": { "application/json": {
                "schema": { "type": "object", "properties": {
                    "name": { "type": "string" },
                    "price": { "type": "number", "example": 9.99 }
                } }
            } } } } } }
        }))
        .unwrap();

        let mut examples = BodyExamples::new();
        examples.insert(BodyKey::new("/items", Method::Post, "name"), "Widget".into());
        examples.insert(BodyKey::new("/items", Method::Post, "price"), "1".into());

        assert_eq!(apply_body_examples(&mut doc, &examples).unwrap(), 1);

        let props = &doc.as_value()["paths"]["/items"]["post"]["requestBody"]["content"]["application/json"]
            ["schema"]["properties"];
        assert_eq!(props["name"]["example"], json!("Widget"));
        assert_eq!(props["price"]["example"], json!(9.99));
    }

    #[test]
    fn body_answers_do_not_leak_into_other_operations() {
        let body = json!({ "content": { "application/json": { "schema": { "properties": {
            "name": { "type": "string" }
        } } } } });
        let mut doc = Document::from_value(json!({
            "paths": {
                "/items": { "post": { "requestBody": body.clone() } },
                "/users": { "put": { "requestBody": body } }
            }
        }))
        .unwrap();

        let mut examples = BodyExamples::new();
        examples.insert(BodyKey::new("/items", Method::Post, "name"), "Widget".into());
        examples.insert(BodyKey::new("/users", Method::Put, "name"), "Alice".into());
        apply_body_examples(&mut doc, &examples).unwrap();

        let paths = &doc.as_value()["paths"];
        let example = |path: &str, method: &str| {
            paths[path][method]["requestBody"]["content"]["application/json"]["schema"]["properties"]["name"]
                ["example"]
                .clone()
        };
        assert_eq!(example("/items", "post"), json!("Widget"));
        assert_eq!(example("/users", "put"), json!("Alice"));
    }

    #[test]
    fn reapplying_the_same_answers_changes_nothing() {
        let mut doc = Document::from_value(json!({
            "paths": { "/items": {
                "get": { "parameters": [ { "name": "id", "schema": { "type": "string" } } ] },
                "post": { "requestBody": { "content": { "application/json": { "schema": {
                    "properties": { "name": { "type": "string" } }
                } } } } }
            } }
        }))
        .unwrap();
        let param_examples = params(&[("id", "42")]);
        let mut body_examples = BodyExamples::new();
        body_examples.insert(BodyKey::new("/items", Method::Post, "name"), "Widget".into());

        apply_param_examples(&mut doc, &param_examples).unwrap();
        apply_body_examples(&mut doc, &body_examples).unwrap();
        let first = doc.to_pretty_json().unwrap();

        assert_eq!(apply_param_examples(&mut doc, &param_examples).unwrap(), 0);
        assert_eq!(apply_body_examples(&mut doc, &body_examples).unwrap(), 0);
        assert_eq!(doc.to_pretty_json().unwrap(), first);
    }
}
