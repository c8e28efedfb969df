//! Loading, traversing and writing the OpenAPI document.
//!
//! The document is kept as a `serde_json::Value` so everything the tool does
//! not touch is written back exactly as it was read (key order included).

use crate::Result;
use crate::error::{DocumentError, child_pointer};
use crate::oas::access::{as_object, as_object_mut, required, required_mut};
use crate::oas::{Method, Operation, OperationMut};

use anyhow::Context;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

const ROOT_POINTER: &str = "#";

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Read and parse a JSON document, failing if it has no `paths` object.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read OpenAPI document {}", path.display()))?;
        let root: Value = serde_json::from_str(&text)
            .with_context(|| format!("parse OpenAPI document {} as JSON", path.display()))?;
        let doc = Self::from_value(root)
            .with_context(|| format!("unexpected OpenAPI document shape in {}", path.display()))?;
        Ok(doc)
    }

    pub fn from_value(root: Value) -> std::result::Result<Self, DocumentError> {
        let doc = Self { root };
        doc.paths()?;
        Ok(doc)
    }

    #[cfg(test)]
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Pretty JSON with 2-space indentation.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }

    /// Write the document to `path`, replacing any existing file.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = self.to_pretty_json()?;
        fs::write(path, json).with_context(|| format!("write output file {}", path.display()))?;
        Ok(())
    }

    fn paths(&self) -> std::result::Result<&Map<String, Value>, DocumentError> {
        let root = as_object(&self.root, ROOT_POINTER)?;
        let paths = required(root, "paths", ROOT_POINTER)?;
        as_object(paths, &child_pointer(ROOT_POINTER, "paths"))
    }

    fn paths_mut(&mut self) -> std::result::Result<&mut Map<String, Value>, DocumentError> {
        let root = as_object_mut(&mut self.root, ROOT_POINTER)?;
        let paths = required_mut(root, "paths", ROOT_POINTER)?;
        as_object_mut(paths, &child_pointer(ROOT_POINTER, "paths"))
    }

    /// All operations in document order: paths first, then verbs within a path.
    pub fn operations(&self) -> std::result::Result<Vec<Operation<'_>>, DocumentError> {
        let paths_ptr = child_pointer(ROOT_POINTER, "paths");
        let mut out = Vec::new();

        for (path, item) in self.paths()? {
            let item_ptr = child_pointer(&paths_ptr, path);
            for (key, node) in as_object(item, &item_ptr)? {
                let Some(method) = Method::from_key(key) else {
                    continue;
                };
                let pointer = child_pointer(&item_ptr, key);
                let node = as_object(node, &pointer)?;
                out.push(Operation::new(path, method, pointer, node));
            }
        }

        Ok(out)
    }

    pub fn operations_mut(&mut self) -> std::result::Result<Vec<OperationMut<'_>>, DocumentError> {
        let paths_ptr = child_pointer(ROOT_POINTER, "paths");
        let mut out = Vec::new();

        for (path, item) in self.paths_mut()?.iter_mut() {
            let item_ptr = child_pointer(&paths_ptr, path);
            for (key, node) in as_object_mut(item, &item_ptr)?.iter_mut() {
                let Some(method) = Method::from_key(key) else {
                    continue;
                };
                let pointer = child_pointer(&item_ptr, key);
                let node = as_object_mut(node, &pointer)?;
                out.push(OperationMut::new(path, method, pointer, node));
            }
        }

        Ok(out)
    }
}
