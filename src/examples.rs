//! Operator answers, keyed the way the patcher looks them up.

use crate::oas::Method;
use std::collections::BTreeMap;

/// Parameter answers keyed by bare parameter name. A name that appears in
/// several operations shares one answer.
pub type ParamExamples = BTreeMap<String, String>;

/// Request-body property answers, scoped to the operation they were asked for.
pub type BodyExamples = BTreeMap<BodyKey, String>;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyKey {
    pub path: String,
    pub method: Method,
    pub property: String,
}

impl BodyKey {
    pub fn new(path: impl Into<String>, method: Method, property: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            property: property.into(),
        }
    }
}
