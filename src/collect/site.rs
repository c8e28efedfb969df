use crate::examples::BodyKey;
use crate::oas::Method;

/// A parameter lacking an example, with its owning operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSite {
    pub path: String,
    pub method: Method,
    pub name: String,
    pub ty: String,
}

/// A request-body property lacking an example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySite {
    pub path: String,
    pub method: Method,
    pub name: String,
    pub ty: String,
}

impl PropertySite {
    pub fn key(&self) -> BodyKey {
        BodyKey::new(self.path.clone(), self.method, self.name.clone())
    }
}
