use serde_json::{Map, Value};

/// A stored document as the datasource sees it: an id and untyped top-level
/// fields (`data`, `createdAt`, `updatedAt`).
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    pub id: String,
    pub fields: Map<String, Value>,
}
