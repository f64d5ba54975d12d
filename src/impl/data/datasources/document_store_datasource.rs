use async_trait::async_trait;
use fractic_server_error::ServerError;
use serde_json::{Map, Value};

use crate::data::models::raw_document_model::RawDocument;

/// One collection of a remote document store.
///
/// Writes are last-write-wins; there is no transaction or version check
/// beyond the existence preconditions below.
#[async_trait]
pub trait DocumentStoreDatasource: Send + Sync {
    /// Every document of the collection, in store-defined order.
    async fn list(&self) -> Result<Vec<RawDocument>, ServerError>;

    async fn get(&self, id: &str) -> Result<Option<RawDocument>, ServerError>;

    /// Stores a new document; the store assigns its id.
    async fn insert(&self, fields: Map<String, Value>) -> Result<RawDocument, ServerError>;

    /// Overwrites the given top-level fields, leaving others in place. Fails
    /// with `NotFound` if the document does not exist.
    async fn update(&self, id: &str, fields: Map<String, Value>)
        -> Result<RawDocument, ServerError>;

    /// Fails with `NotFound` if the document does not exist.
    async fn remove(&self, id: &str) -> Result<(), ServerError>;
}
