use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex, PoisonError, RwLock,
    },
};

use async_trait::async_trait;
use fractic_server_error::ServerError;
use serde_json::{Map, Value};

use crate::{
    data::models::raw_document_model::RawDocument,
    errors::{NotFound, OperationFailed},
};

use super::document_store_datasource::DocumentStoreDatasource;

/// Process-local document store. Documents are listed in id order.
#[derive(Default)]
pub struct InMemoryDatasource {
    docs: RwLock<BTreeMap<String, RawDocument>>,
    failure: Mutex<Option<String>>,
    calls: AtomicUsize,
}

impl InMemoryDatasource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next call fail with `OperationFailed` carrying `message`.
    pub fn fail_next(&self, message: &str) {
        *self.failure.lock().unwrap_or_else(PoisonError::into_inner) = Some(message.to_string());
    }

    /// Number of calls received so far, failed ones included.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn begin_call(&self) -> Result<(), ServerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self
            .failure
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            Some(message) => Err(OperationFailed::new(&message)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DocumentStoreDatasource for InMemoryDatasource {
    async fn list(&self) -> Result<Vec<RawDocument>, ServerError> {
        self.begin_call()?;
        let docs = self.docs.read().unwrap_or_else(PoisonError::into_inner);
        Ok(docs.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Option<RawDocument>, ServerError> {
        self.begin_call()?;
        let docs = self.docs.read().unwrap_or_else(PoisonError::into_inner);
        Ok(docs.get(id).cloned())
    }

    async fn insert(&self, fields: Map<String, Value>) -> Result<RawDocument, ServerError> {
        self.begin_call()?;
        let doc = RawDocument {
            id: uuid::Uuid::new_v4().simple().to_string(),
            fields,
        };
        let mut docs = self.docs.write().unwrap_or_else(PoisonError::into_inner);
        docs.insert(doc.id.clone(), doc.clone());
        log::debug!("Inserted in-memory document {}", doc.id);
        Ok(doc)
    }

    async fn update(
        &self,
        id: &str,
        fields: Map<String, Value>,
    ) -> Result<RawDocument, ServerError> {
        self.begin_call()?;
        let mut docs = self.docs.write().unwrap_or_else(PoisonError::into_inner);
        let doc = docs.get_mut(id).ok_or_else(|| NotFound::new(id))?;
        doc.fields.extend(fields);
        Ok(doc.clone())
    }

    async fn remove(&self, id: &str) -> Result<(), ServerError> {
        self.begin_call()?;
        let mut docs = self.docs.write().unwrap_or_else(PoisonError::into_inner);
        docs.remove(id).map(|_| ()).ok_or_else(|| NotFound::new(id))
    }
}
