use async_trait::async_trait;
use fractic_server_error::ServerError;
use reqwest::{RequestBuilder, Response, StatusCode, Url};
use serde_json::{Map, Value};

use crate::{
    config::DashboardConfig,
    data::models::{
        firestore_document_model::{
            FirestoreDocumentModel, FirestoreErrorResponseModel, ListDocumentsResponseModel,
        },
        firestore_value_model::encode_fields,
        raw_document_model::RawDocument,
    },
    errors::{NotFound, OperationFailed, UnexpectedStoreResponse},
};

use super::document_store_datasource::DocumentStoreDatasource;

const PAGE_SIZE: u32 = 300;

/// Cloud Firestore, through its REST API (v1).
pub struct FirestoreDatasource {
    client: reqwest::Client,
    collection_url: String,
    api_key: Option<String>,
}

impl FirestoreDatasource {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            collection_url: config.collection_url(),
            api_key: config.api_key.clone(),
        }
    }

    /// The id always lands in a single, percent-encoded path segment, so a
    /// request never leaves the collection. Ids Firestore could not have
    /// issued are `NotFound`.
    fn document_url(&self, id: &str) -> Result<Url, ServerError> {
        if !is_document_id(id) {
            return Err(NotFound::new(id));
        }
        let mut url = Url::parse(&self.collection_url).map_err(|e| {
            OperationFailed::with_debug(&format!("bad collection URL {}", self.collection_url), &e)
        })?;
        url.path_segments_mut()
            .map_err(|_| OperationFailed::new(&format!("bad collection URL {}", self.collection_url)))?
            .push(id);
        Ok(url)
    }

    fn with_key(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.query(&[("key", key)]),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ServerError> {
        self.with_key(request)
            .send()
            .await
            .map_err(|e| OperationFailed::with_debug(&e.to_string(), &e))
    }

    /// Maps non-success statuses to errors. 404 is `NotFound` when a document
    /// id is involved.
    async fn check(&self, response: Response, id: Option<&str>) -> Result<Response, ServerError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return Err(NotFound::new(id));
            }
        }
        let body: FirestoreErrorResponseModel = response.json().await.unwrap_or_default();
        let message = if body.error.message.is_empty() {
            status.to_string()
        } else {
            format!(
                "{} ({}): {}",
                body.error.status, body.error.code, body.error.message
            )
        };
        log::debug!("Firestore request failed with {}: {}", status, message);
        Err(OperationFailed::new(&message))
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ServerError> {
        response
            .json::<T>()
            .await
            .map_err(|e| UnexpectedStoreResponse::with_debug("could not decode Firestore body", &e))
    }
}

fn is_document_id(id: &str) -> bool {
    !id.is_empty() && id != "." && id != ".." && !id.contains('/')
}

/// Field paths outside `[A-Za-z_][A-Za-z0-9_]*` must be backtick-quoted.
fn field_path(key: &str) -> String {
    let simple = key.chars().enumerate().all(|(i, c)| {
        c == '_' || c.is_ascii_alphabetic() || (i > 0 && c.is_ascii_digit())
    });
    if simple && !key.is_empty() {
        key.to_string()
    } else {
        format!("`{}`", key.replace('\\', "\\\\").replace('`', "\\`"))
    }
}

#[async_trait]
impl DocumentStoreDatasource for FirestoreDatasource {
    async fn list(&self) -> Result<Vec<RawDocument>, ServerError> {
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut request = self
                .client
                .get(&self.collection_url)
                .query(&[("pageSize", PAGE_SIZE)]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token)]);
            }
            let response = self.check(self.send(request).await?, None).await?;
            let page: ListDocumentsResponseModel = Self::decode(response).await?;
            documents.extend(page.documents.into_iter().map(RawDocument::from));
            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }
        log::debug!("Listed {} documents from {}", documents.len(), self.collection_url);
        Ok(documents)
    }

    async fn get(&self, id: &str) -> Result<Option<RawDocument>, ServerError> {
        if !is_document_id(id) {
            return Ok(None);
        }
        let response = self.send(self.client.get(self.document_url(id)?)).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = self.check(response, Some(id)).await?;
        let doc: FirestoreDocumentModel = Self::decode(response).await?;
        Ok(Some(doc.into()))
    }

    async fn insert(&self, fields: Map<String, Value>) -> Result<RawDocument, ServerError> {
        let body = FirestoreDocumentModel {
            name: String::new(),
            fields: encode_fields(&fields),
        };
        let response = self
            .send(self.client.post(&self.collection_url).json(&body))
            .await?;
        let doc: FirestoreDocumentModel = Self::decode(self.check(response, None).await?).await?;
        Ok(doc.into())
    }

    async fn update(
        &self,
        id: &str,
        fields: Map<String, Value>,
    ) -> Result<RawDocument, ServerError> {
        let url = self.document_url(id)?;
        let mut query: Vec<(&str, String)> = vec![("currentDocument.exists", "true".to_string())];
        query.extend(fields.keys().map(|k| ("updateMask.fieldPaths", field_path(k))));
        let body = FirestoreDocumentModel {
            name: String::new(),
            fields: encode_fields(&fields),
        };
        let response = self
            .send(self.client.patch(url).query(&query).json(&body))
            .await?;
        let doc: FirestoreDocumentModel =
            Self::decode(self.check(response, Some(id)).await?).await?;
        Ok(doc.into())
    }

    async fn remove(&self, id: &str) -> Result<(), ServerError> {
        let url = self.document_url(id)?;
        let response = self
            .send(
                self.client
                    .delete(url)
                    .query(&[("currentDocument.exists", "true")]),
            )
            .await?;
        self.check(response, Some(id)).await?;
        Ok(())
    }
}
