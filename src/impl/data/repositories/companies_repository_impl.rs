use async_trait::async_trait;
use fractic_server_error::{CriticalError, ServerError};
use serde_json::{Map, Value};

use crate::{
    data::{
        datasources::document_store_datasource::DocumentStoreDatasource,
        models::raw_document_model::RawDocument,
    },
    domain::{logic::shape_mapper::normalize, repositories::companies_repository::CompaniesRepository},
    entities::{CompanyDocument, CompanyPayload, DocumentId},
    errors::NotFound,
};

const DATA_FIELD: &str = "data";
const CREATED_AT_FIELD: &str = "createdAt";
const UPDATED_AT_FIELD: &str = "updatedAt";

pub(crate) struct CompaniesRepositoryImpl<D: DocumentStoreDatasource> {
    datasource: D,
}

impl<D: DocumentStoreDatasource> CompaniesRepositoryImpl<D> {
    pub(crate) fn new(datasource: D) -> Self {
        Self { datasource }
    }

    pub(crate) fn datasource(&self) -> &D {
        &self.datasource
    }

    fn data_fields(payload: &CompanyPayload) -> Result<Map<String, Value>, ServerError> {
        let data = serde_json::to_value(&payload.data)
            .map_err(|e| CriticalError::with_debug("failed to serialize company data", &e))?;
        let mut fields = Map::new();
        fields.insert(DATA_FIELD.to_string(), data);
        Ok(fields)
    }
}

fn timestamp() -> Value {
    Value::String(chrono::Local::now().to_rfc3339())
}

/// Store records may predate the current schema; `data` is normalized on
/// read, and a record without one reads as an empty company.
impl From<RawDocument> for CompanyDocument {
    fn from(raw: RawDocument) -> Self {
        let data = raw.fields.get(DATA_FIELD).unwrap_or(&Value::Null);
        CompanyDocument {
            id: DocumentId(raw.id),
            data: normalize(data),
        }
    }
}

#[async_trait]
impl<D: DocumentStoreDatasource> CompaniesRepository for CompaniesRepositoryImpl<D> {
    async fn fetch_all(&self) -> Result<Vec<CompanyDocument>, ServerError> {
        Ok(self
            .datasource
            .list()
            .await?
            .into_iter()
            .map(CompanyDocument::from)
            .collect())
    }

    async fn fetch_by_id(&self, id: &DocumentId) -> Result<CompanyDocument, ServerError> {
        self.datasource
            .get(&id.0)
            .await?
            .map(CompanyDocument::from)
            .ok_or_else(|| NotFound::new(&id.0))
    }

    async fn create(&self, payload: CompanyPayload) -> Result<CompanyDocument, ServerError> {
        let mut fields = Self::data_fields(&payload)?;
        let now = timestamp();
        fields.insert(CREATED_AT_FIELD.to_string(), now.clone());
        fields.insert(UPDATED_AT_FIELD.to_string(), now);
        let raw = self.datasource.insert(fields).await?;
        Ok(CompanyDocument {
            id: DocumentId(raw.id),
            data: payload.data,
        })
    }

    async fn update(
        &self,
        id: &DocumentId,
        payload: CompanyPayload,
    ) -> Result<CompanyDocument, ServerError> {
        let mut fields = Self::data_fields(&payload)?;
        fields.insert(UPDATED_AT_FIELD.to_string(), timestamp());
        self.datasource.update(&id.0, fields).await?;
        Ok(CompanyDocument {
            id: id.clone(),
            data: payload.data,
        })
    }

    async fn delete(&self, id: &DocumentId) -> Result<DocumentId, ServerError> {
        self.datasource.remove(&id.0).await?;
        Ok(id.clone())
    }
}
