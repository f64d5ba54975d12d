use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{CompanyDocument, CompanyPayload, DocumentId};

#[async_trait]
pub trait CompaniesRepository: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<CompanyDocument>, ServerError>;

    async fn fetch_by_id(&self, id: &DocumentId) -> Result<CompanyDocument, ServerError>;

    async fn create(&self, payload: CompanyPayload) -> Result<CompanyDocument, ServerError>;

    async fn update(
        &self,
        id: &DocumentId,
        payload: CompanyPayload,
    ) -> Result<CompanyDocument, ServerError>;

    async fn delete(&self, id: &DocumentId) -> Result<DocumentId, ServerError>;
}
