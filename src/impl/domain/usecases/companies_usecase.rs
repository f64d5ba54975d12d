use std::{future::Future, sync::Arc};

use async_trait::async_trait;
use fractic_server_error::ServerError;
use uuid::Uuid;

use crate::{
    data::datasources::import_file_datasource::read_import_file,
    domain::{
        logic::{
            companies_store::{CompaniesAction, CompaniesStore},
            import_validator::{validate_common_name, validate_import},
            shape_mapper::to_document_payload,
        },
        repositories::companies_repository::CompaniesRepository,
    },
    entities::{CompanyDocument, DocumentId, FlatFormState, Settlement},
};

#[async_trait]
pub trait CompaniesUsecase: Send + Sync {
    async fn fetch_companies(&self) -> Result<Vec<CompanyDocument>, ServerError>;

    async fn fetch_company(&self, id: &DocumentId) -> Result<CompanyDocument, ServerError>;

    async fn add_company(&self, form: &FlatFormState) -> Result<CompanyDocument, ServerError>;

    async fn update_company(
        &self,
        id: &DocumentId,
        form: &FlatFormState,
    ) -> Result<CompanyDocument, ServerError>;

    async fn delete_company(&self, id: &DocumentId) -> Result<DocumentId, ServerError>;

    async fn import_company(&self, raw_json: &str) -> Result<CompanyDocument, ServerError>;

    async fn import_company_file<P>(&self, path: P) -> Result<CompanyDocument, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct CompaniesUsecaseImpl<R: CompaniesRepository> {
    companies_repository: R,
    store: Arc<CompaniesStore>,
}

impl<R: CompaniesRepository> CompaniesUsecaseImpl<R> {
    pub(crate) fn new(companies_repository: R, store: Arc<CompaniesStore>) -> Self {
        Self {
            companies_repository,
            store,
        }
    }

    pub(crate) fn repository(&self) -> &R {
        &self.companies_repository
    }

    /// Runs one store operation through the reducer: pending before the call,
    /// then fulfilled or rejected with the call's result. The result is also
    /// returned to the caller.
    async fn dispatch<P, F>(
        &self,
        operation: &str,
        action: fn(Settlement<P>) -> CompaniesAction,
        call: F,
    ) -> Result<P, ServerError>
    where
        P: Clone + Send,
        F: Future<Output = Result<P, ServerError>> + Send,
    {
        let request_id = Uuid::new_v4();
        log::debug!("[{}] {}: pending", request_id, operation);
        self.store.apply(action(Settlement::Pending))?;
        match call.await {
            Ok(payload) => {
                log::info!("[{}] {}: fulfilled", request_id, operation);
                self.store.apply(action(Settlement::Fulfilled(payload.clone())))?;
                Ok(payload)
            }
            Err(e) => {
                log::warn!("[{}] {}: rejected: {}", request_id, operation, e);
                self.store.apply(action(Settlement::Rejected(e.to_string())))?;
                Err(e)
            }
        }
    }
}

#[async_trait]
impl<R: CompaniesRepository> CompaniesUsecase for CompaniesUsecaseImpl<R> {
    async fn fetch_companies(&self) -> Result<Vec<CompanyDocument>, ServerError> {
        self.dispatch(
            "fetch companies",
            CompaniesAction::FetchAll,
            self.companies_repository.fetch_all(),
        )
        .await
    }

    async fn fetch_company(&self, id: &DocumentId) -> Result<CompanyDocument, ServerError> {
        self.dispatch(
            "fetch company",
            CompaniesAction::FetchOne,
            self.companies_repository.fetch_by_id(id),
        )
        .await
    }

    async fn add_company(&self, form: &FlatFormState) -> Result<CompanyDocument, ServerError> {
        validate_common_name(&form.company_common_name)?;
        let payload = to_document_payload(form);
        self.dispatch(
            "add company",
            CompaniesAction::Create,
            self.companies_repository.create(payload),
        )
        .await
    }

    async fn update_company(
        &self,
        id: &DocumentId,
        form: &FlatFormState,
    ) -> Result<CompanyDocument, ServerError> {
        validate_common_name(&form.company_common_name)?;
        let payload = to_document_payload(form);
        self.dispatch(
            "update company",
            CompaniesAction::Update,
            self.companies_repository.update(id, payload),
        )
        .await
    }

    async fn delete_company(&self, id: &DocumentId) -> Result<DocumentId, ServerError> {
        self.dispatch(
            "delete company",
            CompaniesAction::Delete,
            self.companies_repository.delete(id),
        )
        .await
    }

    async fn import_company(&self, raw_json: &str) -> Result<CompanyDocument, ServerError> {
        let payload = validate_import(raw_json)?;
        self.dispatch(
            "import company",
            CompaniesAction::Create,
            self.companies_repository.create(payload),
        )
        .await
    }

    async fn import_company_file<P>(&self, path: P) -> Result<CompanyDocument, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let raw_json = read_import_file(path.as_ref()).await?;
        self.import_company(&raw_json).await
    }
}
