use std::sync::Arc;

use fractic_server_error::ServerError;

use crate::{
    config::DashboardConfig,
    data::{
        datasources::{
            document_store_datasource::DocumentStoreDatasource,
            firestore_datasource::FirestoreDatasource, memory_datasource::InMemoryDatasource,
        },
        repositories::companies_repository_impl::CompaniesRepositoryImpl,
    },
    domain::{
        logic::companies_store::{CompaniesAction, CompaniesStore},
        usecases::companies_usecase::{CompaniesUsecase as _, CompaniesUsecaseImpl},
    },
    entities::{CompaniesState, CompanyDocument, DocumentId, FlatFormState, ViewMode},
    errors::NotFound,
    presentation::{
        chart_series::{radar_series, scatter_series, RadarSeries, ScatterSeries},
        dashboard_printer::DashboardPrinter,
    },
    shape_mapper::to_form_state,
};

/// Client-side dashboard over one company collection.
///
/// Every operation settles through the state container, then re-applies the
/// default selection; read the result through [`Self::snapshot`].
pub struct CompanyDashboardUtil<D: DocumentStoreDatasource> {
    companies_usecase: CompaniesUsecaseImpl<CompaniesRepositoryImpl<D>>,
    store: Arc<CompaniesStore>,
    printer: DashboardPrinter,
}

impl CompanyDashboardUtil<InMemoryDatasource> {
    pub fn in_memory() -> Self {
        Self::with_datasource(InMemoryDatasource::new())
    }
}

impl CompanyDashboardUtil<FirestoreDatasource> {
    pub fn from_config(config: &DashboardConfig) -> Self {
        log::debug!("Using Firestore collection {}", config.collection_url());
        Self::with_datasource(FirestoreDatasource::new(config))
    }
}

impl<D: DocumentStoreDatasource> CompanyDashboardUtil<D> {
    pub fn with_datasource(datasource: D) -> Self {
        let store = Arc::new(CompaniesStore::new());
        Self {
            companies_usecase: CompaniesUsecaseImpl::new(
                CompaniesRepositoryImpl::new(datasource),
                store.clone(),
            ),
            store,
            printer: DashboardPrinter::new(),
        }
    }

    pub fn datasource(&self) -> &D {
        self.companies_usecase.repository().datasource()
    }

    // State.
    // ---

    pub fn snapshot(&self) -> CompaniesState {
        self.store.snapshot()
    }

    pub fn select(&self, id: &DocumentId) -> Result<(), ServerError> {
        self.store.apply(CompaniesAction::Select(id.clone()))
    }

    /// Selects by exact id, or else by display name (case-insensitive).
    pub fn select_by_name_or_id(&self, key: &str) -> Result<(), ServerError> {
        let state = self.store.snapshot();
        let id = state
            .entities()
            .iter()
            .find(|c| c.id.0 == key)
            .or_else(|| {
                state
                    .entities()
                    .iter()
                    .find(|c| c.display_name().eq_ignore_ascii_case(key.trim()))
            })
            .map(|c| c.id.clone())
            .ok_or_else(|| NotFound::new(key))?;
        self.select(&id)
    }

    pub fn set_view_mode(&self, mode: ViewMode) -> Result<(), ServerError> {
        self.store.apply(CompaniesAction::SetViewMode(mode))
    }

    pub fn clear_error(&self) -> Result<(), ServerError> {
        self.store.apply(CompaniesAction::ClearError)
    }

    // Forms.
    // ---

    pub fn new_form(&self) -> FlatFormState {
        to_form_state(None)
    }

    /// Form pre-populated from a loaded document.
    pub fn edit_form(&self, id: &DocumentId) -> Result<FlatFormState, ServerError> {
        self.store
            .snapshot()
            .entities()
            .iter()
            .find(|c| &c.id == id)
            .map(CompanyDocument::to_form_state)
            .ok_or_else(|| NotFound::new(&id.0))
    }

    // CRUD.
    // ---

    pub async fn load(&self) -> Result<Vec<CompanyDocument>, ServerError> {
        let result = self.companies_usecase.fetch_companies().await;
        self.select_default()?;
        result
    }

    /// Re-reads one document and makes it current.
    pub async fn refresh(&self, id: &DocumentId) -> Result<CompanyDocument, ServerError> {
        let result = self.companies_usecase.fetch_company(id).await;
        self.select_default()?;
        result
    }

    pub async fn submit_new(&self, form: &FlatFormState) -> Result<CompanyDocument, ServerError> {
        let result = self.companies_usecase.add_company(form).await;
        self.select_default()?;
        result
    }

    pub async fn submit_edit(
        &self,
        id: &DocumentId,
        form: &FlatFormState,
    ) -> Result<CompanyDocument, ServerError> {
        let result = self.companies_usecase.update_company(id, form).await;
        self.select_default()?;
        result
    }

    pub async fn delete(&self, id: &DocumentId) -> Result<DocumentId, ServerError> {
        let result = self.companies_usecase.delete_company(id).await;
        self.select_default()?;
        result
    }

    pub async fn import_json(&self, raw_json: &str) -> Result<CompanyDocument, ServerError> {
        let result = self.companies_usecase.import_company(raw_json).await;
        self.select_default()?;
        result
    }

    pub async fn import_file<P>(&self, path: P) -> Result<CompanyDocument, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let result = self.companies_usecase.import_company_file(path).await;
        self.select_default()?;
        result
    }

    fn select_default(&self) -> Result<(), ServerError> {
        self.store.apply(CompaniesAction::SelectDefault)
    }

    // Presentation.
    // ---

    pub fn render_sidebar(&self) -> String {
        self.printer.print_sidebar(&self.store.snapshot())
    }

    pub fn render_current(&self) -> String {
        self.printer.print_current(&self.store.snapshot())
    }

    pub fn scatter_series(&self) -> Option<ScatterSeries> {
        self.store.snapshot().current_period().map(scatter_series)
    }

    pub fn radar_series(&self) -> Option<RadarSeries> {
        let state = self.store.snapshot();
        let company = state.current()?;
        Some(radar_series(
            company.display_name(),
            company.data.period(state.view_mode()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, z1: &str) -> FlatFormState {
        let mut form = FlatFormState::default();
        form.set("companyCommonName", name).unwrap();
        form.set("actualZ1", z1).unwrap();
        form
    }

    #[tokio::test]
    async fn test_first_created_company_becomes_current() {
        let util = CompanyDashboardUtil::in_memory();
        assert!(util.scatter_series().is_none());

        let created = util.submit_new(&form("Sanofi", "0.7")).await.unwrap();
        assert_eq!(util.snapshot().current(), Some(&created));
        assert_eq!(util.scatter_series().unwrap().company.x, 0.7);
        assert_eq!(util.radar_series().unwrap().company_label, "Sanofi");
    }

    #[tokio::test]
    async fn test_default_selection_after_delete() {
        let util = CompanyDashboardUtil::in_memory();
        let b = util.submit_new(&form("Carrefour", "0")).await.unwrap();
        let a = util.submit_new(&form("Airbus", "0")).await.unwrap();
        util.select(&a.id).unwrap();

        util.delete(&a.id).await.unwrap();
        assert_eq!(util.snapshot().current(), Some(&b));
    }

    #[tokio::test]
    async fn test_edit_form_round_trips_a_loaded_document() {
        let util = CompanyDashboardUtil::in_memory();
        let created = util.submit_new(&form("Orange", "abc")).await.unwrap();
        assert_eq!(created.data.company.actual.z1, 0.0);

        let mut edit = util.edit_form(&created.id).unwrap();
        assert_eq!(edit.get("actualZ1").unwrap().to_string(), "0");
        edit.set("previousLiquidity", "42.5").unwrap();
        let updated = util.submit_edit(&created.id, &edit).await.unwrap();
        assert_eq!(updated.data.company.previous.liquidity, 42.5);
        assert!(util.edit_form(&DocumentId::from("missing")).is_err());
    }

    #[tokio::test]
    async fn test_store_failure_is_reported_in_state() {
        let util = CompanyDashboardUtil::in_memory();
        util.datasource().fail_next("permission denied");
        assert!(util.load().await.is_err());
        assert!(util.snapshot().error().unwrap().contains("permission denied"));

        util.clear_error().unwrap();
        assert!(util.snapshot().error().is_none());
        assert!(util.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_select_by_name_or_id() {
        let util = CompanyDashboardUtil::in_memory();
        let danone = util.submit_new(&form("Danone", "0")).await.unwrap();
        let engie = util.submit_new(&form("Engie", "0")).await.unwrap();

        util.select_by_name_or_id("engie").unwrap();
        assert_eq!(util.snapshot().current(), Some(&engie));
        util.select_by_name_or_id(&danone.id.0).unwrap();
        assert_eq!(util.snapshot().current(), Some(&danone));
        assert!(util.select_by_name_or_id("Unknown").is_err());
    }

    #[test]
    fn test_new_form_is_blank() {
        let util = CompanyDashboardUtil::in_memory();
        let form = util.new_form();
        assert_eq!(form, FlatFormState::default());
        assert_eq!(util.render_sidebar(), "");
        assert_eq!(util.render_current(), "No data available\n");
    }
}
