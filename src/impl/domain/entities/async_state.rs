use super::{
    company_document::CompanyDocument, period_data::PeriodData, view_mode::ViewMode,
};

/// Outcome of one asynchronous operation, as seen by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement<P> {
    Pending,
    Fulfilled(P),
    Rejected(String),
}

/// Entity list plus current selection, with the loading/error flags of the
/// operations that feed them.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityState<T> {
    pub entities: Vec<T>,
    pub current: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for EntityState<T> {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            current: None,
            loading: false,
            error: None,
        }
    }
}

/// Snapshot of the dashboard's client state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompaniesState {
    pub(crate) companies: EntityState<CompanyDocument>,
    pub(crate) view_mode: ViewMode,
}

impl CompaniesState {
    pub fn entities(&self) -> &[CompanyDocument] {
        &self.companies.entities
    }

    pub fn current(&self) -> Option<&CompanyDocument> {
        self.companies.current.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.companies.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.companies.error.as_deref()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// The half of the current document selected by the view mode.
    pub fn current_period(&self) -> Option<&PeriodData> {
        self.current().map(|c| c.data.period(self.view_mode))
    }
}
