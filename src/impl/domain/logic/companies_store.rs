use std::sync::{PoisonError, RwLock};

use fractic_server_error::ServerError;

use crate::{
    entities::{
        CompaniesState, CompanyDocument, DocumentId, EntityState, Settlement, ViewMode,
    },
    errors::NotFound,
};

use super::{
    async_reducer::{
        apply_create, apply_delete, apply_fetch_all, apply_fetch_one, apply_update,
        PhaseOverrides,
    },
    selection::default_selection,
};

/// Every transition the client state can go through.
#[derive(Debug, Clone)]
pub(crate) enum CompaniesAction {
    FetchAll(Settlement<Vec<CompanyDocument>>),
    FetchOne(Settlement<CompanyDocument>),
    Create(Settlement<CompanyDocument>),
    Update(Settlement<CompanyDocument>),
    Delete(Settlement<DocumentId>),
    Select(DocumentId),
    SelectDefault,
    ClearError,
    SetViewMode(ViewMode),
}

fn same_document(a: &CompanyDocument, b: &CompanyDocument) -> bool {
    a.id == b.id
}

fn has_id(doc: &CompanyDocument, id: &DocumentId) -> bool {
    &doc.id == id
}

/// Sole owner of the dashboard's client state. Mutated only through
/// [`CompaniesAction`]s; read through owned snapshots.
pub(crate) struct CompaniesStore {
    state: RwLock<CompaniesState>,
}

impl CompaniesStore {
    pub(crate) fn new() -> Self {
        Self {
            state: RwLock::new(CompaniesState::default()),
        }
    }

    pub(crate) fn snapshot(&self) -> CompaniesState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn apply(&self, action: CompaniesAction) -> Result<(), ServerError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        reduce(&mut state, action)
    }
}

fn reduce(state: &mut CompaniesState, action: CompaniesAction) -> Result<(), ServerError> {
    let companies: &mut EntityState<CompanyDocument> = &mut state.companies;
    match action {
        CompaniesAction::FetchAll(s) => {
            apply_fetch_all(companies, s, same_document, &PhaseOverrides::default())
        }
        CompaniesAction::FetchOne(s) => {
            apply_fetch_one(companies, s, same_document, &PhaseOverrides::default())
        }
        CompaniesAction::Create(s) => apply_create(companies, s, &PhaseOverrides::default()),
        CompaniesAction::Update(s) => {
            apply_update(companies, s, same_document, &PhaseOverrides::default())
        }
        CompaniesAction::Delete(s) => {
            apply_delete(companies, s, has_id, &PhaseOverrides::without_loading())
        }
        CompaniesAction::Select(id) => {
            let doc = companies
                .entities
                .iter()
                .find(|d| d.id == id)
                .ok_or_else(|| NotFound::new(&id.0))?;
            companies.current = Some(doc.clone());
        }
        CompaniesAction::SelectDefault => {
            if companies.current.is_none() {
                companies.current = default_selection(&companies.entities).cloned();
            }
        }
        CompaniesAction::ClearError => companies.error = None,
        CompaniesAction::SetViewMode(mode) => state.view_mode = mode,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::entities::CompanyRootData;

    use super::*;

    fn doc(id: &str, name: &str) -> CompanyDocument {
        let mut data = CompanyRootData::default();
        data.company.common_name = name.to_string();
        CompanyDocument {
            id: DocumentId::from(id),
            data,
        }
    }

    fn loaded_store() -> CompaniesStore {
        let store = CompaniesStore::new();
        store
            .apply(CompaniesAction::FetchAll(Settlement::Fulfilled(vec![
                doc("1", "Vinci"),
                doc("2", "Carrefour"),
            ])))
            .unwrap();
        store
    }

    #[test]
    fn test_new_store_starts_in_actual_mode() {
        let snapshot = CompaniesStore::new().snapshot();
        assert_eq!(snapshot.view_mode(), ViewMode::Actual);
        assert!(snapshot.entities().is_empty());
        assert!(snapshot.current().is_none());
        assert!(!snapshot.loading());
    }

    #[test]
    fn test_select_requires_a_known_entity() {
        let store = loaded_store();
        assert!(store.apply(CompaniesAction::Select(DocumentId::from("9"))).is_err());
        assert!(store.snapshot().current().is_none());

        store.apply(CompaniesAction::Select(DocumentId::from("1"))).unwrap();
        assert_eq!(store.snapshot().current().unwrap().display_name(), "Vinci");
    }

    #[test]
    fn test_select_default_only_fills_an_empty_selection() {
        let store = loaded_store();
        store.apply(CompaniesAction::SelectDefault).unwrap();
        assert_eq!(store.snapshot().current().unwrap().display_name(), "Carrefour");

        store.apply(CompaniesAction::Select(DocumentId::from("1"))).unwrap();
        store.apply(CompaniesAction::SelectDefault).unwrap();
        assert_eq!(store.snapshot().current().unwrap().display_name(), "Vinci");
    }

    #[test]
    fn test_delete_pending_does_not_set_loading() {
        let store = loaded_store();
        store
            .apply(CompaniesAction::Delete(Settlement::Pending))
            .unwrap();
        assert!(!store.snapshot().loading());
    }

    #[test]
    fn test_snapshots_are_detached_from_later_transitions() {
        let store = loaded_store();
        let before = store.snapshot();
        store
            .apply(CompaniesAction::SetViewMode(ViewMode::Previous))
            .unwrap();
        store
            .apply(CompaniesAction::Update(Settlement::Rejected("boom".to_string())))
            .unwrap();
        assert_eq!(before.view_mode(), ViewMode::Actual);
        assert_eq!(before.error(), None);

        let after = store.snapshot();
        assert_eq!(after.view_mode(), ViewMode::Previous);
        assert_eq!(after.error(), Some("boom"));
        assert_eq!(after.entities(), before.entities());

        store.apply(CompaniesAction::ClearError).unwrap();
        assert_eq!(store.snapshot().error(), None);
    }
}
