use std::cmp::Ordering;

use crate::entities::CompanyDocument;

fn by_display_name(a: &CompanyDocument, b: &CompanyDocument) -> Ordering {
    a.display_name()
        .cmp(b.display_name())
        .then_with(|| a.id.cmp(&b.id))
}

/// Entity the view falls back to when nothing is selected: the first by
/// display name (ties broken by id, so the choice does not depend on store
/// order).
pub(crate) fn default_selection(entities: &[CompanyDocument]) -> Option<&CompanyDocument> {
    entities.iter().min_by(|a, b| by_display_name(a, b))
}

/// Sidebar order.
pub(crate) fn sorted_by_display_name(entities: &[CompanyDocument]) -> Vec<&CompanyDocument> {
    let mut sorted: Vec<&CompanyDocument> = entities.iter().collect();
    sorted.sort_by(|a, b| by_display_name(a, b));
    sorted
}
