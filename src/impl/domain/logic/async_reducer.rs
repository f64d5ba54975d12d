//! Reducer helpers applying async operation outcomes to an [`EntityState`].
//!
//! Each helper handles the three phases of one operation kind. They are
//! applied in completion order; there is no fencing between concurrent
//! operations, so whichever settles last wins.

use crate::entities::{EntityState, Settlement};

/// Replacements for the default pending/rejected handling.
pub struct PhaseOverrides<T> {
    pub on_pending: Option<fn(&mut EntityState<T>)>,
    pub on_rejected: Option<fn(&mut EntityState<T>, &str)>,
}

impl<T> Default for PhaseOverrides<T> {
    fn default() -> Self {
        Self {
            on_pending: None,
            on_rejected: None,
        }
    }
}

fn clear_error<T>(state: &mut EntityState<T>) {
    state.error = None;
}

impl<T> PhaseOverrides<T> {
    /// Clears the error on pending but leaves `loading` alone, for operations
    /// the view should not block on.
    pub fn without_loading() -> Self {
        Self {
            on_pending: Some(clear_error::<T>),
            on_rejected: None,
        }
    }
}

/// Shared phase handling. `on_fulfilled` runs after `loading` is cleared.
pub fn apply_async<T, P>(
    state: &mut EntityState<T>,
    settlement: Settlement<P>,
    overrides: &PhaseOverrides<T>,
    on_fulfilled: impl FnOnce(&mut EntityState<T>, P),
) {
    match settlement {
        Settlement::Pending => match overrides.on_pending {
            Some(f) => f(state),
            None => {
                state.loading = true;
                state.error = None;
            }
        },
        Settlement::Fulfilled(payload) => {
            state.loading = false;
            on_fulfilled(state, payload);
        }
        Settlement::Rejected(message) => {
            state.loading = false;
            match overrides.on_rejected {
                Some(f) => f(state, &message),
                None => state.error = Some(message),
            }
        }
    }
}

/// Replaces the entity list wholesale. The current selection is refreshed to
/// the new copy of the same entity, or cleared if it is gone.
pub fn apply_fetch_all<T: Clone>(
    state: &mut EntityState<T>,
    settlement: Settlement<Vec<T>>,
    same_entity: impl Fn(&T, &T) -> bool,
    overrides: &PhaseOverrides<T>,
) {
    apply_async(state, settlement, overrides, |state, entities| {
        state.entities = entities;
        state.current = state
            .current
            .take()
            .and_then(|c| state.entities.iter().find(|e| same_entity(*e, &c)).cloned());
    });
}

/// Makes the fetched entity current, inserting or refreshing it in the list.
pub fn apply_fetch_one<T: Clone>(
    state: &mut EntityState<T>,
    settlement: Settlement<T>,
    same_entity: impl Fn(&T, &T) -> bool,
    overrides: &PhaseOverrides<T>,
) {
    apply_async(state, settlement, overrides, |state, entity| {
        match state.entities.iter().position(|e| same_entity(e, &entity)) {
            Some(i) => state.entities[i] = entity.clone(),
            None => state.entities.push(entity.clone()),
        }
        state.current = Some(entity);
    });
}

pub fn apply_create<T>(
    state: &mut EntityState<T>,
    settlement: Settlement<T>,
    overrides: &PhaseOverrides<T>,
) {
    apply_async(state, settlement, overrides, |state, entity| {
        state.entities.push(entity);
    });
}

/// Replaces the matching entity in place (and the current selection if it
/// matches). An entity missing from the list is ignored: the store has already
/// accepted the write.
pub fn apply_update<T: Clone>(
    state: &mut EntityState<T>,
    settlement: Settlement<T>,
    same_entity: impl Fn(&T, &T) -> bool,
    overrides: &PhaseOverrides<T>,
) {
    apply_async(state, settlement, overrides, |state, entity| {
        if let Some(i) = state.entities.iter().position(|e| same_entity(e, &entity)) {
            state.entities[i] = entity.clone();
        }
        if state.current.as_ref().is_some_and(|c| same_entity(c, &entity)) {
            state.current = Some(entity);
        }
    });
}

/// Removes the entity matching the returned key, clearing the current
/// selection if it was that entity.
pub fn apply_delete<T, K>(
    state: &mut EntityState<T>,
    settlement: Settlement<K>,
    has_key: impl Fn(&T, &K) -> bool,
    overrides: &PhaseOverrides<T>,
) {
    apply_async(state, settlement, overrides, |state, key| {
        state.entities.retain(|e| !has_key(e, &key));
        if state.current.as_ref().is_some_and(|c| has_key(c, &key)) {
            state.current = None;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: &'static str,
        value: u32,
    }

    fn item(id: &'static str, value: u32) -> Item {
        Item { id, value }
    }

    fn same(a: &Item, b: &Item) -> bool {
        a.id == b.id
    }

    fn has_key(a: &Item, key: &&'static str) -> bool {
        a.id == *key
    }

    fn state(entities: Vec<Item>, current: Option<Item>) -> EntityState<Item> {
        EntityState {
            entities,
            current,
            loading: false,
            error: None,
        }
    }

    #[test]
    fn test_pending_sets_loading_and_clears_error() {
        let mut s = state(vec![item("a", 1)], None);
        s.error = Some("old".to_string());
        apply_create(&mut s, Settlement::Pending, &PhaseOverrides::default());
        assert!(s.loading);
        assert_eq!(s.error, None);
        assert_eq!(s.entities, vec![item("a", 1)]);
    }

    #[test]
    fn test_pending_override_skips_loading_flag() {
        let mut s = state(vec![item("a", 1)], None);
        s.error = Some("old".to_string());
        apply_delete(&mut s, Settlement::Pending, has_key, &PhaseOverrides::without_loading());
        assert!(!s.loading);
        assert_eq!(s.error, None);
    }

    #[test]
    fn test_fetch_all_replaces_entities_and_refreshes_current() {
        let mut s = state(vec![item("a", 1)], Some(item("a", 1)));
        s.loading = true;
        apply_fetch_all(
            &mut s,
            Settlement::Fulfilled(vec![item("b", 2), item("a", 9)]),
            same,
            &PhaseOverrides::default(),
        );
        assert!(!s.loading);
        assert_eq!(s.entities, vec![item("b", 2), item("a", 9)]);
        assert_eq!(s.current, Some(item("a", 9)));

        apply_fetch_all(
            &mut s,
            Settlement::Fulfilled(vec![item("b", 2)]),
            same,
            &PhaseOverrides::default(),
        );
        assert_eq!(s.current, None);
    }

    #[test]
    fn test_fetch_one_upserts_and_selects() {
        let mut s = state(vec![item("a", 1)], None);
        apply_fetch_one(&mut s, Settlement::Fulfilled(item("a", 5)), same, &PhaseOverrides::default());
        assert_eq!(s.entities, vec![item("a", 5)]);
        assert_eq!(s.current, Some(item("a", 5)));

        apply_fetch_one(&mut s, Settlement::Fulfilled(item("b", 2)), same, &PhaseOverrides::default());
        assert_eq!(s.entities, vec![item("a", 5), item("b", 2)]);
        assert_eq!(s.current, Some(item("b", 2)));
    }

    #[test]
    fn test_create_appends_and_keeps_current() {
        let a = item("a", 1);
        let mut s = state(vec![a.clone()], Some(a.clone()));
        s.loading = true;
        apply_create(&mut s, Settlement::Fulfilled(item("b", 2)), &PhaseOverrides::default());
        assert_eq!(s.entities, vec![a.clone(), item("b", 2)]);
        assert_eq!(s.current, Some(a));
        assert!(!s.loading);
    }

    #[test]
    fn test_update_replaces_in_place_and_current() {
        let mut s = state(vec![item("a", 1), item("b", 2)], Some(item("a", 1)));
        apply_update(&mut s, Settlement::Fulfilled(item("a", 7)), same, &PhaseOverrides::default());
        assert_eq!(s.entities, vec![item("a", 7), item("b", 2)]);
        assert_eq!(s.current, Some(item("a", 7)));
    }

    #[test]
    fn test_update_of_unknown_entity_is_ignored() {
        let mut s = state(vec![item("a", 1)], Some(item("a", 1)));
        s.loading = true;
        apply_update(&mut s, Settlement::Fulfilled(item("z", 3)), same, &PhaseOverrides::default());
        assert_eq!(s.entities, vec![item("a", 1)]);
        assert_eq!(s.current, Some(item("a", 1)));
        assert!(!s.loading);
        assert_eq!(s.error, None);
    }

    #[test]
    fn test_delete_removes_entity_and_clears_current() {
        let mut s = state(vec![item("a", 1), item("b", 2)], Some(item("b", 2)));
        apply_delete(&mut s, Settlement::Fulfilled("b"), has_key, &PhaseOverrides::default());
        assert_eq!(s.entities, vec![item("a", 1)]);
        assert_eq!(s.current, None);
    }

    #[test]
    fn test_delete_of_other_entity_keeps_current() {
        let mut s = state(vec![item("a", 1), item("b", 2)], Some(item("b", 2)));
        apply_delete(&mut s, Settlement::Fulfilled("a"), has_key, &PhaseOverrides::default());
        assert_eq!(s.entities, vec![item("b", 2)]);
        assert_eq!(s.current, Some(item("b", 2)));
    }

    #[test]
    fn test_rejection_leaves_entities_and_current_untouched() {
        let before = state(vec![item("a", 1), item("b", 2)], Some(item("a", 1)));
        let overrides = PhaseOverrides::default();

        let mut s = before.clone();
        apply_update(&mut s, Settlement::Pending, same, &overrides);
        apply_update(&mut s, Settlement::Rejected("network down".to_string()), same, &overrides);
        assert_eq!(s.entities, before.entities);
        assert_eq!(s.current, before.current);
        assert_eq!(s.error.as_deref(), Some("network down"));
        assert!(!s.loading);

        let mut s = before.clone();
        apply_delete::<_, &str>(&mut s, Settlement::Rejected("gone".to_string()), has_key, &overrides);
        apply_fetch_all(&mut s, Settlement::Rejected("gone".to_string()), same, &overrides);
        apply_create(&mut s, Settlement::Rejected("gone".to_string()), &overrides);
        assert_eq!(s.entities, before.entities);
        assert_eq!(s.current, before.current);
    }

    #[test]
    fn test_rejection_override_replaces_default_error() {
        let overrides = PhaseOverrides {
            on_pending: None,
            on_rejected: Some(|state: &mut EntityState<Item>, message: &str| {
                state.error = Some(format!("Failed to delete company: {message}"));
            }),
        };
        let mut s = state(vec![item("a", 1)], None);
        s.loading = true;
        apply_delete::<_, &str>(&mut s, Settlement::Rejected("timeout".to_string()), has_key, &overrides);
        assert!(!s.loading);
        assert_eq!(s.error.as_deref(), Some("Failed to delete company: timeout"));
    }
}
