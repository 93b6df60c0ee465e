//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Every helper that changes the item list saves it afterwards.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::BoardConfig;
use crate::drag::{DragCoordinator, DragOutcome};
use crate::item_store::ItemStore;
use crate::persistence::{Persistence, SharedStorage};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// All items, in board order
    pub items: ItemStore,
    /// Drag gesture in progress
    pub drag: DragCoordinator,
    /// Where every item change is saved
    pub persistence: Persistence<SharedStorage>,
}

impl AppState {
    pub fn new(items: ItemStore, persistence: Persistence<SharedStorage>) -> Self {
        Self {
            items,
            drag: DragCoordinator::new(),
            persistence,
        }
    }

    /// Initial state from local storage
    pub fn load(config: &BoardConfig) -> Self {
        let persistence = Persistence::browser(&config.storage_key);
        let items = persistence.load_or(|| {
            if config.seed_on_empty {
                ItemStore::seed()
            } else {
                ItemStore::new()
            }
        });
        Self::new(items, persistence)
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

fn persist(store: &AppStore) {
    let persistence = store.persistence().get_untracked();
    persistence.save(&store.items().read_untracked());
}

// ========================
// Store Helper Functions
// ========================

/// Add a to-do item; blank text is ignored
pub fn store_add_item(store: &AppStore, text: &str) -> bool {
    let mut items = store.items().get_untracked();
    if items.add_text(text).is_none() {
        return false;
    }
    *store.items().write() = items;
    persist(store);
    true
}

/// Remove an item from the store by ID
pub fn store_remove_item(store: &AppStore, item_id: &str) {
    let removed = store.items().write().remove(item_id);
    if removed {
        persist(store);
    }
}

pub fn store_drag_start(store: &AppStore, item_id: &str) {
    store.drag().write().on_drag_start(item_id);
}

pub fn store_drag_cancel(store: &AppStore) {
    tracing::debug!("[DRAG] cancelled");
    store.drag().write().on_drag_cancel();
}

/// Apply a drop and save if it changed anything
pub fn store_drag_end(store: &AppStore, active: &str, over: Option<&str>) -> DragOutcome {
    let mut drag = store.drag().get_untracked();
    let mut items = store.items().get_untracked();

    let outcome = drag.on_drag_end(&mut items, active, over);
    tracing::debug!("[DRAG] {} over {:?}: {:?}", active, over, outcome);

    if outcome.changed() {
        *store.items().write() = items;
        persist(store);
    }
    *store.drag().write() = drag;
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::DragState;
    use crate::models::Status;
    use crate::persistence::MemoryStorage;
    use std::sync::Arc;

    const KEY: &str = "to-do list";

    /// Run `test` against a store saving into an in-memory backend
    fn with_store(items: ItemStore, test: impl FnOnce(AppStore, &MemoryStorage)) {
        let storage = Arc::new(MemoryStorage::default());
        let shared: SharedStorage = storage.clone();
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState::new(items, Persistence::new(KEY, shared)));
            test(store, &storage);
        });
    }

    fn saved(storage: &MemoryStorage) -> ItemStore {
        serde_json::from_str(&storage.get(KEY).unwrap()).unwrap()
    }

    #[test]
    fn test_blank_add_is_ignored() {
        with_store(ItemStore::seed(), |store, storage| {
            assert!(!store_add_item(&store, ""));
            assert!(!store_add_item(&store, "   "));
            assert_eq!(store.items().get_untracked(), ItemStore::seed());
            assert_eq!(storage.writes(), 0);
        });
    }

    #[test]
    fn test_add_trims_and_saves_full_list() {
        with_store(ItemStore::seed(), |store, storage| {
            assert!(store_add_item(&store, "  feed cat  "));

            let items = store.items().get_untracked();
            assert_eq!(items.len(), 5);
            assert_eq!(items.items()[4].text, "feed cat");
            assert_eq!(items.items()[4].status, Status::ToDo);
            assert_eq!(storage.writes(), 1);
            assert_eq!(saved(storage), items);
        });
    }

    #[test]
    fn test_remove_saves_only_when_found() {
        with_store(ItemStore::seed(), |store, storage| {
            store_remove_item(&store, "missing");
            assert_eq!(storage.writes(), 0);

            store_remove_item(&store, "2");
            assert_eq!(storage.writes(), 1);
            assert!(!saved(storage).contains("2"));
            assert_eq!(saved(storage), store.items().get_untracked());
        });
    }

    #[test]
    fn test_drop_that_changes_board_is_saved() {
        with_store(ItemStore::seed(), |store, storage| {
            store_drag_start(&store, "1");
            assert!(store.drag().get_untracked().is_dragging());

            let outcome = store_drag_end(&store, "1", Some("done"));

            assert_eq!(outcome, DragOutcome::Moved { reordered: false, status: Some(Status::Done) });
            assert_eq!(store.drag().get_untracked().state(), &DragState::Idle);
            assert_eq!(storage.writes(), 1);
            assert_eq!(saved(storage).get("1").unwrap().status, Status::Done);
        });
    }

    #[test]
    fn test_drop_on_delete_area_is_saved() {
        with_store(ItemStore::seed(), |store, storage| {
            store_drag_start(&store, "3");
            store_drag_end(&store, "3", Some("delete-area"));

            assert!(!store.items().get_untracked().contains("3"));
            assert_eq!(saved(storage).len(), 3);
        });
    }

    #[test]
    fn test_noop_drops_do_not_write() {
        with_store(ItemStore::seed(), |store, storage| {
            store_drag_start(&store, "1");
            assert_eq!(store_drag_end(&store, "1", None), DragOutcome::NoTarget);

            store_drag_start(&store, "1");
            assert_eq!(store_drag_end(&store, "1", Some("1")), DragOutcome::Unchanged);

            store_drag_start(&store, "1");
            assert_eq!(store_drag_end(&store, "1", Some("nowhere")), DragOutcome::Unresolved);

            assert_eq!(storage.writes(), 0);
            assert_eq!(store.items().get_untracked(), ItemStore::seed());
            assert!(!store.drag().get_untracked().is_dragging());
        });
    }

    #[test]
    fn test_cancel_returns_to_idle_without_write() {
        with_store(ItemStore::seed(), |store, storage| {
            store_drag_start(&store, "4");
            store_drag_cancel(&store);

            assert_eq!(store.drag().get_untracked().active(), None);
            assert_eq!(storage.writes(), 0);
        });
    }
}
