//! Global Application State Store
//!
//! Two halves:
//! - `AppState`: reactive UI state (reactive_stores, field-level reactivity),
//!   including a snapshot of the todo list for rendering
//! - `TodoHandle`: the owned `TodoStore`; all list mutations go through it
//!   and reach the UI and storage via its change notifications

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{ChangeEvent, Filter, StoreResult, SubscriptionId, TodoId, TodoItem, TodoStore};

/// Reactive UI state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Latest snapshot of the todo list, in display order
    pub todos: Vec<TodoItem>,
    /// Active view filter
    pub filter: Filter,
    /// True until stored todos have been restored
    pub loading: bool,
    pub dark_mode: bool,
    /// Set while the latest change could not be saved
    pub save_warning: Option<String>,
}

impl AppState {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            loading: true,
            dark_mode,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Todo Handle
// ========================

/// Copyable handle to the single `TodoStore`
#[derive(Clone, Copy)]
pub struct TodoHandle {
    inner: StoredValue<TodoStore, LocalStorage>,
}

impl TodoHandle {
    pub fn new() -> Self {
        Self {
            inner: StoredValue::new_local(TodoStore::new()),
        }
    }

    /// Run a mutation; rejected operations are logged and yield `None`
    fn mutate<T>(&self, op: impl FnOnce(&mut TodoStore) -> StoreResult<T>) -> Option<T> {
        match self.inner.try_update_value(op)? {
            Ok(value) => Some(value),
            Err(err) => {
                log::debug!("todo operation rejected: {err}");
                None
            }
        }
    }

    pub fn subscribe<F>(&self, listener: F) -> Option<SubscriptionId>
    where
        F: FnMut(&ChangeEvent<'_>) + 'static,
    {
        self.inner.try_update_value(|store| store.subscribe(listener))
    }

    pub fn revision(&self) -> Option<u64> {
        self.inner.try_with_value(|store| store.revision())
    }

    pub fn hydrate(&self, items: Vec<TodoItem>) {
        self.inner.update_value(|store| store.hydrate(items));
    }

    pub fn add(&self, description: &str) -> Option<TodoId> {
        self.mutate(|store| store.add(description))
    }

    pub fn toggle(&self, id: &TodoId) -> Option<bool> {
        self.mutate(|store| store.toggle(id))
    }

    pub fn rename(&self, id: &TodoId, description: &str) -> Option<()> {
        self.mutate(|store| store.rename(id, description))
    }

    pub fn remove(&self, id: &TodoId) -> Option<TodoItem> {
        self.mutate(|store| store.remove(id))
    }

    /// Reorder by indices into the filtered view the user dragged in
    pub fn move_in_view(&self, filter: Filter, from: usize, to: usize) -> Option<bool> {
        self.mutate(|store| store.move_in_view(filter, from, to))
    }

    pub fn clear_completed(&self) -> usize {
        self.inner
            .try_update_value(|store| store.clear_completed())
            .unwrap_or(0)
    }

    pub fn view_len(&self, filter: Filter) -> usize {
        self.inner
            .try_with_value(|store| store.filtered_view(filter).len())
            .unwrap_or(0)
    }
}
