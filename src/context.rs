//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;
use todo_core::TodoId;

use crate::store::TodoHandle;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The todo list; every mutation goes through here
    pub todos: TodoHandle,
    /// Inline-edit drafts keyed by todo id. UI-only, never persisted.
    pub drafts: RwSignal<HashMap<TodoId, String>>,
    /// Whether the add-todo drawer is open - read
    pub drawer_open: ReadSignal<bool>,
    /// Whether the add-todo drawer is open - write
    set_drawer_open: WriteSignal<bool>,
    /// Drag state for the list view
    pub dnd: DndSignals,
}

impl AppContext {
    pub fn new(todos: TodoHandle, drawer_open: (ReadSignal<bool>, WriteSignal<bool>), dnd: DndSignals) -> Self {
        Self {
            todos,
            drafts: RwSignal::new(HashMap::new()),
            drawer_open: drawer_open.0,
            set_drawer_open: drawer_open.1,
            dnd,
        }
    }

    pub fn open_drawer(&self) {
        self.set_drawer_open.set(true);
    }

    pub fn close_drawer(&self) {
        self.set_drawer_open.set(false);
    }

    // ========================
    // Edit drafts
    // ========================

    pub fn is_editing(&self, id: &TodoId) -> bool {
        self.drafts.with(|drafts| drafts.contains_key(id))
    }

    pub fn draft(&self, id: &TodoId) -> String {
        self.drafts
            .with(|drafts| drafts.get(id).cloned())
            .unwrap_or_default()
    }

    /// Start editing with the current description as the draft
    pub fn begin_edit(&self, id: &TodoId, description: &str) {
        self.drafts.update(|drafts| {
            drafts.insert(id.clone(), description.to_string());
        });
    }

    pub fn set_draft(&self, id: &TodoId, text: String) {
        self.drafts.update(|drafts| {
            if let Some(draft) = drafts.get_mut(id) {
                *draft = text;
            }
        });
    }

    pub fn cancel_edit(&self, id: &TodoId) {
        self.drafts.update(|drafts| {
            drafts.remove(id);
        });
    }

    /// Save the draft as the new description and leave edit mode.
    /// An empty draft keeps the old description.
    pub fn commit_edit(&self, id: &TodoId) {
        let draft = self.drafts.with_untracked(|drafts| drafts.get(id).cloned());
        if let Some(text) = draft {
            self.todos.rename(id, &text);
        }
        self.cancel_edit(id);
    }
}
