//! Todo Store
//!
//! Owns the ordered todo list. Every successful mutation bumps the revision
//! and notifies subscribers with a snapshot of the whole list; rejected or
//! no-op calls leave the list and revision untouched.

use std::collections::HashSet;
use std::fmt;

use crate::domain::{normalize_description, Filter, StoreError, StoreResult, TodoId, TodoItem};

/// What a mutation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    /// Whole list replaced by restored data
    Hydrated,
    Added(TodoId),
    Updated(TodoId),
    Removed(TodoId),
    Reordered { from: usize, to: usize },
    ClearedCompleted(usize),
}

/// Notification passed to subscribers after a mutation
#[derive(Debug)]
pub struct ChangeEvent<'a> {
    pub revision: u64,
    pub kind: &'a ChangeKind,
    pub items: &'a [TodoItem],
}

/// Handle returned by [`TodoStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&ChangeEvent<'_>)>;

/// Item totals used by the empty and all-done states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TodoCounts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl TodoCounts {
    pub fn of(items: &[TodoItem]) -> Self {
        let completed = items.iter().filter(|item| item.completed).count();
        Self {
            total: items.len(),
            active: items.len() - completed,
            completed,
        }
    }
}

/// Single-owner todo list with change notifications
#[derive(Default)]
pub struct TodoStore {
    items: Vec<TodoItem>,
    revision: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoStore")
            .field("items", &self.items)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Queries
    // ========================

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of successful mutations so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: &TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn position(&self, id: &TodoId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    /// Read-only projection of the list through `filter`
    pub fn filtered_view(&self, filter: Filter) -> Vec<&TodoItem> {
        filter.apply(&self.items).collect()
    }

    pub fn counts(&self) -> TodoCounts {
        TodoCounts::of(&self.items)
    }

    // ========================
    // Subscriptions
    // ========================

    /// Register a listener called after every successful mutation
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ChangeEvent<'_>) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false when the subscription was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, kind: ChangeKind) {
        self.revision += 1;
        let event = ChangeEvent {
            revision: self.revision,
            kind: &kind,
            items: &self.items,
        };
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }

    // ========================
    // Mutations
    // ========================

    /// Replace the whole list with restored data, dropping empty and
    /// repeated ids
    pub fn hydrate(&mut self, items: Vec<TodoItem>) {
        let mut seen = HashSet::new();
        let total = items.len();
        self.items = items
            .into_iter()
            .filter(|item| !item.id.is_empty() && seen.insert(item.id.clone()))
            .collect();
        if self.items.len() != total {
            log::warn!(
                "dropped {} todo(s) with empty or duplicate ids while hydrating",
                total - self.items.len()
            );
        }
        self.notify(ChangeKind::Hydrated);
    }

    /// Insert a new todo at the front of the list
    pub fn add(&mut self, description: &str) -> StoreResult<TodoId> {
        let description = normalize_description(description).ok_or(StoreError::EmptyDescription)?;
        let item = TodoItem::new(description);
        let id = item.id.clone();
        self.items.insert(0, item);
        self.notify(ChangeKind::Added(id.clone()));
        Ok(id)
    }

    /// Replace the item with `id` in place; the stored item keeps `id`
    pub fn update(&mut self, id: &TodoId, mut new_item: TodoItem) -> StoreResult<()> {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        new_item.id = id.clone();
        if self.items[index] == new_item {
            return Ok(());
        }
        self.items[index] = new_item;
        self.notify(ChangeKind::Updated(id.clone()));
        Ok(())
    }

    pub fn set_completed(&mut self, id: &TodoId, completed: bool) -> StoreResult<()> {
        let item = self.get(id).ok_or_else(|| StoreError::NotFound(id.clone()))?;
        let updated = TodoItem {
            completed,
            ..item.clone()
        };
        self.update(id, updated)
    }

    /// Flip the completed flag, returning the new value
    pub fn toggle(&mut self, id: &TodoId) -> StoreResult<bool> {
        let completed = !self
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?
            .completed;
        self.set_completed(id, completed)?;
        Ok(completed)
    }

    pub fn rename(&mut self, id: &TodoId, description: &str) -> StoreResult<()> {
        let description = normalize_description(description).ok_or(StoreError::EmptyDescription)?;
        let item = self.get(id).ok_or_else(|| StoreError::NotFound(id.clone()))?;
        let updated = TodoItem {
            description,
            ..item.clone()
        };
        self.update(id, updated)
    }

    pub fn remove(&mut self, id: &TodoId) -> StoreResult<TodoItem> {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        let removed = self.items.remove(index);
        self.notify(ChangeKind::Removed(id.clone()));
        Ok(removed)
    }

    /// Move the item at `source` to `destination`, shifting the ones between.
    ///
    /// Returns `Ok(false)` when both indices name the same position.
    pub fn reorder(&mut self, source: usize, destination: usize) -> StoreResult<bool> {
        let len = self.items.len();
        for index in [source, destination] {
            if index >= len {
                return Err(StoreError::OutOfBounds { index, len });
            }
        }
        if source == destination {
            return Ok(false);
        }
        let item = self.items.remove(source);
        self.items.insert(destination, item);
        self.notify(ChangeKind::Reordered {
            from: source,
            to: destination,
        });
        Ok(true)
    }

    /// Reorder using indices into `filter`'s view of the list
    pub fn move_in_view(&mut self, filter: Filter, from: usize, to: usize) -> StoreResult<bool> {
        let positions = filter.positions(&self.items);
        let resolve = |index: usize| {
            positions.get(index).copied().ok_or(StoreError::OutOfBounds {
                index,
                len: positions.len(),
            })
        };
        let source = resolve(from)?;
        let destination = resolve(to)?;
        self.reorder(source, destination)
    }

    /// Remove every completed item, returning how many went
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.completed);
        let removed = before - self.items.len();
        if removed > 0 {
            self.notify(ChangeKind::ClearedCompleted(removed));
        }
        removed
    }
}
