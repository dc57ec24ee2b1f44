//! Todo List View Component
//!
//! Renders the filtered list with drop slots between rows, or the loading
//! skeleton / empty state when there are no rows to show.

use leptos::prelude::*;
use leptos_dragdrop::{DndSignals, DropTarget};
use todo_core::TodoItem;

use crate::components::{empty_kind, EmptyState, LoadingSkeleton, TodoRow};
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoListView() -> impl IntoView {
    let state = use_app_store();
    let ctx = expect_context::<AppContext>();
    let dnd = ctx.dnd;

    // Rows of the active filter, in list order
    let visible = Memo::new(move |_| {
        let filter = state.filter().get();
        state
            .todos()
            .with(|items| filter.apply(items).cloned().collect::<Vec<TodoItem>>())
    });
    let has_rows = Memo::new(move |_| visible.with(|rows| !rows.is_empty()));

    let list_class = move || {
        if dnd.any_dragging() { "todo-list dragging" } else { "todo-list" }
    };

    move || {
        if has_rows.get() {
            view! {
                <div class=list_class>
                    <DropSlot dnd=dnd slot=0 />
                    <For
                        each=move || visible.get().into_iter().enumerate()
                        // every rendered field is part of the key so edits re-render the row
                        key=|(index, item)| (item.id.clone(), *index, item.description.clone(), item.completed)
                        children=move |(index, item)| {
                            view! {
                                <TodoRow item=item index=index />
                                <DropSlot dnd=dnd slot=index + 1 />
                            }
                        }
                    />
                </div>
            }
            .into_any()
        } else if state.loading().get() {
            view! { <LoadingSkeleton /> }.into_any()
        } else {
            let total = state.todos().with(|items| items.len());
            let kind = empty_kind(total, state.filter().get());
            view! { <EmptyState kind=kind /> }.into_any()
        }
    }
}

/// Gap between rows; highlighted while it is the drop target
#[component]
fn DropSlot(dnd: DndSignals, slot: usize) -> impl IntoView {
    let target = DropTarget::Slot(slot);

    view! {
        <div
            class=move || if dnd.is_target(target) { "drop-slot active" } else { "drop-slot" }
            data-drop-slot=slot.to_string()
        />
    }
}
