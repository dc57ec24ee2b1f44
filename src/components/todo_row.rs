//! Todo Row Component
//!
//! One list row: completion checkbox, description or inline editor, and
//! edit / delete buttons. The whole row is a drag handle.

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use leptos_dragdrop::{make_on_pointerdown, DropTarget};
use todo_core::{TodoId, TodoItem};

use crate::context::AppContext;

/// A single todo row at `index` within the filtered view
#[component]
pub fn TodoRow(item: TodoItem, index: usize) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let dnd = ctx.dnd;

    let completed = item.completed;
    let description = item.description.clone();
    let id = StoredValue::new(item.id);

    let editing = move || id.with_value(|id| ctx.is_editing(id));

    let row_class = move || {
        let mut class = String::from("todo-row");
        if completed {
            class.push_str(" completed");
        }
        if dnd.is_dragging(index) {
            class.push_str(" dragging");
        }
        if dnd.is_target(DropTarget::Row(index)) {
            class.push_str(" drop-target");
        }
        class
    };

    let toggle = move |_| {
        id.with_value(|id| ctx.todos.toggle(id));
    };

    let remove = move |_| {
        if let Some(removed) = id.with_value(|id| ctx.todos.remove(id)) {
            log::debug!("[UI] removed todo {}", removed.id);
        }
    };

    let commit = move || id.with_value(|id| ctx.commit_edit(id));
    let cancel = move || id.with_value(|id| ctx.cancel_edit(id));

    let edit_description = description.clone();
    let start_edit = move |_| {
        // a click that finishes a drag is not an edit request
        if dnd.drag_just_ended_read.get_untracked() {
            return;
        }
        id.with_value(|id| ctx.begin_edit(id, &edit_description));
    };

    let on_pointerdown = make_on_pointerdown(dnd, index);

    view! {
        <div
            class=row_class
            data-drop-row=index.to_string()
            on:pointerdown=on_pointerdown
        >
            <input
                type="checkbox"
                class="todo-checkbox"
                prop:checked=completed
                on:change=toggle
            />

            {move || {
                if editing() {
                    view! { <EditForm id=id on_commit=move |_| commit() on_cancel=move |_| cancel() /> }.into_any()
                } else {
                    view! { <span class="todo-text">{description.clone()}</span> }.into_any()
                }
            }}

            {move || {
                if editing() {
                    view! {
                        // keep focus in the input so its blur does not cancel the edit first
                        <button
                            class="edit-btn done"
                            on:pointerdown=|ev| ev.prevent_default()
                            on:click=move |_| commit()
                        >
                            "Done"
                        </button>
                    }
                    .into_any()
                } else {
                    view! {
                        <button class="edit-btn" title="Edit" on:click=start_edit.clone()>
                            "✎"
                        </button>
                    }
                    .into_any()
                }
            }}

            <button class="delete-btn" title="Delete" on:click=remove>
                "×"
            </button>
        </div>
    }
}

/// Inline editor bound to the row's draft
#[component]
fn EditForm(
    id: StoredValue<TodoId>,
    #[prop(into)] on_commit: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let input_ref = NodeRef::<html::Input>::new();

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_commit.run(());
    };

    view! {
        <form class="edit-form" on:submit=on_submit>
            <input
                node_ref=input_ref
                class="edit-input"
                type="text"
                prop:value=move || id.with_value(|id| ctx.draft(id))
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    id.with_value(|id| ctx.set_draft(id, text));
                }
                on:keydown=move |ev| {
                    if ev.key() == "Escape" {
                        on_cancel.run(());
                    }
                }
                on:blur=move |_| on_cancel.run(())
            />
        </form>
    }
}
