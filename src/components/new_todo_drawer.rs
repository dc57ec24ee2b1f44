//! New Todo Drawer Component
//!
//! Bottom drawer with the form for adding a todo.

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NewTodoDrawer() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <Show when=move || ctx.drawer_open.get()>
            <div class="drawer-backdrop" on:click=move |_| ctx.close_drawer()></div>
            <NewTodoForm />
        </Show>
    }
}

/// Form inside the drawer; stays open after adding so several todos can be
/// entered in a row
#[component]
fn NewTodoForm() -> impl IntoView {
    let state = use_app_store();
    let ctx = expect_context::<AppContext>();
    let (text, set_text) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // restored items would otherwise replace anything added now
        if state.loading().get_untracked() {
            log::warn!("[UI] add ignored while loading");
            return;
        }
        let description = text.get_untracked();
        if let Some(id) = ctx.todos.add(&description) {
            log::debug!("[UI] added todo {id}");
            set_text.set(String::new());
        }
    };

    view! {
        <div
            class="drawer"
            role="dialog"
            on:keydown=move |ev| {
                if ev.key() == "Escape" {
                    ctx.close_drawer();
                }
            }
        >
            <h2 class="drawer-title">"New todo"</h2>
            <form class="new-todo-form" on:submit=on_submit>
                <input
                    node_ref=input_ref
                    type="text"
                    class="new-todo-input"
                    placeholder="What needs to be done?"
                    prop:value=text
                    on:input=move |ev| set_text.set(event_target_value(&ev))
                />
                <div class="drawer-actions">
                    <button type="button" class="secondary-btn" on:click=move |_| ctx.close_drawer()>
                        "Close"
                    </button>
                    <button
                        type="submit"
                        class="primary-btn"
                        disabled=move || text.with(|t| t.trim().is_empty())
                    >
                        "Add"
                    </button>
                </div>
            </form>
        </div>
    }
}
