//! List Footer Component
//!
//! Item counts and the bulk "Clear completed" action.

use leptos::prelude::*;
use todo_core::TodoCounts;

use crate::components::ConfirmButton;
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ListFooter() -> impl IntoView {
    let state = use_app_store();
    let ctx = expect_context::<AppContext>();

    let counts = Memo::new(move |_| state.todos().with(|items| TodoCounts::of(items)));

    let clear_completed = Callback::new(move |_| {
        let removed = ctx.todos.clear_completed();
        log::info!("[UI] cleared {removed} completed todos");
    });

    view! {
        <Show when=move || { counts.get().total > 0 }>
            <footer class="list-footer">
                <span class="todo-count">
                    {move || {
                        let active = counts.get().active;
                        format!("{active} {} left", if active == 1 { "item" } else { "items" })
                    }}
                </span>
                <Show when=move || { counts.get().completed > 0 }>
                    <ConfirmButton
                        label="Clear completed"
                        question="Remove all completed?"
                        button_class="clear-completed-btn"
                        on_confirm=clear_completed
                    />
                </Show>
            </footer>
        </Show>
    }
}
