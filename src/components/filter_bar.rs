//! Filter Bar Component
//!
//! Exclusive All / Active / Completed selector.

use leptos::prelude::*;
use todo_core::Filter;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let state = use_app_store();

    view! {
        <nav class="filter-bar" role="group">
            {Filter::ALL
                .into_iter()
                .map(move |filter| {
                    view! {
                        <button
                            class=move || {
                                if state.filter().get() == filter { "filter-btn active" } else { "filter-btn" }
                            }
                            aria-pressed=move || (state.filter().get() == filter).to_string()
                            on:click=move |_| *state.filter().write() = filter
                        >
                            {filter.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
