//! Title Bar Component
//!
//! App bar with the app title and the dark-mode switch.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// App bar at the top of the page
#[component]
pub fn TitleBar() -> impl IntoView {
    let state = use_app_store();

    let toggle_dark = move |_| {
        let dark = !state.dark_mode().get_untracked();
        log::debug!("[UI] dark mode {}", if dark { "on" } else { "off" });
        *state.dark_mode().write() = dark;
    };

    view! {
        <header class="app-bar">
            <span class="app-bar-title">"Todo"</span>
            <button
                class="theme-toggle-btn"
                title=move || if state.dark_mode().get() { "Switch to light mode" } else { "Switch to dark mode" }
                on:click=toggle_dark
            >
                {move || if state.dark_mode().get() { "☀" } else { "🌙" }}
            </button>
        </header>
    }
}
