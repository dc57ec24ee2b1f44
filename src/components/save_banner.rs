//! Save Banner Component
//!
//! Warning strip shown while the latest change could not be saved, with
//! recent log lines for diagnosis.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SaveBanner() -> impl IntoView {
    let state = use_app_store();

    view! {
        <Show when=move || state.save_warning().with(|warning| warning.is_some())>
            <div class="save-banner" role="alert">
                <span class="save-banner-text">
                    {move || state.save_warning().get().unwrap_or_default()}
                </span>
                <button
                    class="save-banner-dismiss"
                    title="Dismiss"
                    on:click=move |_| *state.save_warning().write() = None
                >
                    "×"
                </button>
                <details class="save-banner-log">
                    <summary>"Recent log"</summary>
                    <pre>{move || console_logger::recent_lines().join("\n")}</pre>
                </details>
            </div>
        </Show>
    }
}
