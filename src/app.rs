//! Todo Frontend App
//!
//! Root component: builds the store, restores saved todos, wires the UI
//! snapshot and storage mirroring as store subscribers, and lays out the page.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{bind_global_pointer_handlers, create_dnd_signals, resolve_drop};
use reactive_stores::Store;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use todo_core::{PersistenceBridge, TodoItem};

use crate::components::{FilterBar, ListFooter, NewTodoDrawer, SaveBanner, TitleBar, TodoListView};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::storage::WebStorage;
use crate::store::{AppState, AppStateStoreFields, AppStore, TodoHandle};

type Bridge = Rc<PersistenceBridge<WebStorage>>;

fn color_scheme_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
}

fn prefers_dark_mode() -> bool {
    color_scheme_query().is_some_and(|query| query.matches())
}

fn apply_color_scheme(state: AppStore, dark: bool) {
    if state.dark_mode().get_untracked() != dark {
        log::debug!("[APP] system color scheme is now {}", if dark { "dark" } else { "light" });
        *state.dark_mode().write() = dark;
    }
}

/// Keep dark mode in step with the system setting; a manual toggle holds
/// until the system setting changes again
fn follow_color_scheme(state: AppStore) {
    let Some(query) = color_scheme_query() else {
        return;
    };
    let on_change = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
        move |ev: web_sys::MediaQueryListEvent| apply_color_scheme(state, ev.matches()),
    );
    if let Err(err) = query.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref()) {
        log::warn!("[APP] cannot watch color scheme: {err:?}");
    }
    on_change.forget();
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let state: AppStore = Store::new(AppState::new(prefers_dark_mode()));
    follow_color_scheme(state);
    let todos = TodoHandle::new();
    let dnd = create_dnd_signals();
    let ctx = AppContext::new(todos, signal(false), dnd);

    // Provide context to all children
    provide_context(state);
    provide_context(ctx);

    // Rendered snapshot follows every store change
    todos.subscribe(move |event| {
        *state.todos().write() = event.items.to_vec();
    });

    // Drops are reported in filtered-view indices
    bind_global_pointer_handlers(dnd, move |from, target| {
        let filter = state.filter().get_untracked();
        let len = todos.view_len(filter);
        if let Some(to) = resolve_drop(from, target, len) {
            log::debug!("[DND] move {from} -> {to} in {} view", filter.as_str());
            todos.move_in_view(filter, from, to);
        }
    });

    // Restore once, then start mirroring changes to storage
    let bridge: Bridge = Rc::new(PersistenceBridge::new(WebStorage::new(), config.persist.clone()));
    let retry_delay_ms = config.retry_delay_ms;
    spawn_local(async move {
        let report = bridge.restore().await;
        log::info!("[APP] restore finished: {:?}", report.outcome);
        todos.hydrate(report.items);
        *state.loading().write() = false;
        attach_persistence(todos, state, bridge, retry_delay_ms);
    });

    view! {
        <div class=move || if state.dark_mode().get() { "app-layout dark" } else { "app-layout" }>
            <TitleBar />

            <main class="main-content">
                <FilterBar />
                <TodoListView />
                <ListFooter />
            </main>

            <SaveBanner />

            <button class="fab" title="Add todo" on:click=move |_| ctx.open_drawer()>
                "+"
            </button>

            <NewTodoDrawer />
        </div>
    }
}

fn attach_persistence(todos: TodoHandle, state: AppStore, bridge: Bridge, retry_delay_ms: u32) {
    todos.subscribe(move |event| {
        let revision = event.revision;
        let snapshot = event.items.to_vec();
        spawn_local(persist_snapshot(
            bridge.clone(),
            todos,
            state,
            revision,
            snapshot,
            retry_delay_ms,
        ));
    });
}

/// Write one snapshot; on failure warn the user and retry once later
/// unless a newer change has superseded it
async fn persist_snapshot(
    bridge: Bridge,
    todos: TodoHandle,
    state: AppStore,
    revision: u64,
    snapshot: Vec<TodoItem>,
    retry_delay_ms: u32,
) {
    let err = match bridge.persist(revision, &snapshot).await {
        Ok(_) => {
            clear_warning(state);
            return;
        }
        Err(err) => err,
    };

    log::error!("[APP] saving r{revision} failed: {err}");
    *state.save_warning().write() = Some(format!("Your latest changes are not saved yet: {err}"));

    TimeoutFuture::new(retry_delay_ms).await;
    if todos.revision() != Some(revision) {
        return;
    }
    match bridge.persist(revision, &snapshot).await {
        Ok(_) => {
            log::info!("[APP] delayed save of r{revision} succeeded");
            clear_warning(state);
        }
        Err(err) => log::warn!("[APP] delayed save of r{revision} failed: {err}"),
    }
}

fn clear_warning(state: AppStore) {
    if state.save_warning().with_untracked(|warning| warning.is_some()) {
        *state.save_warning().write() = None;
    }
}
