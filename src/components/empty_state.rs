//! Empty State Components
//!
//! Placeholders shown instead of the list: a skeleton while loading and a
//! per-filter message when there is nothing to show.

use leptos::prelude::*;
use todo_core::Filter;

use crate::context::AppContext;

const SKELETON_ROWS: usize = 9;

/// Placeholder rows shown until stored todos are restored
#[component]
pub fn LoadingSkeleton() -> impl IntoView {
    view! {
        <div class="todo-list loading" aria-busy="true">
            {(0..SKELETON_ROWS)
                .map(|_| view! {
                    <div class="todo-row skeleton">
                        <span class="skeleton-box"></span>
                        <span class="skeleton-line"></span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

/// Which message an empty view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyKind {
    /// No todos at all, whatever the filter
    NoTodos,
    /// Todos exist but none is active
    AllDone,
    /// Todos exist but none is completed
    NoneCompleted,
}

/// Pick the message for an empty view of a list holding `total` todos
pub fn empty_kind(total: usize, filter: Filter) -> EmptyKind {
    if total == 0 {
        return EmptyKind::NoTodos;
    }
    match filter {
        Filter::All => EmptyKind::NoTodos,
        Filter::Active => EmptyKind::AllDone,
        Filter::Completed => EmptyKind::NoneCompleted,
    }
}

#[component]
pub fn EmptyState(kind: EmptyKind) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    match kind {
        EmptyKind::NoTodos => view! {
            <div class="empty-state">
                <h2>"Let's get started!"</h2>
                <p>"Don't tell me you have nothing to do."</p>
                <button class="primary-btn" on:click=move |_| ctx.open_drawer()>
                    "Create your first todo"
                </button>
            </div>
        }
        .into_any(),
        EmptyKind::AllDone => view! {
            <div class="empty-state">
                <h2>"Congratulations!"</h2>
                <p>"You have finished all your tasks."</p>
            </div>
        }
        .into_any(),
        EmptyKind::NoneCompleted => view! {
            <div class="empty-state">
                <h2>"What are you doing?"</h2>
                <p>"You haven't completed any tasks yet..."</p>
            </div>
        }
        .into_any(),
    }
}
