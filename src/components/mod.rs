//! UI Components
//!
//! Reusable Leptos components.

mod confirm_button;
mod empty_state;
mod filter_bar;
mod list_footer;
mod new_todo_drawer;
mod save_banner;
mod title_bar;
mod todo_list_view;
mod todo_row;

pub use confirm_button::ConfirmButton;
pub use empty_state::{empty_kind, EmptyState, LoadingSkeleton};
pub use filter_bar::FilterBar;
pub use list_footer::ListFooter;
pub use new_todo_drawer::NewTodoDrawer;
pub use save_banner::SaveBanner;
pub use title_bar::TitleBar;
pub use todo_list_view::TodoListView;
pub use todo_row::TodoRow;
