//! View Filter
//!
//! Selects which todos the list view shows.

use serde::{Deserialize, Serialize};

use super::item::TodoItem;

/// Filter applied to the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every item
    #[default]
    All,
    /// Items not yet completed
    Active,
    /// Completed items
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    /// Unknown values fall back to `All`
    pub fn from_str(s: &str) -> Self {
        match s {
            "active" => Filter::Active,
            "completed" => Filter::Completed,
            _ => Filter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    pub fn matches(&self, item: &TodoItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.completed,
            Filter::Completed => item.completed,
        }
    }

    /// Project `items` through the filter, keeping order
    pub fn apply<'a>(&self, items: &'a [TodoItem]) -> impl Iterator<Item = &'a TodoItem> + 'a {
        let filter = *self;
        items.iter().filter(move |item| filter.matches(item))
    }

    /// Full-list positions of the items this filter keeps
    pub fn positions(&self, items: &[TodoItem]) -> Vec<usize> {
        items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.matches(item))
            .map(|(index, _)| index)
            .collect()
    }
}
