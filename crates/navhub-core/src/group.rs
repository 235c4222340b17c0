//! Grouping of items under their categories for display.

use serde::Serialize;

use crate::models::{Category, NavItem};

/// A category together with the visible items that belong to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    pub category: Category,
    pub items: Vec<NavItem>,
}

/// Group `items` under `categories`.
///
/// Groups follow category order and items keep their relative order.
/// Categories without items are omitted, and items whose `category` does
/// not resolve to a known id are dropped.
pub fn group_by_category(categories: &[Category], items: &[NavItem]) -> Vec<CategoryGroup> {
    categories
        .iter()
        .filter_map(|c| {
            let members: Vec<NavItem> = items
                .iter()
                .filter(|i| i.category == c.id)
                .cloned()
                .collect();
            if members.is_empty() {
                None
            } else {
                Some(CategoryGroup {
                    category: c.clone(),
                    items: members,
                })
            }
        })
        .collect()
}

/// Items whose category is not present in `categories`.
pub fn orphaned_items<'a>(categories: &[Category], items: &'a [NavItem]) -> Vec<&'a NavItem> {
    items
        .iter()
        .filter(|i| !categories.iter().any(|c| c.id == i.category))
        .collect()
}
