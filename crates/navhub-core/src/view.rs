//! Selection state for a navigation view.
//!
//! A view shows either one category or the results of a text search, never
//! both: choosing a category clears the query and submitting a query clears
//! the category. [`Selection::apply`] then runs the search pipeline.

use serde::{Deserialize, Serialize};

use crate::models::NavItem;
use crate::search::filter_items;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    category: Option<String>,
    query: String,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a category and clear the query. An empty id selects nothing.
    pub fn select_category(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.category = if id.is_empty() { None } else { Some(id) };
        self.query.clear();
    }

    /// Set the search query and clear the category.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.category = None;
    }

    pub fn clear(&mut self) {
        self.category = None;
        self.query.clear();
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// True when the query has non-whitespace content.
    pub fn is_searching(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Visible subset of `items` for this selection.
    pub fn apply(&self, items: &[NavItem]) -> Vec<NavItem> {
        filter_items(items, self.category(), Some(&self.query))
    }
}
