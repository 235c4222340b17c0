//! Navigation data models and payload shape validation.
//!
//! These types are the unit of exchange between the data sources (bundled
//! catalog, remote API) and every consumer of the hub (CLI, HTTP server,
//! search pipeline). They serialize to the same JSON shape the remote API
//! produces, so a navhub server can act as another navhub's remote source.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A link category. `id` is unique within a [`Dataset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Opaque icon identifier (e.g. `"fas fa-code"`); never interpreted here.
    pub icon: String,
}

/// A single navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub icon: String,
    /// Id of the owning [`Category`]. Items whose category does not resolve
    /// are dropped from grouped views.
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The `(categories, items)` pair that is published as one unit.
///
/// A dataset is never mutated after construction; reconciliation swaps the
/// whole value (usually behind an `Arc`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub categories: Vec<Category>,
    pub items: Vec<NavItem>,
}

impl Dataset {
    pub fn new(categories: Vec<Category>, items: Vec<NavItem>) -> Self {
        Self { categories, items }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.items.is_empty()
    }

    /// Look up a category by id.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }
}

/// Which remote resource a shape error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Categories,
    Items,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Categories => f.write_str("categories"),
            Resource::Items => f.write_str("navigation items"),
        }
    }
}

/// A payload element that is missing a required field (or has it empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeError {
    pub resource: Resource,
    pub index: usize,
    pub field: &'static str,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} payload element {} has an empty or missing `{}`",
            self.resource, self.index, self.field
        )
    }
}

impl std::error::Error for ShapeError {}

/// Returns the name of the first required field that is blank, if any.
fn first_blank(fields: &[(&'static str, &str)]) -> Option<&'static str> {
    fields
        .iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
}

impl Category {
    /// Name of the first required field that is empty.
    pub fn missing_field(&self) -> Option<&'static str> {
        first_blank(&[
            ("id", self.id.as_str()),
            ("name", self.name.as_str()),
            ("description", self.description.as_str()),
            ("icon", self.icon.as_str()),
        ])
    }
}

impl NavItem {
    /// Name of the first required field that is empty. `tags` is optional.
    pub fn missing_field(&self) -> Option<&'static str> {
        first_blank(&[
            ("id", self.id.as_str()),
            ("title", self.title.as_str()),
            ("description", self.description.as_str()),
            ("url", self.url.as_str()),
            ("icon", self.icon.as_str()),
            ("category", self.category.as_str()),
        ])
    }
}

/// Reject the whole category payload if any element is incomplete.
pub fn validate_categories(categories: &[Category]) -> Result<(), ShapeError> {
    for (index, c) in categories.iter().enumerate() {
        if let Some(field) = c.missing_field() {
            return Err(ShapeError {
                resource: Resource::Categories,
                index,
                field,
            });
        }
    }
    Ok(())
}

/// Reject the whole item payload if any element is incomplete.
pub fn validate_items(items: &[NavItem]) -> Result<(), ShapeError> {
    for (index, item) in items.iter().enumerate() {
        if let Some(field) = item.missing_field() {
            return Err(ShapeError {
                resource: Resource::Items,
                index,
                field,
            });
        }
    }
    Ok(())
}

/// Parse a JSON array of categories, enforcing shape.
///
/// Missing string fields deserialize as empty and are then reported by
/// [`validate_categories`], so a partial object yields a [`ShapeError`]
/// naming the field rather than an opaque serde message.
pub fn parse_categories(value: serde_json::Value) -> anyhow::Result<Vec<Category>> {
    let raw: Vec<RawCategory> = serde_json::from_value(value)?;
    let categories: Vec<Category> = raw.into_iter().map(Into::into).collect();
    validate_categories(&categories)?;
    Ok(categories)
}

/// Parse a JSON array of navigation items, enforcing shape.
pub fn parse_items(value: serde_json::Value) -> anyhow::Result<Vec<NavItem>> {
    let raw: Vec<RawNavItem> = serde_json::from_value(value)?;
    let items: Vec<NavItem> = raw.into_iter().map(Into::into).collect();
    validate_items(&items)?;
    Ok(items)
}

#[derive(Deserialize)]
struct RawCategory {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    icon: Option<String>,
}

impl From<RawCategory> for Category {
    fn from(raw: RawCategory) -> Self {
        Self {
            id: raw.id.unwrap_or_default(),
            name: raw.name.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            icon: raw.icon.unwrap_or_default(),
        }
    }
}

#[derive(Deserialize)]
struct RawNavItem {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
}

impl From<RawNavItem> for NavItem {
    fn from(raw: RawNavItem) -> Self {
        Self {
            id: raw.id.unwrap_or_default(),
            title: raw.title.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            url: raw.url.unwrap_or_default(),
            icon: raw.icon.unwrap_or_default(),
            category: raw.category.unwrap_or_default(),
            tags: raw.tags.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_items_accepts_missing_tags() {
        let items = parse_items(json!([{
            "id": "github",
            "title": "GitHub",
            "description": "Code hosting",
            "url": "https://github.com",
            "icon": "fab fa-github",
            "category": "development"
        }]))
        .unwrap();
        assert_eq!(items.len(), 1);
        assert!(items[0].tags.is_empty());
    }

    #[test]
    fn test_parse_items_rejects_blank_url() {
        let err = parse_items(json!([{
            "id": "github",
            "title": "GitHub",
            "description": "Code hosting",
            "url": "",
            "icon": "fab fa-github",
            "category": "development"
        }]))
        .unwrap_err();
        let shape = err.downcast_ref::<ShapeError>().unwrap();
        assert_eq!(shape.resource, Resource::Items);
        assert_eq!(shape.index, 0);
        assert_eq!(shape.field, "url");
    }

    #[test]
    fn test_parse_categories_reports_missing_field_and_index() {
        let err = parse_categories(json!([
            {"id": "a", "name": "A", "description": "d", "icon": "i"},
            {"id": "b", "name": "B", "description": "d"}
        ]))
        .unwrap_err();
        let shape = err.downcast_ref::<ShapeError>().unwrap();
        assert_eq!(shape.index, 1);
        assert_eq!(shape.field, "icon");
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(parse_categories(json!({"id": "a"})).is_err());
        assert!(parse_items(json!("nope")).is_err());
    }

    #[test]
    fn test_empty_payload_is_valid() {
        assert!(parse_categories(json!([])).unwrap().is_empty());
        assert!(parse_items(json!([])).unwrap().is_empty());
    }

    #[test]
    fn test_whitespace_only_field_is_blank() {
        let c = Category {
            id: "x".into(),
            name: "   ".into(),
            description: "d".into(),
            icon: "i".into(),
        };
        assert_eq!(c.missing_field(), Some("name"));
    }
}
