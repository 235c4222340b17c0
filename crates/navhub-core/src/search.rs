//! Search/filter pipeline over navigation items.
//!
//! All functions here are pure: they take the current item set and return
//! a new `Vec`, preserving the original relative order. There is no
//! ranking; an item either matches or it does not.
//!
//! # Pipeline
//!
//! 1. Category filter (if a category id is given): exact match on
//!    `NavItem::category`.
//! 2. Text search (if the trimmed query is non-empty): case-insensitive
//!    substring containment in title, description, any tag, or category id.
//!
//! Callers normally apply only one of the two selectors at a time (see
//! [`crate::view::Selection`]); the pipeline itself accepts both.

use regex::RegexBuilder;

use crate::models::NavItem;

/// Default opening marker used by [`highlight`].
pub const MARK_OPEN: &str = "<mark>";
/// Default closing marker used by [`highlight`].
pub const MARK_CLOSE: &str = "</mark>";

/// Keep only items belonging to `category`. `None` keeps everything.
pub fn filter_by_category(items: &[NavItem], category: Option<&str>) -> Vec<NavItem> {
    match category {
        Some(id) => items.iter().filter(|i| i.category == id).cloned().collect(),
        None => items.to_vec(),
    }
}

/// Whether `item` matches an already lowercased, trimmed search term.
fn matches_term(item: &NavItem, term: &str) -> bool {
    item.title.to_lowercase().contains(term)
        || item.description.to_lowercase().contains(term)
        || item.tags.iter().any(|t| t.to_lowercase().contains(term))
        || item.category.to_lowercase().contains(term)
}

/// Substring search. A blank query returns all items unchanged.
pub fn search_items(items: &[NavItem], query: &str) -> Vec<NavItem> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| matches_term(item, &term))
        .cloned()
        .collect()
}

/// Full pipeline: category filter, then text search.
pub fn filter_items(items: &[NavItem], category: Option<&str>, query: Option<&str>) -> Vec<NavItem> {
    let by_category = filter_by_category(items, category);
    match query {
        Some(q) if !q.trim().is_empty() => search_items(&by_category, q),
        _ => by_category,
    }
}

/// A piece of highlighted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Match(&'a str),
}

/// Split `text` into plain and matching segments.
///
/// Matches are non-overlapping, found left to right, and case-insensitive.
/// The query is matched literally, surrounding whitespace included: pattern
/// metacharacters such as `+`, `(` or `*` have no special meaning. A blank
/// query highlights nothing.
///
/// Unlike [`search_items`], the query is not trimmed here, so `" b"`
/// highlights the space too.
pub fn highlight_segments<'a>(text: &'a str, query: &str) -> Vec<Segment<'a>> {
    if query.trim().is_empty() || text.is_empty() {
        return vec![Segment::Plain(text)];
    }

    let re = match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re,
        // Only reachable for pathological query sizes; treat as no match.
        Err(_) => return vec![Segment::Plain(text)],
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for m in re.find_iter(text) {
        if m.start() > last {
            segments.push(Segment::Plain(&text[last..m.start()]));
        }
        segments.push(Segment::Match(m.as_str()));
        last = m.end();
    }
    if last < text.len() {
        segments.push(Segment::Plain(&text[last..]));
    }
    if segments.is_empty() {
        segments.push(Segment::Plain(text));
    }
    segments
}

/// Wrap each match of `query` in `text` with `open`/`close`.
pub fn highlight_with(text: &str, query: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for segment in highlight_segments(text, query) {
        match segment {
            Segment::Plain(s) => out.push_str(s),
            Segment::Match(s) => {
                out.push_str(open);
                out.push_str(s);
                out.push_str(close);
            }
        }
    }
    out
}

/// Wrap each match of `query` in `text` with `<mark>` tags.
///
/// ```rust
/// use navhub_core::search::highlight;
///
/// assert_eq!(highlight("GitHub Guide", "git"), "<mark>Git</mark>Hub Guide");
/// assert_eq!(highlight("GitHub Guide", ""), "GitHub Guide");
/// ```
pub fn highlight(text: &str, query: &str) -> String {
    highlight_with(text, query, MARK_OPEN, MARK_CLOSE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_items;

    fn ids(items: &[NavItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    fn make_item(id: &str, title: &str, category: &str, tags: &[&str]) -> NavItem {
        NavItem {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("{} description", id),
            url: format!("https://{}.example", id),
            icon: "fas fa-link".to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_category_filter_development() {
        let items = default_items();
        let result = filter_items(&items, Some("development"), Some(""));
        assert_eq!(
            ids(&result),
            vec!["github", "stackoverflow", "codepen", "jsfiddle"]
        );
    }

    #[test]
    fn test_category_filter_preserves_order() {
        let items = vec![
            make_item("b", "B", "x", &[]),
            make_item("a", "A", "y", &[]),
            make_item("c", "C", "x", &[]),
        ];
        assert_eq!(ids(&filter_by_category(&items, Some("x"))), vec!["b", "c"]);
        assert_eq!(ids(&filter_by_category(&items, None)), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_unknown_category_yields_nothing() {
        let items = default_items();
        assert!(filter_by_category(&items, Some("nope")).is_empty());
    }

    #[test]
    fn test_search_spotify() {
        let items = default_items();
        let result = filter_items(&items, None, Some("spotify"));
        assert_eq!(ids(&result), vec!["spotify"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let items = default_items();
        let result = search_items(&items, "GITHUB");
        assert_eq!(ids(&result), vec!["github"]);

        let result = search_items(&items, "  git ");
        assert!(ids(&result).contains(&"github"));
    }

    #[test]
    fn test_search_blank_query_is_noop() {
        let items = default_items();
        assert_eq!(search_items(&items, "").len(), items.len());
        assert_eq!(search_items(&items, "   \t").len(), items.len());
        assert_eq!(filter_items(&items, None, None).len(), items.len());
    }

    #[test]
    fn test_search_matches_each_field() {
        let items = vec![
            make_item("t", "Rustacean", "misc", &[]),
            make_item("tag", "Other", "misc", &["Cargo"]),
            make_item("cat", "Other", "rusty-tools", &[]),
            make_item("none", "Other", "misc", &["python"]),
        ];
        assert_eq!(ids(&search_items(&items, "rust")), vec!["t", "cat"]);
        assert_eq!(ids(&search_items(&items, "cargo")), vec!["tag"]);
        // description is "<id> description"
        assert_eq!(ids(&search_items(&items, "none desc")), vec!["none"]);
    }

    #[test]
    fn test_category_then_search() {
        let items = vec![
            make_item("a", "Git tools", "dev", &[]),
            make_item("b", "Git art", "design", &[]),
            make_item("c", "Other", "dev", &[]),
        ];
        let result = filter_items(&items, Some("dev"), Some("git"));
        assert_eq!(ids(&result), vec!["a"]);
    }

    #[test]
    fn test_highlight_leading_match() {
        assert_eq!(highlight("GitHub Guide", "git"), "<mark>Git</mark>Hub Guide");
    }

    #[test]
    fn test_highlight_empty_query_is_noop() {
        assert_eq!(highlight("GitHub Guide", ""), "GitHub Guide");
        assert_eq!(highlight("GitHub Guide", "   "), "GitHub Guide");
    }

    #[test]
    fn test_highlight_metacharacters_are_literal() {
        assert_eq!(
            highlight("Learn C++ and c++ today", "c++"),
            "Learn <mark>C++</mark> and <mark>c++</mark> today"
        );
        assert_eq!(highlight("a.b axb", "."), "a<mark>.</mark>b axb");
        assert_eq!(highlight("(x)", "("), "<mark>(</mark>x)");
        assert_eq!(highlight("no match", "[z"), "no match");
    }

    #[test]
    fn test_highlight_non_overlapping_left_to_right() {
        assert_eq!(highlight("aaaa", "aa"), "<mark>aa</mark><mark>aa</mark>");
        assert_eq!(highlight("aaa", "aa"), "<mark>aa</mark>a");
    }

    #[test]
    fn test_highlight_keeps_query_whitespace() {
        assert_eq!(highlight("a b", " b"), "a<mark> b</mark>");
        assert_eq!(highlight("GitHub", " git"), "GitHub");
    }

    #[test]
    fn test_highlight_custom_markers() {
        assert_eq!(highlight_with("Rust rust", "RUST", "[", "]"), "[Rust] [rust]");
    }

    #[test]
    fn test_highlight_segments() {
        let segments = highlight_segments("Stack Overflow", "over");
        assert_eq!(
            segments,
            vec![
                Segment::Plain("Stack "),
                Segment::Match("Over"),
                Segment::Plain("flow"),
            ]
        );
        assert_eq!(highlight_segments("", "x"), vec![Segment::Plain("")]);
    }
}
