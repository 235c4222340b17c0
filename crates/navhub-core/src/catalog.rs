//! The bundled local catalog.
//!
//! This is the data set the hub falls back to whenever remote data is
//! unavailable or not configured: 6 categories with 4 links each. It can be
//! replaced by a JSON file of the same shape (see [`from_json_str`]).

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::{parse_categories, parse_items, Category, Dataset, NavItem};

fn category(id: &str, name: &str, description: &str, icon: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
    }
}

fn item(
    id: &str,
    title: &str,
    description: &str,
    url: &str,
    icon: &str,
    category: &str,
    tags: &[&str],
) -> NavItem {
    NavItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        url: url.to_string(),
        icon: icon.to_string(),
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Categories of the bundled catalog, in display order.
pub fn default_categories() -> Vec<Category> {
    vec![
        category(
            "development",
            "Development",
            "Programming tools and resources",
            "fas fa-code",
        ),
        category(
            "design",
            "Design",
            "UI/UX design tools and assets",
            "fas fa-palette",
        ),
        category(
            "productivity",
            "Productivity",
            "Apps that make work faster",
            "fas fa-rocket",
        ),
        category(
            "learning",
            "Learning",
            "Online courses and learning platforms",
            "fas fa-graduation-cap",
        ),
        category(
            "news",
            "News",
            "Technology news and industry coverage",
            "fas fa-newspaper",
        ),
        category(
            "entertainment",
            "Entertainment",
            "Music, video and games",
            "fas fa-gamepad",
        ),
    ]
}

/// Items of the bundled catalog, grouped by category in category order.
pub fn default_items() -> Vec<NavItem> {
    vec![
        // development
        item(
            "github",
            "GitHub",
            "The largest code hosting platform, built around Git version control",
            "https://github.com",
            "fab fa-github",
            "development",
            &["code hosting", "open source", "Git"],
        ),
        item(
            "stackoverflow",
            "Stack Overflow",
            "Q&A community where programmers solve coding problems",
            "https://stackoverflow.com",
            "fas fa-question-circle",
            "development",
            &["Q&A", "programming", "community"],
        ),
        item(
            "codepen",
            "CodePen",
            "Online code editor for quick prototypes and sharing snippets",
            "https://codepen.io",
            "fas fa-code",
            "development",
            &["online editor", "prototyping", "frontend"],
        ),
        item(
            "jsfiddle",
            "JSFiddle",
            "Test and share JavaScript in the browser",
            "https://jsfiddle.net",
            "fab fa-js-square",
            "development",
            &["JavaScript", "testing", "sharing"],
        ),
        // design
        item(
            "figma",
            "Figma",
            "Collaborative interface design with real-time multiplayer editing",
            "https://figma.com",
            "fab fa-figma",
            "design",
            &["UI design", "collaboration", "prototyping"],
        ),
        item(
            "dribbble",
            "Dribbble",
            "Showcase of design work and a source of inspiration",
            "https://dribbble.com",
            "fab fa-dribbble",
            "design",
            &["inspiration", "portfolio", "creative"],
        ),
        item(
            "behance",
            "Behance",
            "Adobe's platform for showcasing creative work",
            "https://behance.net",
            "fab fa-behance",
            "design",
            &["creative work", "design", "Adobe"],
        ),
        item(
            "unsplash",
            "Unsplash",
            "High quality free stock photos",
            "https://unsplash.com",
            "fas fa-image",
            "design",
            &["photos", "free", "high quality"],
        ),
        // productivity
        item(
            "notion",
            "Notion",
            "All-in-one notes and collaboration workspace",
            "https://notion.so",
            "fas fa-sticky-note",
            "productivity",
            &["notes", "collaboration", "knowledge base"],
        ),
        item(
            "trello",
            "Trello",
            "Kanban boards for straightforward task management",
            "https://trello.com",
            "fas fa-tasks",
            "productivity",
            &["project management", "kanban", "tasks"],
        ),
        item(
            "slack",
            "Slack",
            "Team messaging with a large integration ecosystem",
            "https://slack.com",
            "fab fa-slack",
            "productivity",
            &["team chat", "collaboration", "integrations"],
        ),
        item(
            "zoom",
            "Zoom",
            "Video meetings and online collaboration",
            "https://zoom.us",
            "fas fa-video",
            "productivity",
            &["video meetings", "online collaboration", "remote work"],
        ),
        // learning
        item(
            "coursera",
            "Coursera",
            "Online courses from leading universities",
            "https://coursera.org",
            "fas fa-graduation-cap",
            "learning",
            &["online courses", "university", "learning platform"],
        ),
        item(
            "udemy",
            "Udemy",
            "Skill-building courses on a wide range of subjects",
            "https://udemy.com",
            "fas fa-chalkboard-teacher",
            "learning",
            &["skills", "online courses", "practical"],
        ),
        item(
            "freecodecamp",
            "freeCodeCamp",
            "Free curriculum for learning to program from scratch",
            "https://freecodecamp.org",
            "fas fa-laptop-code",
            "learning",
            &["programming", "free", "projects"],
        ),
        item(
            "mdn",
            "MDN Web Docs",
            "Mozilla's reference documentation for the web platform",
            "https://developer.mozilla.org",
            "fas fa-book",
            "learning",
            &["web development", "documentation", "Mozilla"],
        ),
        // news
        item(
            "techcrunch",
            "TechCrunch",
            "Technology and startup news",
            "https://techcrunch.com",
            "fas fa-newspaper",
            "news",
            &["tech news", "startups", "coverage"],
        ),
        item(
            "theverge",
            "The Verge",
            "News on technology, science, art and culture",
            "https://theverge.com",
            "fas fa-globe",
            "news",
            &["tech news", "culture", "art"],
        ),
        item(
            "wired",
            "Wired",
            "In-depth technology reporting and analysis",
            "https://wired.com",
            "fas fa-microchip",
            "news",
            &["long form", "analysis", "magazine"],
        ),
        item(
            "ars-technica",
            "Ars Technica",
            "Deep technical analysis and reviews",
            "https://arstechnica.com",
            "fas fa-cogs",
            "news",
            &["technical analysis", "reviews", "science"],
        ),
        // entertainment
        item(
            "spotify",
            "Spotify",
            "Leading music streaming service",
            "https://spotify.com",
            "fab fa-spotify",
            "entertainment",
            &["music", "streaming", "player"],
        ),
        item(
            "netflix",
            "Netflix",
            "Popular film and series streaming service",
            "https://netflix.com",
            "fas fa-film",
            "entertainment",
            &["video", "streaming", "series"],
        ),
        item(
            "steam",
            "Steam",
            "The largest digital game store",
            "https://store.steampowered.com",
            "fab fa-steam",
            "entertainment",
            &["games", "digital store", "platform"],
        ),
        item(
            "youtube",
            "YouTube",
            "The largest video sharing platform",
            "https://youtube.com",
            "fab fa-youtube",
            "entertainment",
            &["video", "sharing", "watching"],
        ),
    ]
}

/// The full bundled catalog.
pub fn default_dataset() -> Dataset {
    Dataset::new(default_categories(), default_items())
}

#[derive(Deserialize)]
struct CatalogFile {
    categories: serde_json::Value,
    items: serde_json::Value,
}

/// Parse a catalog file: `{ "categories": [...], "items": [...] }`.
///
/// Both arrays go through the same shape validation as remote payloads.
pub fn from_json_str(content: &str) -> Result<Dataset> {
    let file: CatalogFile =
        serde_json::from_str(content).context("Catalog must be an object with `categories` and `items`")?;
    let categories = parse_categories(file.categories).context("Invalid catalog categories")?;
    let items = parse_items(file.items).context("Invalid catalog items")?;
    Ok(Dataset::new(categories, items))
}
