//! Component catalog: the fixed set of Nova React components the suggester
//! knows about, plus the keywords that make each one relevant.
//!
//! Both tables are built once on first access and never change afterwards.
//! Declaration order matters: it is the tie-break order used when ranking.
//!
//! # Usage
//!
//! ```rust
//! use component_suggester::catalog::{get_component, Category};
//!
//! let input = get_component("input").unwrap();
//! assert_eq!(input.name, "Input Field");
//! assert_eq!(input.category, Category::Form);
//! assert!(get_component("carousel").is_none());
//! ```

use std::fmt;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Serialize;

/// Broad grouping of a component, shown next to its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Form,
    Action,
    Layout,
    Navigation,
    Typography,
    Overlay,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Form => "form",
            Category::Action => "action",
            Category::Layout => "layout",
            Category::Navigation => "navigation",
            Category::Typography => "typography",
            Category::Overlay => "overlay",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single entry in the component catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentEntry {
    /// Stable lookup key (e.g. `"input"`, `"modal"`).
    pub key: &'static str,
    /// Display name, also used as the import name in generated code.
    pub name: &'static str,
    /// One-line human description.
    pub description: &'static str,
    pub category: Category,
}

/// Components grouped under one category, in declaration order.
#[derive(Debug, Clone)]
pub struct CatalogCategory {
    pub category: Category,
    pub entries: Vec<&'static ComponentEntry>,
}

fn entry(
    key: &'static str,
    name: &'static str,
    category: Category,
    description: &'static str,
) -> ComponentEntry {
    ComponentEntry {
        key,
        name,
        description,
        category,
    }
}

/// Trigger words per component key. Lowercase, matched as substrings.
static KEYWORDS: &[(&str, &[&str])] = &[
    ("input", &["input", "field", "text", "email", "password", "username", "textbox"]),
    ("button", &["button", "submit", "click", "action", "cta", "press"]),
    ("checkbox", &["checkbox", "remember", "agree", "terms", "check", "tick"]),
    ("label", &["label", "form"]),
    ("form", &["form", "login", "signup", "register", "contact", "submit"]),
    ("card", &["card", "container", "panel", "box"]),
    ("link", &["link", "forgot", "navigate", "href", "anchor"]),
    ("heading", &["title", "heading", "header", "h1", "h2", "h3"]),
    ("grid", &["responsive", "layout", "grid", "columns", "rows"]),
    ("modal", &["modal", "popup", "dialog", "overlay", "lightbox"]),
];

fn build_catalog() -> IndexMap<&'static str, ComponentEntry> {
    use Category::*;

    let entries = [
        entry("input", "Input Field", Form, "Text input with validation and accessibility features"),
        entry("button", "Button", Action, "Primary and secondary action buttons"),
        entry("checkbox", "Checkbox", Form, "Checkbox input for boolean selections"),
        entry("label", "Label", Form, "Form labels with proper association"),
        entry("form", "Form Container", Layout, "Semantic form wrapper with validation"),
        entry("card", "Card", Layout, "Content container with elevation"),
        entry("link", "Link", Navigation, "Navigation and action links"),
        entry("heading", "Heading", Typography, "Semantic headings for content hierarchy"),
        entry("grid", "Grid", Layout, "Responsive grid layout system"),
        entry("modal", "Modal", Overlay, "Overlay dialog for important actions"),
    ];

    entries.into_iter().map(|e| (e.key, e)).collect()
}

static CATALOG: Lazy<IndexMap<&'static str, ComponentEntry>> = Lazy::new(build_catalog);

/// Look up a component by key. Unknown keys are an expected outcome, not an error.
pub fn get_component(key: &str) -> Option<&'static ComponentEntry> {
    CATALOG.get(key)
}

/// All catalog entries in declaration order.
pub fn catalog() -> impl Iterator<Item = &'static ComponentEntry> {
    CATALOG.values()
}

/// The keyword table as `(key, keywords)` pairs in declaration order.
pub fn keyword_table() -> &'static [(&'static str, &'static [&'static str])] {
    KEYWORDS
}

/// Keywords registered for a component key, if any.
pub fn keywords_for(key: &str) -> Option<&'static [&'static str]> {
    KEYWORDS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, words)| *words)
}

/// Returns the catalog organized by category, categories in first-seen order.
pub fn catalog_by_category() -> &'static [CatalogCategory] {
    static CATEGORIES: Lazy<Vec<CatalogCategory>> = Lazy::new(|| {
        let mut by_cat: IndexMap<Category, Vec<&'static ComponentEntry>> = IndexMap::new();
        for e in catalog() {
            by_cat.entry(e.category).or_default().push(e);
        }
        by_cat
            .into_iter()
            .map(|(category, entries)| CatalogCategory { category, entries })
            .collect()
    });
    &CATEGORIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_keyword_set_has_a_catalog_entry() {
        for (key, _) in keyword_table() {
            assert!(get_component(key).is_some(), "Keyword set without catalog row: {}", key);
        }
    }

    #[test]
    fn every_catalog_entry_has_keywords() {
        for e in catalog() {
            let words = keywords_for(e.key).unwrap_or_default();
            assert!(!words.is_empty(), "No keywords for {}", e.key);
        }
    }

    #[test]
    fn keywords_are_lowercase() {
        for (key, words) in keyword_table() {
            for w in words.iter() {
                assert_eq!(*w, w.to_lowercase(), "Keyword '{}' of {} is not lowercase", w, key);
            }
        }
    }

    #[test]
    fn keyword_table_follows_catalog_order() {
        let catalog_keys: Vec<_> = catalog().map(|e| e.key).collect();
        let keyword_keys: Vec<_> = keyword_table().iter().map(|(k, _)| *k).collect();
        assert_eq!(catalog_keys, keyword_keys);
    }

    #[test]
    fn catalog_entries_have_non_empty_fields() {
        for e in catalog() {
            assert!(!e.name.is_empty(), "Empty name for {}", e.key);
            assert!(!e.description.is_empty(), "Empty description for {}", e.key);
        }
    }

    #[test]
    fn unknown_key_is_absent() {
        assert!(get_component("carousel").is_none());
        assert!(get_component("").is_none());
        assert!(get_component("INPUT").is_none());
    }

    #[test]
    fn catalog_by_category_is_consistent() {
        let categories = catalog_by_category();
        let total: usize = categories.iter().map(|c| c.entries.len()).sum();
        assert_eq!(total, catalog().count());
        assert_eq!(categories[0].category, Category::Form);
        let forms: Vec<_> = categories[0].entries.iter().map(|e| e.key).collect();
        assert_eq!(forms, ["input", "checkbox", "label"]);
    }
}
