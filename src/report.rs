//! Caller-facing report: ranked components with their catalog metadata plus
//! the generated code, ready to print or serialize.

use std::fmt::Write as _;

use serde::Serialize;

use crate::catalog::{Category, get_component};
use crate::error::{Error, Result};
use crate::generator::{NOVA_PACKAGE, render_pattern};
use crate::pattern::{Pattern, classify};
use crate::suggest::score_description;

/// Sample descriptions offered to users who need inspiration.
pub const EXAMPLE_DESCRIPTIONS: &[&str] = &[
    "Responsive login form with remember me",
    "User profile card with avatar and edit button",
    "Payment form with card input validation",
    "Search bar with autocomplete dropdown",
    "Settings panel with toggle switches",
];

/// A ranked component resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestedComponent {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub score: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionReport {
    pub description: String,
    pub pattern: Pattern,
    pub suggestions: Vec<SuggestedComponent>,
    pub code: String,
}

impl SuggestionReport {
    /// Suggest components for `description`, classify it and generate code.
    ///
    /// Blank descriptions are rejected with [`Error::EmptyDescription`].
    pub fn build(description: &str) -> Result<Self> {
        Self::build_inner(description, None)
    }

    /// Like [`SuggestionReport::build`] but renders `pattern` regardless of
    /// what the description would classify as.
    pub fn build_with_pattern(description: &str, pattern: Pattern) -> Result<Self> {
        Self::build_inner(description, Some(pattern))
    }

    fn build_inner(description: &str, forced: Option<Pattern>) -> Result<Self> {
        if description.trim().is_empty() {
            return Err(Error::EmptyDescription);
        }

        let scored = score_description(description);
        let keys: Vec<&str> = scored.iter().map(|m| m.key).collect();
        let classification = classify(description);
        let pattern = forced.unwrap_or(classification.pattern);
        if forced.is_some_and(|p| p != classification.pattern) {
            log::info!(
                "rendering '{}' pattern instead of classified '{}'",
                pattern,
                classification.pattern
            );
        }
        let code = render_pattern(pattern, classification.flags, &keys);

        let suggestions = scored
            .iter()
            .filter_map(|m| {
                get_component(m.key).map(|c| SuggestedComponent {
                    key: c.key,
                    name: c.name,
                    description: c.description,
                    category: c.category,
                    score: m.score,
                })
            })
            .collect();

        Ok(Self {
            description: description.to_string(),
            pattern,
            suggestions,
            code,
        })
    }

    /// Human-readable rendering: recommended components, the code, and usage steps.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Suggested Components");
        let _ = writeln!(out, "====================");
        if self.suggestions.is_empty() {
            let _ = writeln!(out, "(no matching components)");
        }
        for s in &self.suggestions {
            let _ = writeln!(out, "{:<16} {:<12} {}", s.name, s.category, s.description);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Generated React Code ({} pattern):", self.pattern);
        let _ = writeln!(out);
        out.push_str(&self.code);
        let _ = writeln!(out);
        let _ = writeln!(out, "How to Use This Code:");
        let _ = writeln!(out, "  1. Install Visa Nova React: npm install {}", NOVA_PACKAGE);
        let _ = writeln!(out, "  2. Copy the generated code above");
        let _ = writeln!(out, "  3. Create a new component file in your project");
        let _ = writeln!(out, "  4. Paste the code and customize as needed");
        let _ = writeln!(out, "  5. Import and use in your application");
        out
    }
}
