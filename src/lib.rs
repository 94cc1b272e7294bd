//! UI component suggester.
//!
//! Ranks a fixed catalog of Nova React components by keyword overlap with a
//! free-text description and generates a React template for the best-fitting
//! UI pattern (login, payment, profile card, search bar, settings panel, or a
//! generic form built from the ranked components).
//!
//! The core is pure and stateless apart from the immutable catalog:
//!
//! ```rust
//! let ranked = component_suggester::suggest("login form with remember me");
//! let code = component_suggester::generate_code(&ranked, "login form with remember me");
//! assert!(code.contains("const LoginForm"));
//! ```
//!
//! The binary `component-suggester` wraps this in a small CLI.

pub mod catalog;
pub mod error;
pub mod generator;
pub mod pattern;
pub mod report;
pub mod suggest;

pub use catalog::{Category, ComponentEntry, get_component};
pub use error::{Error, Result};
pub use generator::generate_code;
pub use pattern::{Pattern, classify};
pub use report::SuggestionReport;
pub use suggest::{MAX_SUGGESTIONS, ScoredMatch, suggest};
