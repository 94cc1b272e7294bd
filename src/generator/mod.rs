//! Template assembler – turn a classified description into a React source file.
//!
//! This module provides one generator per [`Pattern`]:
//! - [`login`] – login form with optional remember-me and forgot-password fragments.
//! - [`payment`] – payment form with validation rules embedded in the template.
//! - [`profile`] – static profile card.
//! - [`search`] – search bar with client-side filtering of example suggestions.
//! - [`settings`] – settings panel with two toggles.
//! - [`generic`] – fallback form assembled from the ranked components.
//!
//! Every generator is a pure string builder: identical inputs give
//! byte-identical output.

pub mod fragment;
pub mod generic;
mod jsx;
pub mod login;
pub mod payment;
pub mod profile;
pub mod search;
pub mod settings;

pub use generic::generate_generic_form;
pub use jsx::NOVA_PACKAGE;
pub use login::generate_login_form;
pub use payment::generate_payment_form;
pub use profile::generate_profile_card;
pub use search::generate_search_bar;
pub use settings::generate_settings_panel;

use crate::pattern::{Pattern, TemplateFlags, classify};

/// Render a specific pattern, bypassing classification.
///
/// `flags` only affect [`Pattern::Login`]; `components` only affect
/// [`Pattern::Generic`].
pub fn render_pattern(pattern: Pattern, flags: TemplateFlags, components: &[&str]) -> String {
    match pattern {
        Pattern::Login => generate_login_form(flags.remember_me, flags.forgot_password),
        Pattern::Payment => generate_payment_form(),
        Pattern::Profile => generate_profile_card(),
        Pattern::Search => generate_search_bar(),
        Pattern::Settings => generate_settings_panel(),
        Pattern::Generic => generate_generic_form(components),
    }
}

/// Classify `description` and render the matching template.
pub fn generate_code(components: &[&str], description: &str) -> String {
    let classification = classify(description);
    render_pattern(classification.pattern, classification.flags, components)
}
