//! Classification of a description into one of the hand-authored UI patterns.
//!
//! The cascade is an ordered table of [`PatternRule`]s. The first rule whose
//! predicate holds wins; [`Pattern::Generic`] is the fallback when none does.
//! All checks are substring tests on the lowercased description.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// A named UI template the assembler knows how to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    Login,
    Payment,
    Profile,
    Search,
    Settings,
    Generic,
}

impl Pattern {
    pub const ALL: [Pattern; 6] = [
        Pattern::Login,
        Pattern::Payment,
        Pattern::Profile,
        Pattern::Search,
        Pattern::Settings,
        Pattern::Generic,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Pattern::Login => "login",
            Pattern::Payment => "payment",
            Pattern::Profile => "profile",
            Pattern::Search => "search",
            Pattern::Settings => "settings",
            Pattern::Generic => "generic",
        }
    }

    /// Name of the React component the pattern's template exports.
    pub const fn component_name(self) -> &'static str {
        match self {
            Pattern::Login => "LoginForm",
            Pattern::Payment => "PaymentForm",
            Pattern::Profile => "ProfileCard",
            Pattern::Search => "SearchBar",
            Pattern::Settings => "SettingsPanel",
            Pattern::Generic => "CustomForm",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Pattern::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| Error::UnknownPattern(s.to_string()))
    }
}

/// Secondary flags that toggle optional fragments inside a template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TemplateFlags {
    /// Description mentions "remember": add a remember-me checkbox.
    pub remember_me: bool,
    /// Description mentions "forgot": add a forgot-password link.
    pub forgot_password: bool,
}

impl TemplateFlags {
    pub fn from_description(description: &str) -> Self {
        let lowered = description.to_lowercase();
        Self {
            remember_me: lowered.contains("remember"),
            forgot_password: lowered.contains("forgot"),
        }
    }
}

/// One step of the classification cascade.
#[derive(Clone, Copy)]
pub struct PatternRule {
    pub pattern: Pattern,
    /// Predicate over the lowercased description.
    pub matches: fn(&str) -> bool,
}

impl fmt::Debug for PatternRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternRule")
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

fn is_login(d: &str) -> bool {
    d.contains("login")
}

fn is_payment(d: &str) -> bool {
    d.contains("payment")
}

fn is_profile(d: &str) -> bool {
    d.contains("profile") && d.contains("avatar")
}

fn is_search(d: &str) -> bool {
    d.contains("search") && d.contains("autocomplete")
}

fn is_settings(d: &str) -> bool {
    d.contains("settings") || d.contains("toggle")
}

/// Classification cascade in priority order. Order is part of the contract.
pub static PATTERN_RULES: &[PatternRule] = &[
    PatternRule { pattern: Pattern::Login, matches: is_login },
    PatternRule { pattern: Pattern::Payment, matches: is_payment },
    PatternRule { pattern: Pattern::Profile, matches: is_profile },
    PatternRule { pattern: Pattern::Search, matches: is_search },
    PatternRule { pattern: Pattern::Settings, matches: is_settings },
];

/// Result of classifying a description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub pattern: Pattern,
    pub flags: TemplateFlags,
}

/// Pick the first matching pattern for a description, falling back to
/// [`Pattern::Generic`].
pub fn classify(description: &str) -> Classification {
    let lowered = description.to_lowercase();
    let pattern = PATTERN_RULES
        .iter()
        .find(|rule| (rule.matches)(&lowered))
        .map_or(Pattern::Generic, |rule| rule.pattern);
    log::debug!("classified description as '{}' pattern", pattern);
    Classification {
        pattern,
        flags: TemplateFlags::from_description(description),
    }
}
