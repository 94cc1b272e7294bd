//! Keyword-overlap ranking of catalog components.
//!
//! A component scores the summed length of every one of its keywords that
//! occurs as a substring of the lowercased description. Matching is plain
//! substring containment, so `"card"` also matches inside `"discard"`.

use serde::Serialize;

use crate::catalog::keyword_table;

/// Upper bound on the number of ranked suggestions.
pub const MAX_SUGGESTIONS: usize = 6;

/// A component key together with its relevance score for one description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredMatch {
    pub key: &'static str,
    pub score: usize,
}

/// Score a single keyword set against an already-lowercased description.
fn keyword_score(lowered: &str, keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|kw| lowered.contains(*kw))
        .map(|kw| kw.len())
        .sum()
}

/// Score every component with a non-zero score, best first.
///
/// Ties keep keyword-table order (the sort is stable). The result is capped at
/// [`MAX_SUGGESTIONS`] entries.
pub fn score_description(description: &str) -> Vec<ScoredMatch> {
    let lowered = description.to_lowercase();

    let mut matches: Vec<ScoredMatch> = keyword_table()
        .iter()
        .filter_map(|&(key, keywords)| {
            let score = keyword_score(&lowered, keywords);
            log::trace!("component '{}' scored {}", key, score);
            (score > 0).then_some(ScoredMatch { key, score })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches.truncate(MAX_SUGGESTIONS);
    log::debug!("ranked {} component(s) for description", matches.len());
    matches
}

/// Ranked component keys for a description. Empty when nothing matches.
pub fn suggest(description: &str) -> Vec<&'static str> {
    score_description(description)
        .into_iter()
        .map(|m| m.key)
        .collect()
}
