//! Relevance scoring of a query variant against a listing.
//!
//! Two interchangeable strategies implement [`Scorer`]:
//!
//! - [`StructuralScorer`]: trigram similarity (the measure used by
//!   Postgres `pg_trgm`), taken against title and description
//!   separately, best of the two.
//! - [`SubstringScorer`]: case-insensitive containment, strictly
//!   1.0 or unscored.
//!
//! The strategy is picked once by [`select_scorer`] when the search
//! service is built, so one response never mixes both.

use crate::core::config::ScoringMode;
use crate::core::types::Listing;
use std::collections::HashSet;

/// Scoring strategy for one query variant against one listing
pub trait Scorer: Send + Sync {
    /// Score in `[0, 1]`, or `None` when the listing does not match
    fn score(&self, variant: &str, listing: &Listing) -> Option<f64>;

    /// Strategy name for logging
    fn name(&self) -> &'static str;
}

/// Trigram-similarity scorer with a match threshold
#[derive(Debug, Clone)]
pub struct StructuralScorer {
    threshold: f64,
}

impl StructuralScorer {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Best similarity of `query` against the whole field or any run
    /// of consecutive field words as long as the query.
    fn field_score(query: &Trigrams, query_words: usize, field: &str) -> f64 {
        let words = split_words(field);
        let mut best = query.similarity(&Trigrams::from_words(&words));

        if query_words > 0 && words.len() > query_words {
            for window in words.windows(query_words) {
                best = best.max(query.similarity(&Trigrams::from_words(window)));
                if best >= 1.0 {
                    break;
                }
            }
        }

        best
    }
}

impl Scorer for StructuralScorer {
    fn score(&self, variant: &str, listing: &Listing) -> Option<f64> {
        let query_words = split_words(variant);
        if query_words.is_empty() {
            return None;
        }
        let query = Trigrams::from_words(&query_words);

        let title = Self::field_score(&query, query_words.len(), &listing.title);
        let description = Self::field_score(&query, query_words.len(), &listing.description);
        let best = title.max(description);

        (best >= self.threshold).then_some(best)
    }

    fn name(&self) -> &'static str {
        "structural"
    }
}

/// Case-insensitive substring scorer
#[derive(Debug, Clone, Default)]
pub struct SubstringScorer;

impl Scorer for SubstringScorer {
    fn score(&self, variant: &str, listing: &Listing) -> Option<f64> {
        let needle = variant.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        let found = listing.title.to_lowercase().contains(&needle)
            || listing.description.to_lowercase().contains(&needle);

        found.then_some(1.0)
    }

    fn name(&self) -> &'static str {
        "substring"
    }
}

/// Pick the scoring strategy for the lifetime of a search service.
///
/// `Auto` uses trigram similarity only when the listing store says
/// the structural facility is reachable.
pub fn select_scorer(
    mode: ScoringMode,
    structural_available: bool,
    threshold: f64,
) -> Box<dyn Scorer> {
    match mode {
        ScoringMode::Structural => Box::new(StructuralScorer::new(threshold)),
        ScoringMode::Substring => Box::new(SubstringScorer),
        ScoringMode::Auto if structural_available => Box::new(StructuralScorer::new(threshold)),
        ScoringMode::Auto => Box::new(SubstringScorer),
    }
}

/// Lowercased alphanumeric words
fn split_words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Trigram set, each word padded with two leading and one trailing blank
struct Trigrams(HashSet<[char; 3]>);

impl Trigrams {
    fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let mut set = HashSet::new();
        for word in words {
            let padded: Vec<char> = "  "
                .chars()
                .chain(word.as_ref().chars())
                .chain(std::iter::once(' '))
                .collect();
            for tri in padded.windows(3) {
                set.insert([tri[0], tri[1], tri[2]]);
            }
        }
        Self(set)
    }

    /// Shared trigrams over all distinct trigrams
    fn similarity(&self, other: &Trigrams) -> f64 {
        let shared = self.0.intersection(&other.0).count();
        let union = self.0.len() + other.0.len() - shared;
        if union == 0 {
            return 0.0;
        }
        shared as f64 / union as f64
    }
}
