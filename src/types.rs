// ELS engine type definitions
// Shared types for matches, window candidates, and query validation

use thiserror::Error;

/// A single ELS occurrence: `term` read from the corpus starting at
/// `start`, advancing `skip` positions per letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElsMatch {
    /// The matched term, exactly as searched
    pub term: String,

    /// Corpus index of the first letter
    pub start: usize,

    /// Stride between successive letters (never zero)
    pub skip: i64,
}

impl ElsMatch {
    /// Create a new match record
    pub fn new(term: impl Into<String>, start: usize, skip: i64) -> Self {
        Self {
            term: term.into(),
            start,
            skip,
        }
    }

    /// Corpus indices of every letter of the match, in term order
    ///
    /// Indices are valid by construction: the locator only emits matches
    /// whose letters all fall inside the corpus.
    pub fn letter_indices(&self) -> Vec<usize> {
        (0..self.term.chars().count())
            .map(|k| (self.start as i64 + k as i64 * self.skip) as usize)
            .collect()
    }

    /// Gematria value of the matched term
    pub fn gematria(&self) -> u64 {
        crate::gematria::gematria(&self.term)
    }
}

impl std::fmt::Display for ElsMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {} (skip {})", self.term, self.start, self.skip)
    }
}

/// A candidate word discovered by the window extractor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateWord {
    /// The extracted word
    pub word: String,

    /// Corpus index of its first letter
    pub start_index: usize,
}

/// Tuning knobs for the window word extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowOptions {
    /// Shortest word to emit
    pub min_length: usize,

    /// Longest word to emit
    pub max_length: usize,

    /// Maximum number of candidates returned
    pub limit: usize,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            min_length: 3,
            max_length: 7,
            limit: 5,
        }
    }
}

/// Query validation errors raised at the engine boundary
///
/// The core functions are total (degenerate inputs yield empty results);
/// these errors exist so callers get a typed diagnostic instead of a
/// silently empty list for queries that can never match anything.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid query: search term is empty")]
    EmptyTerm,

    #[error("Invalid query: skip must be non-zero")]
    ZeroSkip,

    #[error("Invalid query: term has gematria 0, cannot derive a skip from it")]
    ZeroGematria,
}
