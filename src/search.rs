// ELS search engine
// Main API tying the locator, extractor, and projector to a corpus

use crate::corpus::Corpus;
use crate::gematria::gematria;
use crate::locator::find_els;
use crate::matrix::{extract_matrix_from_index, CharMatrix};
use crate::types::{CandidateWord, ElsMatch, QueryError, WindowOptions};
use crate::window::find_words_at_els;

/// A projected grid together with the grid coordinates of the matched
/// letters, for rendering with the occurrence highlighted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixView {
    /// The projected character grid
    pub matrix: CharMatrix,

    /// (row, col) of each matched letter that falls inside the grid
    pub highlights: Vec<(usize, usize)>,
}

/// Main ELS search engine
///
/// Owns an immutable corpus and exposes the search pipeline:
/// - term + skip lookup (locator)
/// - gematria-derived skip lookup
/// - candidate word enumeration at a skip (window extractor)
/// - grid projection around a match (matrix projector)
pub struct ElsSearch {
    corpus: Corpus,
}

impl ElsSearch {
    /// Create an engine over the embedded placeholder corpus
    pub fn new() -> Self {
        Self {
            corpus: Corpus::embedded(),
        }
    }

    /// Create an engine over a caller-supplied corpus
    pub fn with_corpus(corpus: Corpus) -> Self {
        Self { corpus }
    }

    /// The corpus this engine searches
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Find every occurrence of `term` at stride `skip`
    ///
    /// The underlying scan is total, but a query that can never match
    /// (empty term, zero skip) is reported as a typed error rather than
    /// an indistinguishable empty result.
    pub fn search(&self, term: &str, skip: i64) -> Result<Vec<ElsMatch>, QueryError> {
        if term.is_empty() {
            return Err(QueryError::EmptyTerm);
        }
        if skip == 0 {
            return Err(QueryError::ZeroSkip);
        }

        let starts = find_els(self.corpus.letters(), term, skip);
        Ok(starts
            .into_iter()
            .map(|start| ElsMatch::new(term, start, skip))
            .collect())
    }

    /// Find occurrences of `term` using its own gematria value as the
    /// skip, the classic stride-selection rule for code hunting
    pub fn search_gematria_skip(&self, term: &str) -> Result<Vec<ElsMatch>, QueryError> {
        if term.is_empty() {
            return Err(QueryError::EmptyTerm);
        }
        let value = gematria(term);
        if value == 0 {
            return Err(QueryError::ZeroGematria);
        }
        self.search(term, value as i64)
    }

    /// Enumerate candidate words readable at stride `skip`
    pub fn scan_words(&self, skip: i64, opts: &WindowOptions) -> Vec<CandidateWord> {
        find_words_at_els(self.corpus.letters(), skip, opts)
    }

    /// Project a grid around a match and compute the grid coordinates
    /// of its letters
    ///
    /// The grid is centered on the match's first letter. Highlights are
    /// derived through [`CharMatrix::cell_of`], the same arithmetic the
    /// projection uses, so they always line up with the rendered cells;
    /// letters whose stride carries them outside the grid window are
    /// simply omitted.
    pub fn matrix_for(&self, m: &ElsMatch, size: usize) -> MatrixView {
        let matrix = extract_matrix_from_index(self.corpus.letters(), m.start as i64, size);

        let highlights = m
            .letter_indices()
            .into_iter()
            .filter_map(|index| matrix.cell_of(index as i64))
            .collect();

        MatrixView { matrix, highlights }
    }

    /// Corpus statistics: (total letters, distinct letters)
    pub fn stats(&self) -> (usize, usize) {
        (self.corpus.len(), self.corpus.distinct_letters())
    }
}

impl Default for ElsSearch {
    fn default() -> Self {
        Self::new()
    }
}
