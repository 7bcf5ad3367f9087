//! # Torah-ELS: Equidistant Letter Sequence Search Engine
//!
//! Deterministic search for words hidden in a text at a fixed letter
//! stride ("skip"), plus the supporting machinery for exploring and
//! displaying what it finds.
//!
//! ## Pipeline
//!
//! 1. **Gematria Evaluator** - numeric values for Hebrew letters
//!    - `gematria("תורה")` → 611
//! 2. **ELS Locator** - all start indices where a term appears at a skip
//!    - `find_els(text, "תורה", 50)` → `[5]`
//! 3. **Window Word Extractor** - candidate words readable at a skip
//!    - `find_words_at_els(text, 7, &opts)` → up to `limit` candidates
//! 4. **Matrix Projector** - square letter grid around an occurrence
//!    - `extract_matrix_from_index(text, 5, 21)` → 21x21 grid
//!
//! Every stage is a pure function over immutable inputs: degenerate
//! inputs (zero skip, empty term, out-of-range indices) yield empty or
//! placeholder results, never errors. The [`ElsSearch`] engine wraps the
//! pipeline around a corpus and adds query validation at the boundary.
//!
//! ## Example Usage
//!
//! ```
//! use torah_els::{ElsSearch, WindowOptions};
//!
//! let engine = ElsSearch::new();
//!
//! // Locate a term at a fixed skip
//! let matches = engine.search("תורה", 50)?;
//! assert_eq!(matches[0].start, 5);
//!
//! // Project a grid around the first match, letters highlighted
//! let view = engine.matrix_for(&matches[0], 21);
//! assert_eq!(view.matrix.size(), 21);
//!
//! // Explore candidate words at a skip
//! let words = engine.scan_words(7, &WindowOptions::default());
//! assert!(words.len() <= 5);
//! # Ok::<(), torah_els::QueryError>(())
//! ```

pub mod corpus;
pub mod gematria;
pub mod locator;
pub mod matrix;
pub mod search;
pub mod types;
pub mod window;

// Re-export main types and functions for convenience
pub use corpus::Corpus;
pub use gematria::{gematria, letter_value};
pub use locator::find_els;
pub use matrix::{extract_matrix_from_index, CharMatrix};
pub use search::{ElsSearch, MatrixView};
pub use types::{CandidateWord, ElsMatch, QueryError, WindowOptions};
pub use window::find_words_at_els;
