// Corpus loader for the embedded search text
// The text is embedded at compile time and treated as immutable

use rustc_hash::FxHashMap;

/// Embedded placeholder corpus: the consonantal text of Genesis 1:1-1:5,
/// letters only, one verse per line.
///
/// TODO: replace with the complete Torah text once the full normalized
/// data file is provisioned.
pub const BERESHIT_DATA: &str = include_str!("../data/bereshit.txt");

/// An immutable, pre-normalized text buffer searched for ELS matches
///
/// The corpus is expected to contain letters only: no whitespace, no
/// punctuation, no vowel points. Construction strips whitespace (any
/// `char::is_whitespace` character) so the embedded data file may keep
/// line breaks for readability; any other normalization is the data
/// provider's job.
#[derive(Debug, Clone)]
pub struct Corpus {
    letters: Vec<char>,
}

impl Corpus {
    /// Build a corpus from raw text, dropping whitespace
    pub fn from_text(text: &str) -> Self {
        let letters = text.chars().filter(|c| !c.is_whitespace()).collect();
        Self { letters }
    }

    /// The embedded placeholder corpus
    pub fn embedded() -> Self {
        Self::from_text(BERESHIT_DATA)
    }

    /// Number of letters in the corpus
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// True if the corpus holds no letters
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The flat letter buffer, indexed 0..len-1
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Letter at a given index, if in range
    pub fn get(&self, index: usize) -> Option<char> {
        self.letters.get(index).copied()
    }

    /// Occurrence counts per distinct letter
    pub fn letter_frequencies(&self) -> FxHashMap<char, usize> {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for &ch in &self.letters {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }

    /// Number of distinct letters present
    pub fn distinct_letters(&self) -> usize {
        self.letter_frequencies().len()
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self::embedded()
    }
}
