// ELS locator
// Scans the corpus for every start index where a term appears at a fixed skip

/// Find all starting positions where `word` can be read from `text` at a
/// fixed stride of `skip` letters.
///
/// Returns start indices in ascending order. Degenerate inputs (zero
/// skip, empty word, empty text) yield an empty list, never an error.
/// Negative skips read backwards through the corpus; the bound check is
/// the same either way, so no candidate ever reads outside `text`.
///
/// This is a plain O(N * L) scan over every candidate start index. The
/// corpus sizes in play (a few hundred thousand letters at most) do not
/// justify an index.
///
/// # Examples
/// ```
/// # use torah_els::locator::find_els;
/// let text: Vec<char> = "ABCDEFGHIJ".chars().collect();
/// assert_eq!(find_els(&text, "CEG", 2), vec![2]);
/// assert_eq!(find_els(&text, "CEG", 3), Vec::<usize>::new());
/// ```
pub fn find_els(text: &[char], word: &str, skip: i64) -> Vec<usize> {
    let target: Vec<char> = word.chars().collect();
    if skip == 0 || target.is_empty() || text.is_empty() {
        return Vec::new();
    }

    let n = text.len() as i64;
    let mut matches = Vec::new();

    'candidates: for start in 0..text.len() {
        for (k, &expected) in target.iter().enumerate() {
            // Checked arithmetic: an offset that overflows i64 is just as
            // out-of-range as one past the corpus end
            let index = match (k as i64)
                .checked_mul(skip)
                .and_then(|offset| (start as i64).checked_add(offset))
            {
                Some(index) if index >= 0 && index < n => index,
                _ => continue 'candidates,
            };
            if text[index as usize] != expected {
                continue 'candidates;
            }
        }
        matches.push(start);
    }

    matches
}
