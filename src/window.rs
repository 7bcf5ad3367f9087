// Window word extractor
// Enumerates candidate words readable at a fixed skip from every start index

use crate::types::{CandidateWord, WindowOptions};

/// Internal accumulation cutoff, as a multiple of the requested limit.
/// A safety valve against unbounded work on long corpora, not a
/// completeness guarantee; matches deep in the corpus may be dropped
/// when earlier positions already produced 10x the requested results.
const ACCUMULATION_FACTOR: usize = 10;

/// Enumerate candidate words found at stride `skip`, growing each start
/// position's word from `min_length` up to `max_length` letters.
///
/// Results come back in discovery order: ascending start index, then
/// ascending length within a start index, truncated to `opts.limit`.
/// Degenerate inputs (zero skip, zero limit, empty text, inverted
/// length bounds) yield an empty list.
pub fn find_words_at_els(text: &[char], skip: i64, opts: &WindowOptions) -> Vec<CandidateWord> {
    if skip == 0
        || text.is_empty()
        || opts.limit == 0
        || opts.min_length == 0
        || opts.min_length > opts.max_length
    {
        return Vec::new();
    }

    let n = text.len() as i64;
    let cutoff = opts.limit.saturating_mul(ACCUMULATION_FACTOR);
    let mut found = Vec::new();

    'starts: for start in 0..text.len() {
        // A start is viable only if the shortest word fits entirely; an
        // i64 overflow in the offset means the span leaves the corpus
        let shortest_end = (opts.min_length as i64 - 1)
            .checked_mul(skip)
            .and_then(|offset| (start as i64).checked_add(offset));
        match shortest_end {
            Some(end) if end >= 0 && end < n => {}
            _ if skip > 0 => {
                // Later starts reach even further; nothing more can fit
                break;
            }
            _ => continue,
        }

        let mut word = String::new();
        for k in 0..opts.max_length {
            let index = match (k as i64)
                .checked_mul(skip)
                .and_then(|offset| (start as i64).checked_add(offset))
            {
                Some(index) if index >= 0 && index < n => index,
                _ => break,
            };
            word.push(text[index as usize]);

            if k + 1 >= opts.min_length {
                found.push(CandidateWord {
                    word: word.clone(),
                    start_index: start,
                });
                if found.len() >= cutoff {
                    break 'starts;
                }
            }
        }
    }

    found.truncate(opts.limit);
    found
}
