// Integration tests for the ELS locator and window extractor

use torah_els::{find_els, find_words_at_els, WindowOptions};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

// ============ Locator: degenerate inputs ============

#[test]
fn test_zero_skip_returns_empty() {
    let text = chars("ABCDEFGHIJ");
    assert!(find_els(&text, "ABC", 0).is_empty());
}

#[test]
fn test_empty_word_returns_empty() {
    let text = chars("ABCDEFGHIJ");
    assert!(find_els(&text, "", 3).is_empty());
}

#[test]
fn test_empty_text_returns_empty() {
    assert!(find_els(&[], "ABC", 1).is_empty());
}

// ============ Locator: correctness ============

#[test]
fn test_skip_must_line_up_exactly() {
    let text = chars("ABCDEFGHIJ");
    assert_eq!(find_els(&text, "CEG", 2), vec![2]);
    assert_eq!(find_els(&text, "CEG", 3), Vec::<usize>::new());
}

#[test]
fn test_matches_reconstruct_word() {
    let text = chars("ABRAKADABRAABRAKADABRA");
    for skip in 1..6i64 {
        for start in find_els(&text, "AAA", skip) {
            for (k, expected) in "AAA".chars().enumerate() {
                let index = start + k * skip as usize;
                assert!(index < text.len(), "index {} out of range", index);
                assert_eq!(text[index], expected);
            }
        }
    }
}

#[test]
fn test_exhaustive_against_brute_force() {
    let text = chars("THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG");
    for word in ["THE", "OO", "TXE", "Q"] {
        for skip in 1..10i64 {
            let expected: Vec<usize> = (0..text.len())
                .filter(|&start| {
                    word.chars().enumerate().all(|(k, ch)| {
                        let index = start as i64 + k as i64 * skip;
                        index >= 0 && (index as usize) < text.len() && text[index as usize] == ch
                    })
                })
                .collect();
            assert_eq!(
                find_els(&text, word, skip),
                expected,
                "word {} skip {}",
                word,
                skip
            );
        }
    }
}

#[test]
fn test_hebrew_corpus_search() {
    let text = chars("בראשיתברא");
    assert_eq!(find_els(&text, "ברא", 1), vec![0, 6]);
    // ב at 0, א at 2, י at 4 read at skip 2
    assert_eq!(find_els(&text, "באי", 2), vec![0]);
}

#[test]
fn test_idempotence() {
    let text = chars("ABCABCABCABC");
    let first = find_els(&text, "AAA", 3);
    let second = find_els(&text, "AAA", 3);
    assert_eq!(first, second);
}

// ============ Window extractor ============

#[test]
fn test_extractor_zero_skip_returns_empty() {
    let text = chars("ABCDEFGHIJ");
    assert!(find_words_at_els(&text, 0, &WindowOptions::default()).is_empty());
}

#[test]
fn test_extractor_limit_and_length_bounds() {
    let text = chars("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    let opts = WindowOptions {
        min_length: 3,
        max_length: 5,
        limit: 2,
    };
    let words = find_words_at_els(&text, 2, &opts);
    assert!(words.len() <= 2);
    for candidate in &words {
        let len = candidate.word.chars().count();
        assert!((3..=5).contains(&len), "length {} out of bounds", len);
    }
}

#[test]
fn test_extractor_short_corpus_returns_empty() {
    let text = chars("AB");
    assert!(find_words_at_els(&text, 1, &WindowOptions::default()).is_empty());
}

#[test]
fn test_extractor_discovery_order() {
    let text = chars("ABCDEFGH");
    let opts = WindowOptions {
        min_length: 3,
        max_length: 4,
        limit: 4,
    };
    let words = find_words_at_els(&text, 1, &opts);
    assert_eq!(words.len(), 4);
    assert_eq!(words[0].word, "ABC");
    assert_eq!(words[1].word, "ABCD");
    assert_eq!(words[2].word, "BCD");
    assert_eq!(words[3].word, "BCDE");

    // Ascending start index, length grows within a start
    for pair in words.windows(2) {
        assert!(pair[0].start_index <= pair[1].start_index);
    }
}

#[test]
fn test_extractor_words_read_back_from_text() {
    let text = chars("ABCDEFGHIJKLMNOP");
    let skip = 3i64;
    for candidate in find_words_at_els(&text, skip, &WindowOptions::default()) {
        for (k, ch) in candidate.word.chars().enumerate() {
            assert_eq!(text[candidate.start_index + k * skip as usize], ch);
        }
    }
}
