// Gematria evaluator
// Maps Hebrew letters to their standard numeric values

/// The 22-letter gematria table: units for the first nine letters, tens
/// for the next nine, hundreds for the last four. Final letter forms and
/// anything else outside the table count as 0.
const GEMATRIA_TABLE: &[(char, u64)] = &[
    ('א', 1),
    ('ב', 2),
    ('ג', 3),
    ('ד', 4),
    ('ה', 5),
    ('ו', 6),
    ('ז', 7),
    ('ח', 8),
    ('ט', 9),
    ('י', 10),
    ('כ', 20),
    ('ל', 30),
    ('מ', 40),
    ('נ', 50),
    ('ס', 60),
    ('ע', 70),
    ('פ', 80),
    ('צ', 90),
    ('ק', 100),
    ('ר', 200),
    ('ש', 300),
    ('ת', 400),
];

/// Numeric value of a single letter; 0 for anything outside the table
pub fn letter_value(ch: char) -> u64 {
    GEMATRIA_TABLE
        .iter()
        .find(|(letter, _)| *letter == ch)
        .map(|(_, value)| *value)
        .unwrap_or(0)
}

/// Gematria value of a word: the sum of its letter values
///
/// Total over any input. Unrecognized characters contribute 0, so the
/// empty string and strings with no Hebrew letters both evaluate to 0.
///
/// # Examples
/// ```
/// # use torah_els::gematria::gematria;
/// assert_eq!(gematria("אבג"), 6);
/// assert_eq!(gematria("תורה"), 611);
/// assert_eq!(gematria(""), 0);
/// ```
pub fn gematria(word: &str) -> u64 {
    word.chars().map(letter_value).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string() {
        assert_eq!(gematria(""), 0);
    }

    #[test]
    fn test_simple_sum() {
        assert_eq!(gematria("אבג"), 6);
    }

    #[test]
    fn test_unknown_characters_contribute_zero() {
        assert_eq!(gematria("אX"), 1);
        assert_eq!(gematria("hello"), 0);
        assert_eq!(gematria("123 !?"), 0);
    }

    #[test]
    fn test_final_forms_not_in_table() {
        // Standard table only: finals ך ם ן ף ץ are unrecognized
        assert_eq!(gematria("ם"), 0);
        assert_eq!(gematria("מם"), 40);
    }

    #[test]
    fn test_letter_values() {
        assert_eq!(letter_value('א'), 1);
        assert_eq!(letter_value('ט'), 9);
        assert_eq!(letter_value('י'), 10);
        assert_eq!(letter_value('צ'), 90);
        assert_eq!(letter_value('ק'), 100);
        assert_eq!(letter_value('ת'), 400);
        assert_eq!(letter_value('x'), 0);
    }

    #[test]
    fn test_full_alphabet_sum() {
        let alphabet: String = "אבגדהוזחטיכלמנסעפצקרשת".to_string();
        assert_eq!(gematria(&alphabet), 1495);
    }

    #[test]
    fn test_torah_value() {
        assert_eq!(gematria("תורה"), 611);
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(gematria("שלום"), gematria("שלום"));
    }
}
