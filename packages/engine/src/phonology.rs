//! Finnish segment classes
//!
//! Character-level predicates shared by the syllable splitter and the
//! weight/sonority classifiers. Anything that is not a Finnish vowel is
//! treated as a consonant, which keeps every classifier total over
//! arbitrary input (digits, punctuation, foreign letters).

use crate::types::Sonority;

/// Check if a character is a Finnish vowel (case-insensitive).
pub fn is_vowel(c: char) -> bool {
    matches!(
        c.to_lowercase().next().unwrap_or(c),
        'a' | 'e' | 'i' | 'o' | 'u' | 'y' | 'ä' | 'ö' | 'å'
    )
}

/// Check if a character counts as a consonant for syllabification.
pub fn is_consonant(c: char) -> bool {
    !is_vowel(c)
}

/// Sonority class of a single vowel; `None` for consonants.
pub fn vowel_sonority(c: char) -> Option<Sonority> {
    match c.to_lowercase().next().unwrap_or(c) {
        'a' | 'ä' => Some(Sonority::Low),
        'e' | 'o' | 'ö' | 'å' => Some(Sonority::Mid),
        'i' | 'u' | 'y' => Some(Sonority::High),
        _ => None,
    }
}

/// Check if two vowels form a long vowel (`aa`, `ää`, ...).
pub fn is_long_vowel(a: char, b: char) -> bool {
    is_vowel(a) && lower(a) == lower(b)
}

/// Check if two vowels form a falling diphthong.
///
/// Falling diphthongs end in a high vowel and may occur in any syllable:
/// `ai ei oi ui yi äi öi`, `au eu iu ou`, `ey iy äy öy`.
pub fn is_falling_diphthong(a: char, b: char) -> bool {
    matches!(
        (lower(a), lower(b)),
        ('a' | 'e' | 'o' | 'u' | 'y' | 'ä' | 'ö', 'i')
            | ('a' | 'e' | 'i' | 'o', 'u')
            | ('e' | 'i' | 'ä' | 'ö', 'y')
    )
}

/// Check if two vowels form a rising diphthong (`ie`, `uo`, `yö`).
///
/// Rising diphthongs only surface in the first syllable of a word.
pub fn is_rising_diphthong(a: char, b: char) -> bool {
    matches!((lower(a), lower(b)), ('i', 'e') | ('u', 'o') | ('y', 'ö'))
}

fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowels() {
        for c in "aeiouyäöAÄ".chars() {
            assert!(is_vowel(c), "{c} should be a vowel");
        }
        for c in "ktsnrhj1-".chars() {
            assert!(is_consonant(c), "{c} should be a consonant");
        }
    }

    #[test]
    fn test_vowel_sonority() {
        assert_eq!(vowel_sonority('ä'), Some(Sonority::Low));
        assert_eq!(vowel_sonority('o'), Some(Sonority::Mid));
        assert_eq!(vowel_sonority('y'), Some(Sonority::High));
        assert_eq!(vowel_sonority('k'), None);
    }

    #[test]
    fn test_long_vowels() {
        assert!(is_long_vowel('a', 'a'));
        assert!(is_long_vowel('Ö', 'ö'));
        assert!(!is_long_vowel('a', 'e'));
        assert!(!is_long_vowel('k', 'k'));
    }

    #[test]
    fn test_diphthongs() {
        assert!(is_falling_diphthong('a', 'i'));
        assert!(is_falling_diphthong('ö', 'y'));
        assert!(is_falling_diphthong('o', 'u'));
        assert!(!is_falling_diphthong('i', 'a'));
        assert!(!is_falling_diphthong('a', 'e'));

        assert!(is_rising_diphthong('i', 'e'));
        assert!(is_rising_diphthong('y', 'ö'));
        assert!(!is_rising_diphthong('e', 'i'));
    }
}
