//! Letter classification for names written in amino-acid one-letter codes.
//!
//! A character counts as a letter when its Unicode general category is one
//! of `Lu`, `Ll`, `Lt`, `Lm` or `Lo`. Letter-numbers (`Ⅳ`) and combining
//! marks (the vowel sign in `हि`) are not letters and are dropped.

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// The 20 canonical amino-acid one-letter codes, sorted.
pub const CANONICAL_AMINO_ACIDS: &[u8] = b"ACDEFGHIKLMNPQRSTVWY";

/// Latin letters that are not canonical amino-acid codes
/// (ambiguity codes, selenocysteine, pyrrolysine, unknown).
pub const NON_STANDARD_LETTERS: &[u8] = b"BJOUXZ";

/// How a single (already uppercased) character of input is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Residue {
    /// One of the 20 canonical amino-acid letters.
    Standard(u8),
    /// Alphabetic, but not a canonical amino-acid letter.
    Unknown(char),
    /// Not alphabetic; dropped from the encoding.
    Skipped,
}

impl Residue {
    /// Classify an uppercased character.
    pub fn classify(c: char) -> Self {
        if c.is_ascii() && is_canonical(c as u8) {
            Residue::Standard(c as u8)
        } else if is_letter(c) {
            Residue::Unknown(c)
        } else {
            Residue::Skipped
        }
    }

}

/// Whether `c` is in one of the letter general categories.
pub fn is_letter(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Letter
}

/// Whether `b` is one of the canonical amino-acid letters (uppercase only).
pub fn is_canonical(b: u8) -> bool {
    CANONICAL_AMINO_ACIDS.contains(&b)
}

/// Uppercase `input` character by character.
///
/// Characters whose uppercase form expands (e.g. `ß` → `SS`) yield every
/// character of the expansion.
pub fn uppercase_chars(input: &str) -> impl Iterator<Item = char> + '_ {
    input.chars().flat_map(char::to_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_letters_are_standard() {
        for &b in CANONICAL_AMINO_ACIDS {
            assert_eq!(
                Residue::classify(b as char),
                Residue::Standard(b),
                "{} should be canonical",
                b as char
            );
        }
    }

    #[test]
    fn non_standard_letters_are_unknown() {
        for &b in NON_STANDARD_LETTERS {
            assert_eq!(Residue::classify(b as char), Residue::Unknown(b as char));
        }
    }

    #[test]
    fn alphabets_partition_latin_letters() {
        assert_eq!(CANONICAL_AMINO_ACIDS.len() + NON_STANDARD_LETTERS.len(), 26);
        assert!(NON_STANDARD_LETTERS.iter().all(|&b| !is_canonical(b)));
    }

    #[test]
    fn lowercase_is_not_canonical_before_uppercasing() {
        assert!(!is_canonical(b'a'));
        assert_eq!(Residue::classify('a'), Residue::Unknown('a'));
    }

    #[test]
    fn non_latin_letters_are_unknown() {
        assert_eq!(Residue::classify('É'), Residue::Unknown('É'));
        assert_eq!(Residue::classify('Ж'), Residue::Unknown('Ж'));
    }

    #[test]
    fn digits_and_punctuation_are_skipped() {
        for c in ['1', ' ', '-', '\t', '.', '\''] {
            assert_eq!(Residue::classify(c), Residue::Skipped);
        }
    }

    #[test]
    fn letter_numbers_and_marks_are_skipped() {
        // ROMAN NUMERAL FOUR (Nl), DEVANAGARI VOWEL SIGN I (Mc)
        assert_eq!(Residue::classify('\u{2163}'), Residue::Skipped);
        assert_eq!(Residue::classify('\u{093F}'), Residue::Skipped);
        // DEVANAGARI LETTER HA (Lo)
        assert_eq!(Residue::classify('\u{0939}'), Residue::Unknown('\u{0939}'));
    }

    #[test]
    fn modifier_and_titlecase_letters_are_letters() {
        assert!(is_letter('\u{02B0}')); // MODIFIER LETTER SMALL H (Lm)
        assert!(is_letter('\u{01C5}')); // LATIN CAPITAL LETTER D WITH SMALL LETTER Z WITH CARON (Lt)
        assert!(!is_letter('7'));
    }

    #[test]
    fn uppercasing_expands_sharp_s() {
        let upper: String = uppercase_chars("straße").collect();
        assert_eq!(upper, "STRASSE");
    }
}
