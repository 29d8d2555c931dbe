//! Name → codon sequence encoding.
//!
//! Each character of the trimmed, uppercased input is handled independently
//! and in order: ASCII letters map through the codon table, letters the table
//! does not cover (including every non-ASCII letter) map to the table's
//! wildcard, and everything else is dropped.

use std::fmt;

use codonym_core::CodonTable;
use tracing::{debug, trace};

use crate::alphabet::{uppercase_chars, Residue};
use crate::table::HumanCodonTable;

/// Separator used by [`name_to_codons`] and the `Display` impl.
pub const DEFAULT_SEPARATOR: &str = "-";

/// An ordered run of codons produced from one input string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CodonSequence {
    codons: Vec<[u8; 3]>,
    wildcards: usize,
}

impl CodonSequence {
    /// Number of codons.
    pub fn len(&self) -> usize {
        self.codons.len()
    }

    /// Whether no input character produced a codon.
    pub fn is_empty(&self) -> bool {
        self.codons.is_empty()
    }

    /// The codons, in input order.
    pub fn codons(&self) -> &[[u8; 3]] {
        &self.codons
    }

    /// Iterate over codons as string slices.
    pub fn iter_str(&self) -> impl Iterator<Item = &str> + '_ {
        self.codons
            .iter()
            .map(|c| std::str::from_utf8(c).unwrap_or("NNN"))
    }

    /// Whether any letter fell back to the wildcard codon.
    pub fn has_wildcard(&self) -> bool {
        self.wildcards > 0
    }

    /// How many letters fell back to the wildcard codon.
    pub fn wildcard_count(&self) -> usize {
        self.wildcards
    }

    /// Codons joined by `sep`.
    pub fn join(&self, sep: &str) -> String {
        if self.codons.is_empty() {
            return String::new();
        }
        let mut out = String::with_capacity(self.codons.len() * (3 + sep.len()));
        for (i, codon) in self.iter_str().enumerate() {
            if i > 0 {
                out.push_str(sep);
            }
            out.push_str(codon);
        }
        out
    }

    /// Concatenated bases with no separator.
    pub fn to_dna(&self) -> String {
        self.join("")
    }
}

impl fmt::Display for CodonSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(DEFAULT_SEPARATOR))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CodonSequence {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.codons.len()))?;
        for codon in self.iter_str() {
            seq.serialize_element(codon)?;
        }
        seq.end()
    }
}

/// Encode `input` with an arbitrary codon table.
pub fn encode_with<T: CodonTable + ?Sized>(table: &T, input: &str) -> CodonSequence {
    let wildcard = table.wildcard();
    let mut codons = Vec::with_capacity(input.len());
    let mut wildcards = 0;

    for c in uppercase_chars(input.trim()) {
        let codon = match Residue::classify(c) {
            Residue::Skipped => continue,
            Residue::Standard(b) => table.codon_for(b),
            // Tables are keyed by ASCII letters; anything wider is always a wildcard.
            Residue::Unknown(letter) => letter
                .is_ascii()
                .then(|| table.codon_for(letter as u8))
                .flatten(),
        };
        match codon {
            Some(codon) => codons.push(codon),
            None => {
                trace!(letter = %c, table = table.name(), "no codon for letter, using wildcard");
                wildcards += 1;
                codons.push(wildcard);
            }
        }
    }

    debug!(
        table = table.name(),
        codons = codons.len(),
        wildcards,
        "encoded input"
    );

    CodonSequence { codons, wildcards }
}

/// Encode `input` with the human-preferred codon table.
pub fn encode(input: &str) -> CodonSequence {
    encode_with(&HumanCodonTable, input)
}

/// Encode `input` and join the codons with `-`.
///
/// ```
/// use codonym_seq::name_to_codons;
///
/// assert_eq!(name_to_codons("PRACHI"), "CCC-CGC-GCC-TGC-CAC-ATC");
/// assert_eq!(name_to_codons("B1"), "NNN");
/// ```
pub fn name_to_codons(input: &str) -> String {
    encode(input).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letter() {
        assert_eq!(name_to_codons("A"), "GCC");
    }

    #[test]
    fn prachi() {
        assert_eq!(name_to_codons("PRACHI"), "CCC-CGC-GCC-TGC-CAC-ATC");
    }

    #[test]
    fn digit_dropped_unknown_letter_wildcard() {
        let seq = encode("B1");
        assert_eq!(seq.to_string(), "NNN");
        assert_eq!(seq.wildcard_count(), 1);
        assert!(seq.has_wildcard());
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(name_to_codons("prachi"), name_to_codons("PRACHI"));
        assert_eq!(name_to_codons("SaChIn"), name_to_codons("SACHIN"));
    }

    #[test]
    fn sachin_has_wildcard_free_encoding() {
        let seq = encode("SACHIN");
        assert_eq!(seq.to_string(), "AGC-GCC-TGC-CAC-ATC-AAC");
        assert!(!seq.has_wildcard());
    }

    #[test]
    fn empty_and_whitespace_yield_nothing() {
        for input in ["", "   ", "\t\n", "123 -- 456"] {
            let seq = encode(input);
            assert!(seq.is_empty(), "{:?} should encode to nothing", input);
            assert_eq!(seq.to_string(), "");
        }
    }

    #[test]
    fn codon_count_matches_letter_count() {
        let cases = [
            ("Mary-Jane O'Neil", 13),
            ("x7 y8 z9", 3),
            ("  hello world  ", 10),
            ("ÉLODIE", 6),
            ("straße", 7),
        ];
        for (input, expected) in cases {
            assert_eq!(encode(input).len(), expected, "input {:?}", input);
        }
    }

    #[test]
    fn letter_numbers_dropped() {
        assert_eq!(name_to_codons("\u{2163}"), "");
        assert_eq!(name_to_codons("A\u{2163}"), "GCC");
    }

    #[test]
    fn combining_vowel_sign_dropped() {
        // HA followed by VOWEL SIGN I: one letter, one mark
        let seq = encode("\u{0939}\u{093F}");
        assert_eq!(seq.to_string(), "NNN");
        assert_eq!(seq.wildcard_count(), 1);
    }

    #[test]
    fn non_latin_letters_become_wildcards() {
        let seq = encode("Ève");
        assert_eq!(seq.to_string(), "NNN-GTG-GAA");
        assert_eq!(seq.wildcard_count(), 1);
    }

    #[test]
    fn sharp_s_expands_to_two_serines() {
        assert_eq!(name_to_codons("ß"), "AGC-AGC");
    }

    #[test]
    fn interior_whitespace_and_punctuation_dropped() {
        assert_eq!(name_to_codons("A C-D"), "GCC-TGC-GAC");
    }

    #[test]
    fn custom_separator_and_dna() {
        let seq = encode("MAW");
        assert_eq!(seq.join(" "), "ATG GCC TGG");
        assert_eq!(seq.join(""), "ATGGCCTGG");
        assert_eq!(seq.to_dna(), "ATGGCCTGG");
        assert_eq!(seq.iter_str().collect::<Vec<_>>(), vec!["ATG", "GCC", "TGG"]);
    }

    struct PartialTable;

    impl CodonTable for PartialTable {
        fn name(&self) -> &str {
            "partial"
        }

        fn codon_for(&self, letter: u8) -> Option<[u8; 3]> {
            (letter == b'G').then_some(*b"GGA")
        }

        fn letters(&self) -> &[u8] {
            b"G"
        }

        fn wildcard(&self) -> [u8; 3] {
            *b"XXX"
        }
    }

    #[test]
    fn encode_with_custom_table() {
        let seq = encode_with(&PartialTable, "gab");
        assert_eq!(seq.to_string(), "GGA-XXX-XXX");
        assert_eq!(seq.wildcard_count(), 2);
    }

    /// Human table plus selenocysteine on the opal stop codon.
    struct SelenoTable;

    impl CodonTable for SelenoTable {
        fn name(&self) -> &str {
            "human+sec"
        }

        fn codon_for(&self, letter: u8) -> Option<[u8; 3]> {
            match letter {
                b'U' => Some(*b"TGA"),
                other => HumanCodonTable.codon_for(other),
            }
        }

        fn letters(&self) -> &[u8] {
            b"ACDEFGHIKLMNPQRSTUVWY"
        }
    }

    #[test]
    fn table_covering_non_canonical_letter_is_used() {
        assert!(SelenoTable.contains(b'U'));
        let seq = encode_with(&SelenoTable, "Sue");
        assert_eq!(seq.to_string(), "AGC-TGA-GAA");
        assert!(!seq.has_wildcard());
        assert_eq!(encode_with(&SelenoTable, "Bü").to_string(), "NNN-NNN");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_codon_list() {
        let json = serde_json::to_string(&encode("AC")).unwrap();
        assert_eq!(json, r#"["GCC","TGC"]"#);
    }
}
