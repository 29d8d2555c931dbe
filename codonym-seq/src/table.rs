//! The human-preferred codon table.
//!
//! One codon per canonical amino acid, picked from the most frequently used
//! codons in human coding sequences. Letters outside the 20 canonical codes
//! have no entry and are encoded as the wildcard `NNN`.

use codonym_core::CodonTable;

use crate::alphabet::CANONICAL_AMINO_ACIDS;

/// A single row of the codon table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodonEntry {
    /// One-letter amino-acid code.
    pub letter: u8,
    /// Preferred codon (DNA, `ACGT` only).
    pub codon: [u8; 3],
    /// Amino-acid name.
    pub name: &'static str,
}

impl CodonEntry {
    /// The codon as a string slice.
    pub fn codon_str(&self) -> &str {
        // Codons are ASCII literals.
        std::str::from_utf8(&self.codon).unwrap_or("NNN")
    }
}

const fn entry(letter: u8, codon: &[u8; 3], name: &'static str) -> CodonEntry {
    CodonEntry {
        letter,
        codon: *codon,
        name,
    }
}

/// Table rows, sorted by letter.
pub const HUMAN_CODONS: [CodonEntry; 20] = [
    entry(b'A', b"GCC", "Alanine"),
    entry(b'C', b"TGC", "Cysteine"),
    entry(b'D', b"GAC", "Aspartic acid"),
    entry(b'E', b"GAA", "Glutamic acid"),
    entry(b'F', b"TTC", "Phenylalanine"),
    entry(b'G', b"GGC", "Glycine"),
    entry(b'H', b"CAC", "Histidine"),
    entry(b'I', b"ATC", "Isoleucine"),
    entry(b'K', b"AAG", "Lysine"),
    entry(b'L', b"CTG", "Leucine"),
    entry(b'M', b"ATG", "Methionine"),
    entry(b'N', b"AAC", "Asparagine"),
    entry(b'P', b"CCC", "Proline"),
    entry(b'Q', b"CAG", "Glutamine"),
    entry(b'R', b"CGC", "Arginine"),
    entry(b'S', b"AGC", "Serine"),
    entry(b'T', b"ACC", "Threonine"),
    entry(b'V', b"GTG", "Valine"),
    entry(b'W', b"TGG", "Tryptophan"),
    entry(b'Y', b"TAC", "Tyrosine"),
];

/// Letter → codon lookup over [`HUMAN_CODONS`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HumanCodonTable;

impl HumanCodonTable {
    /// Full table row for `letter`.
    pub fn entry(&self, letter: u8) -> Option<&'static CodonEntry> {
        HUMAN_CODONS
            .binary_search_by_key(&letter, |e| e.letter)
            .ok()
            .map(|i| &HUMAN_CODONS[i])
    }

    /// All rows, sorted by letter.
    pub fn entries(&self) -> &'static [CodonEntry] {
        &HUMAN_CODONS
    }
}

impl CodonTable for HumanCodonTable {
    fn name(&self) -> &str {
        "human-preferred"
    }

    fn codon_for(&self, letter: u8) -> Option<[u8; 3]> {
        self.entry(letter).map(|e| e.codon)
    }

    fn letters(&self) -> &[u8] {
        CANONICAL_AMINO_ACIDS
    }
}

/// The valid letters as a string: `ACDEFGHIKLMNPQRSTVWY`.
pub fn valid_letters() -> &'static str {
    // CANONICAL_AMINO_ACIDS is an ASCII literal.
    std::str::from_utf8(CANONICAL_AMINO_ACIDS).unwrap_or_default()
}
