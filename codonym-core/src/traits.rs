//! Core trait definitions for codonym.

/// Codon used for any letter a table has no entry for.
pub const WILDCARD_CODON: [u8; 3] = *b"NNN";

/// A fixed mapping from one-letter amino-acid codes to DNA codons.
///
/// The encoder asks the table about every ASCII letter of the input, already
/// uppercased, including letters outside the 20 canonical codes. Implementors
/// return `None` for letters they do not cover; the encoder substitutes [`CodonTable::wildcard`].
pub trait CodonTable {
    /// Human-readable name (e.g. "human-preferred").
    fn name(&self) -> &str;

    /// The codon for an uppercase letter, if the table covers it.
    fn codon_for(&self, letter: u8) -> Option<[u8; 3]>;

    /// The letters this table covers, sorted.
    fn letters(&self) -> &[u8];

    /// Codon emitted for letters outside the table.
    fn wildcard(&self) -> [u8; 3] {
        WILDCARD_CODON
    }

    /// Whether the table covers `letter`.
    fn contains(&self, letter: u8) -> bool {
        self.codon_for(letter).is_some()
    }
}
