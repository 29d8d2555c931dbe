//! Amino-acid name encoding for codonym.
//!
//! Turns a name spelled with amino-acid one-letter codes into a DNA codon
//! sequence, one human-preferred codon per letter:
//!
//! - **Alphabet** — canonical letters and [`Residue`] classification
//! - **Codon table** — [`HumanCodonTable`], the static letter → codon mapping
//! - **Encoding** — [`encode`], [`name_to_codons`] and [`CodonSequence`]
//!
//! # Example
//!
//! ```
//! use codonym_seq::{encode, name_to_codons};
//!
//! assert_eq!(name_to_codons("prachi"), "CCC-CGC-GCC-TGC-CAC-ATC");
//!
//! // Letters outside the 20 canonical codes become the wildcard codon.
//! let seq = encode("Bob");
//! assert_eq!(seq.to_string(), "NNN-NNN-NNN");
//! assert_eq!(seq.wildcard_count(), 3);
//! ```

pub mod alphabet;
pub mod encode;
pub mod table;

pub use alphabet::{Residue, CANONICAL_AMINO_ACIDS, NON_STANDARD_LETTERS};
pub use encode::{encode, encode_with, name_to_codons, CodonSequence, DEFAULT_SEPARATOR};
pub use table::{valid_letters, CodonEntry, HumanCodonTable, HUMAN_CODONS};
