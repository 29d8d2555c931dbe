//! Shared primitives for the codonym workspace.
//!
//! - **Error types** — [`CodonymError`] and [`Result`] for structured error handling
//! - **Traits** — [`CodonTable`], the letter-to-codon mapping the encoder is driven by

pub mod error;
pub mod traits;

pub use error::{CodonymError, Result};
pub use traits::*;
