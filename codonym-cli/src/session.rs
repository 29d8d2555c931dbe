//! One prompt → encode → report round.
//!
//! Reads and writes go through generic handles so the whole exchange can be
//! driven from memory in tests.

use std::io::{BufRead, Write};

use codonym_core::{CodonymError, Result};
use codonym_seq::{encode, valid_letters, CodonSequence, HumanCodonTable, NON_STANDARD_LETTERS};
use serde::Serialize;
use tracing::{debug, info};

pub const PROMPT: &str = "Enter a name (e.g. PRACHI, SACHIN): ";
pub const NO_INPUT: &str = "No input provided. Exiting.";

/// Output settings for a session.
#[derive(Debug, Clone)]
pub struct Options {
    pub separator: String,
    pub json: bool,
    pub quiet: bool,
    pub table: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            separator: codonym_seq::DEFAULT_SEPARATOR.to_string(),
            json: false,
            quiet: false,
            table: false,
        }
    }
}

impl Options {
    /// Reject settings that would break line-oriented output.
    pub fn validate(&self) -> Result<()> {
        if self.separator.contains(['\n', '\r']) {
            return Err(CodonymError::InvalidInput(
                "separator must not contain a line break".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    input: String,
    codons: &'a CodonSequence,
    sequence: String,
    wildcards: usize,
}

/// Run one session.
///
/// `name` comes from the command line; when `None` the user is prompted on
/// `input`. A closed input stream counts as empty input.
pub fn run<R: BufRead, W: Write>(
    opts: &Options,
    name: Option<String>,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    opts.validate()?;

    if !opts.quiet && !opts.json {
        write_banner(out)?;
    }

    if opts.table {
        return write_table(out);
    }

    let line = match name {
        Some(name) => name,
        None => {
            // In json mode stdout carries only the JSON document.
            if !opts.json {
                write!(out, "{}", PROMPT)?;
                out.flush()?;
            }
            let mut line = String::new();
            let n = input.read_line(&mut line)?;
            debug!(bytes = n, "read input line");
            line
        }
    };

    let name = line.trim();
    if name.is_empty() {
        info!("empty input, nothing to encode");
        writeln!(out, "{}", NO_INPUT)?;
        return Ok(());
    }

    let seq = encode(name);
    let joined = seq.join(&opts.separator);

    if opts.json {
        let report = Report {
            input: name.to_uppercase(),
            codons: &seq,
            sequence: joined,
            wildcards: seq.wildcard_count(),
        };
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| CodonymError::Serialization(e.to_string()))?;
        writeln!(out, "{}", json)?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "{} -> {}", name.to_uppercase(), joined)?;

    if seq.has_wildcard() {
        writeln!(out)?;
        writeln!(
            out,
            "Note: 'NNN' indicates letters that are not standard amino-acid \
             one-letter codes, encoded as unspecified/wildcard codons."
        )?;
    }
    Ok(())
}

fn write_banner<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Codon Name Encoder")?;
    writeln!(out, "----------------------")?;
    writeln!(out, "This tool encodes names as DNA codon sequences.")?;
    writeln!(out, "Standard amino-acid letters (canonical 20):")?;
    writeln!(out, "{}", valid_letters())?;
    writeln!(out)?;
    let others: Vec<String> = NON_STANDARD_LETTERS
        .iter()
        .map(|&b| (b as char).to_string())
        .collect();
    writeln!(
        out,
        "Other letters (e.g. {}) will be encoded as 'NNN'.",
        others.join(", ")
    )?;
    writeln!(out)?;
    Ok(())
}

fn write_table<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Letter  Codon  Amino acid")?;
    for e in HumanCodonTable.entries() {
        writeln!(out, "{:<7} {:<6} {}", e.letter as char, e.codon_str(), e.name)?;
    }
    writeln!(out, "{:<7} {:<6} {}", "other", "NNN", "unspecified")?;
    Ok(())
}
