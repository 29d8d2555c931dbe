//! Command-line arguments.

use clap::Parser;

/// Codonym - encode names as DNA codon sequences
#[derive(Debug, Parser)]
#[command(name = "codonym")]
#[command(about = "Encode names written in amino-acid one-letter codes as DNA codons", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Name to encode; prompts on standard input when omitted
    #[arg(value_name = "NAME")]
    pub name: Vec<String>,

    /// Separator placed between codons
    #[arg(short, long, env = "CODONYM_SEPARATOR", default_value = "-")]
    pub separator: String,

    /// Print the letter / codon / amino-acid reference table and exit
    #[arg(short, long)]
    pub table: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip the banner
    #[arg(short, long)]
    pub quiet: bool,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, env = "CODONYM_LOG", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Words given on the command line, joined into one line.
    pub fn name(&self) -> Option<String> {
        if self.name.is_empty() {
            None
        } else {
            Some(self.name.join(" "))
        }
    }
}
