//! codonym - encode a name as a DNA codon sequence
//!
//! Prompts for a name (or takes it from the command line), maps each
//! amino-acid letter to a human-preferred codon and prints the result.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod session;

use cli::Cli;
use session::Options;

fn main() {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.log_level.clone().into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let opts = Options {
        separator: cli.separator.clone(),
        json: cli.json,
        quiet: cli.quiet,
        table: cli.table,
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(e) = session::run(&opts, cli.name(), &mut stdin.lock(), &mut stdout.lock()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
