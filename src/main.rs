//! Hangman - CLI
//!
//! Interactive terminal hangman. Words and definitions come from two
//! public web services; everything else happens locally, one guess at a
//! time.

use anyhow::{Context, Result};
use clap::Parser;
use hangman::commands::run_game;
use hangman::config::GameConfig;
use hangman::lookup::{HttpWordLookup, WordSource};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Terminal hangman with words and definitions from public dictionaries",
    version,
    author
)]
struct Cli {
    /// Log each API request cycle and other diagnostics to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.debug { "debug" } else { "error" }),
    )
    .init();

    let config = GameConfig::default();
    let lookup = HttpWordLookup::new().context("failed to build the HTTP client")?;
    let source = WordSource::new(lookup, config);

    run_game(&source, config)
}
