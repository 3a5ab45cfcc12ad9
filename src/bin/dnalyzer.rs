//! Command-line interface for the `dnalyzer` crate.
//!
//! Subcommands are implemented in separate files (modules) under
//! `src/bin/dnalyzer/`:
//! - `search_cmd.rs`
//! - `align_cmd.rs`
//! - `regexp_cmd.rs`
//! - `ksim_cmd.rs`
//! - `window_cmd.rs`
//!
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name="dnalyzer", version=env!("CARGO_PKG_VERSION"), about="Sequence/string analysis toolkit", disable_help_subcommand=true)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find all occurrences of a pattern in a text (Rabin–Karp).
    Search(search_cmd::SearchCmd),
    /// Global alignment of two sequences (Needleman–Wunsch).
    Align(align_cmd::AlignCmd),
    /// Match a string against a restricted regular expression.
    Regexp(regexp_cmd::RegexpCmd),
    /// Minimum swaps between two anagram strings (k-similarity).
    Ksim(ksim_cmd::KsimCmd),
    /// Shortest window of a string covering a pattern.
    Window(window_cmd::WindowCmd),
}

#[path = "dnalyzer/search_cmd.rs"]
mod search_cmd;
#[path = "dnalyzer/align_cmd.rs"]
mod align_cmd;
#[path = "dnalyzer/regexp_cmd.rs"]
mod regexp_cmd;
#[path = "dnalyzer/ksim_cmd.rs"]
mod ksim_cmd;
#[path = "dnalyzer/window_cmd.rs"]
mod window_cmd;

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Search(cmd) => search_cmd::run(cmd),
        Command::Align(cmd) => align_cmd::run(cmd),
        Command::Regexp(cmd) => regexp_cmd::run(cmd),
        Command::Ksim(cmd) => ksim_cmd::run(cmd),
        Command::Window(cmd) => window_cmd::run(cmd),
    }
}
