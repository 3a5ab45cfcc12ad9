use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use dnalyzer::{k_similarity, read_pair, resolve_input};

/// Options for the `ksim` subcommand.
#[derive(Debug, Args)]
pub struct KsimCmd {
    /// Source string, or a path to a file holding it.
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub from: Option<String>,
    /// Target string (an anagram of the source), or a path to a file.
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub to: Option<String>,
    /// Job file with two tokens: source then target.
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

pub fn run(cmd: KsimCmd) -> Result<()> {
    let (from, to) = match &cmd.file {
        Some(path) => read_pair(path).with_context(|| format!("load job {}", path.display()))?,
        None => (
            resolve_input(cmd.from.as_deref().unwrap_or_default())?,
            resolve_input(cmd.to.as_deref().unwrap_or_default())?,
        ),
    };
    match k_similarity(&from, &to) {
        Some(swaps) => println!("{swaps}"),
        None => println!("not comparable"),
    }
    Ok(())
}
