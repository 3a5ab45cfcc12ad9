use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use dnalyzer::{min_window, read_pair, resolve_input};

/// Options for the `window` subcommand.
#[derive(Debug, Args)]
pub struct WindowCmd {
    /// String to scan, or a path to a file holding it.
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub text: Option<String>,
    /// Pattern whose characters the window must cover, or a path to a file.
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub pattern: Option<String>,
    /// Job file with two tokens: string then pattern.
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

pub fn run(cmd: WindowCmd) -> Result<()> {
    let (text, pattern) = match &cmd.file {
        Some(path) => read_pair(path).with_context(|| format!("load job {}", path.display()))?,
        None => (
            resolve_input(cmd.text.as_deref().unwrap_or_default())?,
            resolve_input(cmd.pattern.as_deref().unwrap_or_default())?,
        ),
    };
    let window = min_window(&text, &pattern);
    if window.is_empty() {
        println!("no window");
    } else {
        println!("{window}");
    }
    Ok(())
}
