use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use dnalyzer::{read_pair, regexp, resolve_input};

/// Options for the `regexp` subcommand.
#[derive(Debug, Args)]
pub struct RegexpCmd {
    /// String to test, or a path to a file holding it.
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub text: Option<String>,
    /// Expression: literals, `.`, and postfix `*` `+` `?`.
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub expression: Option<String>,
    /// Job file with two tokens: string then expression.
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

pub fn run(cmd: RegexpCmd) -> Result<()> {
    let (text, expression) = match &cmd.file {
        Some(path) => read_pair(path).with_context(|| format!("load job {}", path.display()))?,
        None => (
            resolve_input(cmd.text.as_deref().unwrap_or_default())?,
            cmd.expression.unwrap_or_default(),
        ),
    };
    if regexp::is_match(&text, &expression) {
        println!("match");
    } else {
        println!("no match");
    }
    Ok(())
}
