use anyhow::Result;
use clap::Args;
use dnalyzer::{rabin_karp, resolve_input};

/// Options for the `search` subcommand.
#[derive(Debug, Args)]
pub struct SearchCmd {
    /// Text to search, or a path to a file holding it.
    pub text: String,
    /// Pattern to look for, or a path to a file holding it.
    pub pattern: String,
}

pub fn run(cmd: SearchCmd) -> Result<()> {
    let text = resolve_input(&cmd.text)?;
    let pattern = resolve_input(&cmd.pattern)?;
    let positions = rabin_karp::search(&text, &pattern);
    if positions.is_empty() {
        println!("no matches");
    } else {
        let rendered: Vec<String> = positions.iter().map(ToString::to_string).collect();
        println!("{}", rendered.join(" "));
    }
    Ok(())
}
