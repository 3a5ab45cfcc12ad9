use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use dnalyzer::{align, read_align_job, resolve_input, AlignScores};

/// Options for the `align` subcommand.
#[derive(Debug, Args)]
pub struct AlignCmd {
    /// First sequence, or a path to a file holding it.
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub seq_a: Option<String>,
    /// Second sequence, or a path to a file holding it.
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub seq_b: Option<String>,
    /// Job file with five tokens: `match mismatch gap seq_a seq_b`.
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,
    /// Score for identical aligned characters.
    #[arg(long, default_value_t = 2, allow_hyphen_values = true)]
    pub match_score: i32,
    /// Score for differing aligned characters.
    #[arg(long, default_value_t = -1, allow_hyphen_values = true)]
    pub mismatch: i32,
    /// Score per gap column.
    #[arg(long, default_value_t = -2, allow_hyphen_values = true)]
    pub gap: i32,
}

pub fn run(cmd: AlignCmd) -> Result<()> {
    let (scores, seq_a, seq_b) = match &cmd.file {
        Some(path) => {
            read_align_job(path).with_context(|| format!("load job {}", path.display()))?
        }
        None => {
            let scores = AlignScores {
                match_score: cmd.match_score,
                mismatch: cmd.mismatch,
                gap: cmd.gap,
            };
            let seq_a = resolve_input(cmd.seq_a.as_deref().unwrap_or_default())?;
            let seq_b = resolve_input(cmd.seq_b.as_deref().unwrap_or_default())?;
            (scores, seq_a, seq_b)
        }
    };

    let aln = align(&seq_a, &seq_b, &scores);
    println!("Score: {}", aln.score);
    println!("A {}", aln.align_a);
    println!("  {}", aln.markers());
    println!("B {}", aln.align_b);
    Ok(())
}
