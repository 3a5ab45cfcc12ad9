//! Shared helpers: the crate error type and input loading.
//!
//! Every algorithm in this crate is a pure function over fully materialized
//! strings. The loaders here normalize the two input styles the CLI accepts —
//! a literal value or a path to a file holding it — and parse the small
//! whitespace-token job files used for paired inputs and alignment jobs.

use std::fs;
use std::path::Path;

use crate::needleman::AlignScores;

/// Errors that can be returned by the input loaders in this crate.
#[derive(thiserror::Error, Debug)]
pub enum DnalyzerError {
    /// Reading an input file failed.
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// A token file did not contain the expected fields.
    #[error("malformed input file {path}: expected {expected}")]
    MalformedFile { path: String, expected: &'static str },
}

fn read_file(path: &Path) -> Result<String, DnalyzerError> {
    fs::read_to_string(path).map_err(|source| DnalyzerError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Resolve an input that is either a literal value or a path to a file.
///
/// If `input` names an existing file its contents are used (with trailing
/// newlines trimmed); otherwise the string itself is the value.
pub fn resolve_input(input: &str) -> Result<String, DnalyzerError> {
    let path = Path::new(input);
    if path.is_file() {
        Ok(read_file(path)?
            .trim_end_matches(|c| c == '\n' || c == '\r')
            .to_string())
    } else {
        Ok(input.to_string())
    }
}

/// Read the first two whitespace-separated tokens of a file.
///
/// This is the job-file format for the paired-input algorithms: a string
/// followed by a pattern (or expression).
pub fn read_pair(path: &Path) -> Result<(String, String), DnalyzerError> {
    let text = read_file(path)?;
    let mut tokens = text.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(a), Some(b)) => Ok((a.to_string(), b.to_string())),
        _ => Err(DnalyzerError::MalformedFile {
            path: path.display().to_string(),
            expected: "two whitespace-separated tokens",
        }),
    }
}

/// Read an alignment job file: `match mismatch gap seq_a seq_b`.
pub fn read_align_job(path: &Path) -> Result<(AlignScores, String, String), DnalyzerError> {
    let text = read_file(path)?;
    let malformed = || DnalyzerError::MalformedFile {
        path: path.display().to_string(),
        expected: "five tokens: match mismatch gap seq_a seq_b",
    };
    let mut tokens = text.split_whitespace();
    let int = |tokens: &mut std::str::SplitWhitespace| -> Result<i32, DnalyzerError> {
        tokens
            .next()
            .and_then(|t| t.parse().ok())
            .ok_or_else(|| malformed())
    };
    let scores = AlignScores {
        match_score: int(&mut tokens)?,
        mismatch: int(&mut tokens)?,
        gap: int(&mut tokens)?,
    };
    let seq_a = tokens.next().ok_or_else(|| malformed())?.to_string();
    let seq_b = tokens.next().ok_or_else(|| malformed())?.to_string();
    Ok((scores, seq_a, seq_b))
}
