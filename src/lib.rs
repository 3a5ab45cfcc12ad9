//! # dnalyzer
//!
//! Classic sequence/string analysis algorithms as pure library functions:
//!
//! - [`rabin_karp::search`] — all occurrences of a pattern in a text by
//!   rolling hash with verification.
//! - [`needleman::align`] — Needleman–Wunsch global alignment with linear
//!   match/mismatch/gap scoring and traceback.
//! - [`regexp::is_match`] — whole-string matching for a restricted regex
//!   dialect (literals, `.`, postfix `*` `+` `?`).
//! - [`ksim::k_similarity`] — minimum swaps between anagram strings.
//! - [`minwindow::min_window`] — shortest substring covering a pattern's
//!   character multiset.
//!
//! Each function takes all of its inputs per call and keeps no state between
//! calls; none performs I/O. Inputs are treated as raw byte/character
//! sequences (no Unicode segmentation). The `dnalyzer` binary wraps each
//! algorithm in a subcommand that loads inputs from arguments or small
//! token files and prints a plain-text report.
//!
//! ### Example
//! ```
//! use dnalyzer::{align, AlignScores, search};
//!
//! let aln = align("AGTACG", "AGCTCG", &AlignScores::default());
//! assert_eq!(aln.score, 6);
//! assert_eq!(aln.align_a, "AG-TACG");
//!
//! assert_eq!(search("abcdeabcde", "cde"), vec![2, 7]);
//! ```

pub mod common;
pub mod ksim;
pub mod minwindow;
pub mod needleman;
pub mod rabin_karp;
pub mod regexp;

pub use crate::common::{read_align_job, read_pair, resolve_input, DnalyzerError};
pub use crate::ksim::k_similarity;
pub use crate::minwindow::min_window;
pub use crate::needleman::{align, AlignScores, Alignment};
pub use crate::rabin_karp::search;
pub use crate::regexp::is_match;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engines_are_independent_and_repeatable() {
        // Interleaved calls across engines do not disturb one another.
        let positions = search("ADOBECODEBANC", "BANC");
        assert!(is_match("aab", "a*b"));
        assert_eq!(min_window("ADOBECODEBANC", "ABC"), "BANC");
        assert_eq!(k_similarity("listen", "nistel"), Some(1));
        assert_eq!(search("ADOBECODEBANC", "BANC"), positions);
    }
}
