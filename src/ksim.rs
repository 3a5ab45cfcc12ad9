//! k-similarity: minimum swaps turning one string into an anagram of it.
//!
//! Backtracking search over index-pair swaps. At the first mismatched
//! position the candidate swaps are restricted to positions that are
//! themselves mismatched (a swap that disturbs an already-correct position
//! is never needed), and a swap that fixes two positions at once is taken
//! greedily without exploring alternatives — such a swap is never worse
//! than any other, so the pruning preserves optimality.
//!
//! Branching is exponential in the number of unresolved mismatch cycles;
//! this is inherent to the problem and the function is intended for short
//! inputs. Recursion depth is bounded by the string length (one frame per
//! fixed position).

/// Minimum number of character swaps transforming `a` into `b`.
///
/// Returns `None` when the strings are not anagrams of each other (unequal
/// lengths or differing character multisets). The count is 0 exactly when
/// `a == b`.
pub fn k_similarity(a: &str, b: &str) -> Option<u32> {
    if !anagrams(a.as_bytes(), b.as_bytes()) {
        return None;
    }
    let mut work = a.as_bytes().to_vec();
    Some(swaps_from(&mut work, b.as_bytes(), 0))
}

fn anagrams(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut freq_a = [0u32; 256];
    let mut freq_b = [0u32; 256];
    for i in 0..a.len() {
        freq_a[a[i] as usize] += 1;
        freq_b[b[i] as usize] += 1;
    }
    freq_a == freq_b
}

/// Count swaps for the suffix of `work` from `start`, leaving `work`
/// unchanged on return. Positions before `start` already match `target`.
fn swaps_from(work: &mut [u8], target: &[u8], start: usize) -> u32 {
    let len = work.len();
    let Some(i) = (start..len).find(|&i| work[i] != target[i]) else {
        return 0;
    };

    let mut candidates = Vec::new();
    for k in i + 1..len {
        if work[k] == target[i] && work[k] != target[k] {
            candidates.push(k);
            if work[i] == target[k] {
                // Fixes both i and k at once; take it and stop branching.
                work.swap(i, k);
                let rest = swaps_from(work, target, i + 1);
                work.swap(i, k);
                return 1 + rest;
            }
        }
    }

    // Candidates are never empty here: b has one more occurrence of
    // target[i] in the suffix than is already placed correctly in work.
    let mut best = (len - i - 1) as u32;
    for k in candidates {
        work.swap(i, k);
        best = best.min(1 + swaps_from(work, target, i + 1));
        work.swap(i, k);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_need_no_swaps() {
        assert_eq!(k_similarity("listen", "listen"), Some(0));
    }

    #[test]
    fn single_swap() {
        assert_eq!(k_similarity("listen", "nistel"), Some(1));
        assert_eq!(k_similarity("ab", "ba"), Some(1));
    }

    #[test]
    fn rotation_of_three() {
        // abc -> bca is a 3-cycle: two swaps.
        assert_eq!(k_similarity("abc", "bca"), Some(2));
    }

    #[test]
    fn multiple_independent_swaps() {
        assert_eq!(k_similarity("abcd", "badc"), Some(2));
    }

    #[test]
    fn non_anagrams_are_not_comparable() {
        assert_eq!(k_similarity("hello", "world"), None);
        assert_eq!(k_similarity("ab", "abc"), None);
        assert_eq!(k_similarity("aab", "abb"), None);
    }

    #[test]
    fn empty_strings_are_trivially_similar() {
        assert_eq!(k_similarity("", ""), Some(0));
    }

    #[test]
    fn zero_iff_equal() {
        assert_eq!(k_similarity("anagram", "nagaram").map(|n| n == 0), Some(false));
    }

    #[test]
    fn inputs_are_untouched_across_calls() {
        let a = "aabbcc";
        let b = "ccbbaa";
        let first = k_similarity(a, b);
        assert_eq!(first, k_similarity(a, b));
    }
}
