//! Rabin–Karp substring search over raw bytes.
//!
//! Base-256 polynomial rolling hash with a small fixed prime modulus (9973).
//! At that modulus hash collisions are routine, so every hash hit is
//! confirmed by a direct byte comparison before its offset is reported.

const MODULUS: u64 = 9973;
const BASE: u64 = 256;

/// Find all start offsets of `pattern` in `text`, in ascending order.
///
/// An empty pattern, or a pattern longer than the text, yields no matches.
/// Expected O(n+m); collision-heavy inputs degrade toward O(n·m) through the
/// verification step.
pub fn search(text: &str, pattern: &str) -> Vec<usize> {
    let text = text.as_bytes();
    let pattern = pattern.as_bytes();
    let mut positions = Vec::new();
    if pattern.is_empty() || pattern.len() > text.len() {
        return positions;
    }
    let m = pattern.len();

    // Hash of the pattern and of the first text window, plus the factor
    // removing the leaving byte: BASE^(m-1) mod MODULUS.
    let mut pattern_hash = u64::from(pattern[0]) % MODULUS;
    let mut window_hash = u64::from(text[0]) % MODULUS;
    let mut leading_factor = 1u64;
    for i in 1..m {
        pattern_hash = (pattern_hash * BASE + u64::from(pattern[i])) % MODULUS;
        window_hash = (window_hash * BASE + u64::from(text[i])) % MODULUS;
        leading_factor = leading_factor * BASE % MODULUS;
    }

    let last = text.len() - m;
    for pos in 0..=last {
        if pattern_hash == window_hash && &text[pos..pos + m] == pattern {
            positions.push(pos);
        }
        if pos == last {
            break;
        }
        // Slide: drop text[pos], append text[pos + m]. Adding the modulus
        // before the subtraction keeps the intermediate value non-negative.
        window_hash =
            (window_hash + MODULUS - u64::from(text[pos]) * leading_factor % MODULUS) % MODULUS;
        window_hash = (window_hash * BASE + u64::from(text[pos + m])) % MODULUS;
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn finds_all_occurrences_ascending() {
        assert_eq!(search("abcdeabcde", "cde"), vec![2, 7]);
    }

    #[test]
    fn no_occurrence_yields_empty() {
        assert!(search("abcde", "xyz").is_empty());
    }

    #[test]
    fn overlapping_occurrences_are_all_reported() {
        assert_eq!(search("aaaa", "aa"), vec![0, 1, 2]);
    }

    #[test]
    fn degenerate_patterns_yield_empty() {
        assert!(search("abc", "").is_empty());
        assert!(search("ab", "abc").is_empty());
        assert!(search("", "").is_empty());
    }

    #[test]
    fn whole_text_matches_itself() {
        assert_eq!(search("ACGT", "ACGT"), vec![0]);
    }

    #[test]
    fn agrees_with_naive_scan_on_random_dna() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let text: String = (0..200)
                .map(|_| b"ACGT"[rng.gen_range(0..4)] as char)
                .collect();
            let pattern: String = (0..3)
                .map(|_| b"ACGT"[rng.gen_range(0..4)] as char)
                .collect();
            let naive: Vec<usize> = text
                .as_bytes()
                .windows(pattern.len())
                .enumerate()
                .filter(|(_, w)| *w == pattern.as_bytes())
                .map(|(i, _)| i)
                .collect();
            assert_eq!(search(&text, &pattern), naive);
        }
    }

    #[test]
    fn offsets_are_byte_positions_in_multibyte_text() {
        // "é" is C3 A9; it starts at byte 1 of "héllo".
        assert_eq!(search("héllo", "é"), vec![1]);
    }

    #[test]
    fn repeated_calls_are_identical() {
        assert_eq!(search("abcdeabcde", "cde"), search("abcdeabcde", "cde"));
    }
}
