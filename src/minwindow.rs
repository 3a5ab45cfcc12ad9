//! Minimum window substring covering a pattern's character multiset.
//!
//! Two-pointer sliding window over a per-byte need table. The right pointer
//! grows the window until every pattern character is covered with its full
//! multiplicity, then the left pointer contracts it as far as coverage
//! allows, recording each new shortest valid window. Single pass,
//! O(|text| + |pattern|).

/// Shortest substring of `text` containing every character of `pattern`
/// (with multiplicity). Returns an empty string when no such window exists,
/// including when the pattern is empty or longer than the text.
///
/// The window is selected over raw bytes. A best window whose edges split a
/// multi-byte UTF-8 character is returned lossily, with the broken bytes as
/// replacement characters.
pub fn min_window(text: &str, pattern: &str) -> String {
    if pattern.is_empty() || pattern.len() > text.len() {
        return String::new();
    }
    let t = text.as_bytes();

    let mut need = [0i32; 256];
    for &c in pattern.as_bytes() {
        need[c as usize] += 1;
    }
    // Required-character occurrences not yet inside the window.
    let mut missing = pattern.len();
    let mut best: Option<(usize, usize)> = None; // (start, len)
    let mut left = 0usize;

    for right in 0..t.len() {
        let entering = t[right] as usize;
        if need[entering] > 0 {
            missing -= 1;
        }
        need[entering] -= 1;

        while missing == 0 {
            let len = right + 1 - left;
            if best.map_or(true, |(_, l)| len < l) {
                best = Some((left, len));
            }
            let leaving = t[left] as usize;
            if need[leaving] == 0 {
                // This character becomes required again once expelled.
                missing += 1;
            }
            need[leaving] += 1;
            left += 1;
        }
    }

    match best {
        // Slice the bytes, not the str: the best byte window may start or
        // end inside a multi-byte character.
        Some((start, len)) => String::from_utf8_lossy(&t[start..start + len]).into_owned(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_shortest_covering_window() {
        assert_eq!(min_window("ADOBECODEBANC", "ABC"), "BANC");
    }

    #[test]
    fn absent_characters_mean_no_window() {
        assert_eq!(min_window("ADOBECODEBANC", "XYZ"), "");
    }

    #[test]
    fn text_equal_to_pattern_is_its_own_window() {
        assert_eq!(min_window("hello", "hello"), "hello");
    }

    #[test]
    fn degenerate_inputs_yield_empty() {
        assert_eq!(min_window("", "ABC"), "");
        assert_eq!(min_window("ADOBECODEBANC", ""), "");
        assert_eq!(min_window("AB", "ABC"), "");
    }

    #[test]
    fn multiplicity_is_respected() {
        // Needs two 'A's, so the single-A prefix windows do not qualify.
        assert_eq!(min_window("AXBAY", "AAB"), "AXBA");
        assert_eq!(min_window("aa", "aa"), "aa");
    }

    #[test]
    fn multibyte_text_is_scanned_bytewise() {
        // Pattern bytes C3 A9; the shortest covering byte window of
        // "héé" (68 C3 A9 C3 A9) is a whole character.
        assert_eq!(min_window("héé", "é"), "é");
    }

    #[test]
    fn window_splitting_a_character_is_returned_lossily() {
        // Text bytes C2 A9 C3 A9, pattern bytes C3 A9: the shortest byte
        // window is [1, 3), which cuts both characters in half. The broken
        // bytes come back as replacement characters instead of panicking.
        assert_eq!(min_window("\u{a9}\u{e9}", "\u{e9}"), "\u{fffd}\u{fffd}");
    }

    #[test]
    fn window_is_minimal() {
        let w = min_window("ADOBECODEBANC", "ABC");
        // Every strictly shorter substring misses at least one character.
        let text = "ADOBECODEBANC";
        for start in 0..text.len() {
            for end in start..text.len().min(start + w.len() - 1) {
                let sub = &text[start..end + 1];
                let covers = ['A', 'B', 'C']
                    .iter()
                    .all(|&c| sub.chars().filter(|&x| x == c).count() >= 1);
                assert!(!covers, "shorter window {sub} covers the pattern");
            }
        }
    }
}
