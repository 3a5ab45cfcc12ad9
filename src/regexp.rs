//! Whole-string matching for a restricted regular-expression dialect.
//!
//! The dialect is literals, `.` for any character, and the postfix
//! quantifiers `*`, `+`, `?` — no alternation, grouping, anchors, or
//! character classes. Matching is a backward dynamic program over
//! (text position, pattern position). The transition rules are part of the
//! dialect's contract and differ from POSIX/PCRE on purpose:
//! `*` consumes greedily on its own without a preceding literal, and a
//! bare `+` (leading or doubled) can never match.

/// Decide whether `pattern` matches all of `text`.
///
/// An empty pattern matches only the empty text. O(|text|·|pattern|) time
/// and space.
pub fn is_match(text: &str, pattern: &str) -> bool {
    if pattern.is_empty() {
        return text.is_empty();
    }
    let t = text.as_bytes();
    let p = pattern.as_bytes();
    let n = t.len();
    let m = p.len();

    // dp[i][j]: pattern suffix from j matches text suffix from i.
    let mut dp = vec![vec![false; m + 1]; n + 1];
    dp[n][m] = true;
    for i in (0..=n).rev() {
        for j in (0..m).rev() {
            let first_match = i < n && (p[j] == b'.' || p[j] == t[i]);
            dp[i][j] = if p[j] == b'*' {
                dp[i][j + 1] || (i < n && dp[i + 1][j])
            } else if j + 1 < m && p[j + 1] == b'+' {
                dp[i][j + 2] || (first_match && dp[i + 1][j])
            } else if p[j] == b'?' {
                dp[i][j + 1] || (first_match && dp[i + 1][j + 1])
            } else if p[j] == b'+' {
                false
            } else {
                first_match && dp[i + 1][j + 1]
            };
        }
    }
    dp[0][0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pattern_matches_only_empty_text() {
        assert!(is_match("", ""));
        assert!(!is_match("abc", ""));
    }

    #[test]
    fn literal_match() {
        assert!(is_match("ab", "ab"));
        assert!(!is_match("ab", "ac"));
        assert!(!is_match("ab", "abc"));
    }

    #[test]
    fn dot_matches_any_single_character() {
        assert!(is_match("abc", "a.c"));
        assert!(!is_match("ac", "a.c"));
    }

    #[test]
    fn star_consumes_zero_or_more() {
        assert!(is_match("aab", "a*b"));
        // A lone star is a free-standing wildcard repeater.
        assert!(is_match("xyz", "*"));
        assert!(is_match("", "*"));
        // Quantifiers do not bind the preceding literal: the `a` in `a*`
        // must still consume one character.
        assert!(!is_match("", "a*"));
    }

    #[test]
    fn plus_requires_at_least_one() {
        assert!(is_match("aab", "a+b"));
        assert!(!is_match("b", "a+b"));
    }

    #[test]
    fn question_mark_is_optional() {
        assert!(is_match("abc", "a?bc"));
        assert!(is_match("bc", "a?bc"));
    }

    #[test]
    fn quantifiers_combine() {
        assert!(is_match("aaabcc", "a+b.c*"));
    }

    #[test]
    fn bare_plus_never_matches() {
        assert!(!is_match("a", "+"));
        assert!(!is_match("aaa", "a++"));
    }
}
