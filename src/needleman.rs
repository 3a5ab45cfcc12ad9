//! Needleman–Wunsch global alignment with linear gap scoring.
//!
//! Fills the full (|a|+1)×(|b|+1) score matrix, then walks one optimal
//! traceback from the bottom-right corner. Where several moves reproduce a
//! cell's value, the move whose predecessor cell scores highest wins, and
//! remaining ties resolve diagonal, then up, then left. Traceback stops as
//! soon as either sequence is fully consumed: a prefix left over on the
//! other side is not emitted as gap columns, so the aligned strings cover
//! the traceback path only.

/// Scoring triple for [`align`]. Any signed values are accepted.
#[derive(Clone, Copy, Debug)]
pub struct AlignScores {
    /// Score added when aligned characters are identical.
    pub match_score: i32,
    /// Score added when aligned characters differ.
    pub mismatch: i32,
    /// Score added per gap column.
    pub gap: i32,
}

impl Default for AlignScores {
    fn default() -> Self {
        Self { match_score: 2, mismatch: -1, gap: -2 }
    }
}

/// A global alignment of two sequences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alignment {
    /// Score of the optimal alignment (bottom-right matrix cell).
    pub score: i32,
    /// Aligned form of A, gaps as `-`. Same length as `align_b`.
    pub align_a: String,
    /// Aligned form of B, gaps as `-`.
    pub align_b: String,
}

impl Alignment {
    /// Marker row for report output: `|` under identical aligned characters,
    /// a space under mismatches and gaps.
    pub fn markers(&self) -> String {
        self.align_a
            .chars()
            .zip(self.align_b.chars())
            .map(|(x, y)| if x == y && x != '-' { '|' } else { ' ' })
            .collect()
    }
}

/// Compute one optimal global alignment of `a` and `b` under `scores`.
///
/// O(|a|·|b|) time and space. Total over all inputs; aligning against an
/// empty sequence yields empty aligned strings and a pure-gap score.
pub fn align(a: &str, b: &str, scores: &AlignScores) -> Alignment {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let n = a.len();
    let m = b.len();
    let pair = |x: char, y: char| if x == y { scores.match_score } else { scores.mismatch };

    let mut matrix = vec![vec![0i32; m + 1]; n + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = scores.gap * i as i32;
    }
    for j in 0..=m {
        matrix[0][j] = scores.gap * j as i32;
    }
    for i in 1..=n {
        for j in 1..=m {
            let left = matrix[i][j - 1] + scores.gap;
            let up = matrix[i - 1][j] + scores.gap;
            let diag = matrix[i - 1][j - 1] + pair(a[i - 1], b[j - 1]);
            matrix[i][j] = left.max(up).max(diag);
        }
    }

    let mut align_a: Vec<char> = Vec::new();
    let mut align_b: Vec<char> = Vec::new();
    let mut i = n;
    let mut j = m;
    while i > 0 && j > 0 {
        let left = matrix[i][j - 1] + scores.gap;
        let up = matrix[i - 1][j] + scores.gap;
        let diag = matrix[i - 1][j - 1] + pair(a[i - 1], b[j - 1]);

        // Of the moves that reproduce this cell, follow the one whose
        // predecessor cell scores highest; diagonal wins remaining ties.
        let mut predecessors = Vec::new();
        if matrix[i][j] == left {
            predecessors.push(matrix[i][j - 1]);
        }
        if matrix[i][j] == up {
            predecessors.push(matrix[i - 1][j]);
        }
        if matrix[i][j] == diag {
            predecessors.push(matrix[i - 1][j - 1]);
        }
        let choice = *predecessors.iter().max().unwrap();

        if choice == matrix[i - 1][j - 1] {
            align_a.push(a[i - 1]);
            align_b.push(b[j - 1]);
            i -= 1;
            j -= 1;
        } else if choice == matrix[i - 1][j] {
            align_a.push(a[i - 1]);
            align_b.push('-');
            i -= 1;
        } else {
            align_a.push('-');
            align_b.push(b[j - 1]);
            j -= 1;
        }
    }
    align_a.reverse();
    align_b.reverse();
    Alignment {
        score: matrix[n][m],
        align_a: align_a.into_iter().collect(),
        align_b: align_b.into_iter().collect(),
    }
}
