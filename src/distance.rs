//! Levenshtein edit distance.
//!
//! Fills a full `(m+1) × (n+1)` [`FixedGrid2D`] table where cell `(i, j)`
//! holds the distance between the first `i` source elements and the first
//! `j` target elements. Each cell is written exactly once.

use tracing::trace;

use crate::grid::FixedGrid2D;

/// Compute the Levenshtein edit distance between two strings.
///
/// Returns the minimum number of single-character edits (insertions,
/// deletions, substitutions) required to transform `source` into `target`.
/// Characters are Unicode scalar values.
pub fn distance(source: &str, target: &str) -> usize {
    // Sizing and indexed comparison must use the same decomposition.
    let source_chars: Vec<char> = source.chars().collect();
    let target_chars: Vec<char> = target.chars().collect();
    distance_by(&source_chars, &target_chars)
}

/// Compute the edit distance between two sequences of comparable elements.
pub fn distance_by<T: PartialEq>(source: &[T], target: &[T]) -> usize {
    let m = source.len();
    let n = target.len();

    if n == 0 {
        trace!(m, n, "empty target, distance is source length");
        return m;
    }
    if m == 0 {
        trace!(m, n, "empty source, distance is target length");
        return n;
    }

    let mut grid = FixedGrid2D::new(m + 1, n + 1, 0usize);

    for i in 1..=m {
        grid.set(i, 0, i);
    }
    for j in 1..=n {
        grid.set(0, j, j);
    }

    for j in 1..=n {
        for i in 1..=m {
            let cost = usize::from(source[i - 1] != target[j - 1]);
            let value = (grid.get(i - 1, j) + 1) // deletion
                .min(grid.get(i, j - 1) + 1) // insertion
                .min(grid.get(i - 1, j - 1) + cost); // substitution
            grid.set(i, j, value);
        }
    }

    let distance = grid.get(m, n);
    trace!(m, n, distance, "levenshtein table filled");
    distance
}

/// Edit distance scaled by the longer string's char count and subtracted from one.
///
/// Two empty strings score `1.0`; strings sharing no aligned characters score `0.0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    let dist = distance(a, b);
    1.0 - (dist as f64 / max_len as f64)
}

/// Method-call form of [`distance`] for string slices.
pub trait LevenshteinExt {
    fn levenshtein_distance(&self, target: &str) -> usize;
}

impl LevenshteinExt for str {
    fn levenshtein_distance(&self, target: &str) -> usize {
        distance(self, target)
    }
}
