//! String similarity
//!
//! Normalized matching-block similarity (Ratcliff/Obershelp): the ratio is
//! 2*M / T, where M is the total length of matching blocks found by
//! recursive longest-common-substring decomposition and T is the combined
//! length of both strings. The candidate cutoff used by the matcher was
//! tuned against this exact metric, so a generic edit distance is not a
//! drop-in replacement here.

use std::collections::HashMap;

/// Similarity ratio between two strings, in [0.0, 1.0].
///
/// Two empty strings are considered identical (ratio 1.0).
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matches = match_total(&a, &b, 0, a.len(), 0, b.len());
    2.0 * matches as f64 / total as f64
}

/// Total length of matching blocks in a[alo..ahi] vs b[blo..bhi]:
/// the longest common block plus, recursively, the matches strictly to
/// its left and strictly to its right.
fn match_total(a: &[char], b: &[char], alo: usize, ahi: usize, blo: usize, bhi: usize) -> usize {
    let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
    if size == 0 {
        return 0;
    }
    size + match_total(a, b, alo, i, blo, j) + match_total(a, b, i + size, ahi, j + size, bhi)
}

/// Longest matching block in a[alo..ahi] vs b[blo..bhi].
///
/// Returns (start in a, start in b, length). Ties resolve to the
/// earliest position in `a`, then the earliest in `b`, which keeps the
/// decomposition deterministic.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut besti = alo;
    let mut bestj = blo;
    let mut bestsize = 0;

    // j2len[j] = length of the longest run of matches ending at a[i], b[j]
    let mut j2len: HashMap<usize, usize> = HashMap::new();
    for i in alo..ahi {
        let mut newj2len: HashMap<usize, usize> = HashMap::new();
        for j in blo..bhi {
            if b[j] == a[i] {
                let run = j
                    .checked_sub(1)
                    .and_then(|prev| j2len.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                newj2len.insert(j, run);
                if run > bestsize {
                    besti = i + 1 - run;
                    bestj = j + 1 - run;
                    bestsize = run;
                }
            }
        }
        j2len = newj2len;
    }

    (besti, bestj, bestsize)
}
