//! Candidate Matcher
//!
//! Approximate-match search of a token's match key against the lower-cased
//! column vocabulary. Each token yields at most one candidate entry,
//! subject to a similarity cutoff.

use crate::similarity::ratio;

/// Minimum similarity for a vocabulary entry to count as a match.
pub const SIMILARITY_CUTOFF: f64 = 0.55;

/// Tokens longer than this are matched by a truncated key.
pub const LONG_TOKEN_LEN: usize = 8;

/// Length of the truncated match key for long tokens.
pub const MATCH_KEY_LEN: usize = 4;

/// Matcher holding the similarity cutoff.
#[derive(Debug, Clone)]
pub struct CandidateMatcher {
    pub cutoff: f64,
}

impl Default for CandidateMatcher {
    fn default() -> Self {
        Self {
            cutoff: SIMILARITY_CUTOFF,
        }
    }
}

impl CandidateMatcher {
    pub fn new(cutoff: f64) -> Self {
        Self { cutoff }
    }

    /// Match key for a token: tokens longer than [`LONG_TOKEN_LEN`]
    /// characters are searched by their first [`MATCH_KEY_LEN`] characters,
    /// shorter tokens by their full text, lower-cased either way.
    ///
    /// Long words match on prefix only. DESIGN.md records the
    /// false-positive trade-off; the rule itself must not change.
    pub fn match_key(&self, token: &str) -> String {
        let lowered = token.to_lowercase();
        if lowered.chars().count() > LONG_TOKEN_LEN {
            lowered.chars().take(MATCH_KEY_LEN).collect()
        } else {
            lowered
        }
    }

    /// Entry of `vocabulary` most similar to `key`, with its key
    /// similarity, or `None` if nothing clears the cutoff.
    ///
    /// Ties at the maximum similarity resolve to the earliest entry in
    /// vocabulary order; the strict comparison below is that rule, not an
    /// accident of iteration.
    pub fn closest<'a>(&self, key: &str, vocabulary: &'a [String]) -> Option<(&'a str, f64)> {
        let mut best: Option<(&'a str, f64)> = None;
        for entry in vocabulary {
            let score = ratio(key, entry);
            if score < self.cutoff {
                continue;
            }
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((entry.as_str(), score)),
            }
        }
        best
    }
}
