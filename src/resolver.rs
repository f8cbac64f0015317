//! Column Resolver
//!
//! The full resolution pipeline: tag the sentence, keep noun/proper-noun/
//! verb tokens, find at most one vocabulary candidate per token, score it
//! against the full token text, then rank by descending similarity and
//! drop repeated column names.

use crate::error::Result;
use crate::matcher::CandidateMatcher;
use crate::similarity::ratio;
use crate::tagger::{tag_model, PosTag};
use crate::vocabulary::Vocabulary;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tags that survive the token filter. Everything else is discarded
/// before matching.
pub const RETAINED_TAGS: [PosTag; 3] = [PosTag::Noun, PosTag::ProperNoun, PosTag::Verb];

/// A matched column with the similarity that put it there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Canonical (original-case) column name.
    pub column: String,
    /// Similarity between the full originating token and the lower-cased
    /// column name.
    pub score: f64,
}

/// Resolves sentences to ordered, duplicate-free column-name lists.
pub struct ColumnResolver {
    vocabulary: Vocabulary,
    matcher: CandidateMatcher,
}

impl Default for ColumnResolver {
    fn default() -> Self {
        Self::new(Vocabulary::default())
    }
}

impl ColumnResolver {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            matcher: CandidateMatcher::default(),
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Resolve a sentence (named entities already stripped) to the column
    /// names it most likely refers to, best match first.
    ///
    /// An empty list is a valid outcome: it means no retained token came
    /// close enough to any column name.
    pub fn resolve(&self, sentence: &str) -> Result<Vec<String>> {
        let ranked = self.ranked_candidates(sentence)?;
        Ok(ranked.into_iter().map(|c| c.column).unique().collect())
    }

    /// Ranked candidate list before deduplication, in descending score
    /// order with ties in token-processing order.
    pub fn ranked_candidates(&self, sentence: &str) -> Result<Vec<Candidate>> {
        let model = tag_model()?;
        let tokens = model.tag(sentence);

        let mut candidates: Vec<Candidate> = Vec::new();
        for token in tokens
            .into_iter()
            .filter(|t| RETAINED_TAGS.contains(&t.tag))
        {
            let key = self.matcher.match_key(&token.text);
            let Some((entry, key_score)) = self.matcher.closest(&key, self.vocabulary.lowered())
            else {
                debug!(token = %token.text, "no vocabulary entry above cutoff");
                continue;
            };
            // The cutoff applies to the (possibly truncated) key; the
            // recorded score always uses the full token. The two values
            // can disagree, and both sides of that are required behavior.
            let score = ratio(&token.text, entry);
            debug!(token = %token.text, %key, entry, key_score, score, "candidate");
            if let Some(canonical) = self.vocabulary.canonical_for(entry) {
                candidates.push(Candidate {
                    column: canonical.to_string(),
                    score,
                });
            }
        }

        // Stable sort: equal scores keep token-processing order.
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
        Ok(candidates)
    }
}
