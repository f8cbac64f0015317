//! Linguistic Tagger
//!
//! Turns a sentence into a sequence of (word, part-of-speech) pairs. The
//! tag model is a closed-class lexicon plus morphological suffix rules,
//! embedded in the binary and parsed once per process. Tagging the same
//! input is stable within a process.

use crate::error::{LinkerError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

/// Coarse part-of-speech tags. The pipeline only branches on noun,
/// proper noun, and verb; the remaining tags exist so that closed-class
/// words are positively identified rather than falling through to the
/// default-noun rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Noun,
    ProperNoun,
    Verb,
    /// Auxiliary/modal verbs ("is", "did", "would"). Kept distinct from
    /// `Verb`: auxiliaries carry no content and must not reach the matcher.
    Auxiliary,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Numeral,
    Other,
}

impl PosTag {
    fn parse(code: &str) -> Option<Self> {
        match code {
            "NOUN" => Some(Self::Noun),
            "PROPN" => Some(Self::ProperNoun),
            "VERB" => Some(Self::Verb),
            "AUX" => Some(Self::Auxiliary),
            "ADJ" => Some(Self::Adjective),
            "ADV" => Some(Self::Adverb),
            "PRON" => Some(Self::Pronoun),
            "DET" => Some(Self::Determiner),
            "ADP" => Some(Self::Preposition),
            "CONJ" => Some(Self::Conjunction),
            "NUM" => Some(Self::Numeral),
            "OTHER" => Some(Self::Other),
            _ => None,
        }
    }
}

/// A tagged word. Lives only within one resolution call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub tag: PosTag,
}

/// Embedded tag lexicon, one `word<TAB>TAG` entry per line.
const LEXICON_TSV: &str = include_str!("data/lexicon.tsv");

lazy_static! {
    static ref TAG_MODEL: std::result::Result<TagModel, String> = TagModel::load();
}

/// The process-wide tag model.
///
/// Loaded lazily on first use and immutable afterwards, so it is safe to
/// share across threads. A load failure is returned from every access
/// rather than retried; the caller decides what to do with a process that
/// has no usable model.
pub fn tag_model() -> Result<&'static TagModel> {
    TAG_MODEL
        .as_ref()
        .map_err(|e| LinkerError::Model(e.clone()))
}

/// Lexicon-plus-suffix-rule part-of-speech model.
pub struct TagModel {
    lexicon: HashMap<String, PosTag>,
    token_re: Regex,
}

impl TagModel {
    fn load() -> std::result::Result<Self, String> {
        let lexicon = parse_lexicon(LEXICON_TSV)?;
        let token_re = Regex::new(r"[a-z0-9]+(?:'[a-z]+)?")
            .map_err(|e| format!("invalid token pattern: {}", e))?;
        Ok(Self { lexicon, token_re })
    }

    /// Tag a sentence. Input is lower-cased before tagging.
    pub fn tag(&self, sentence: &str) -> Vec<Token> {
        let lowered = sentence.to_lowercase();
        self.token_re
            .find_iter(&lowered)
            .map(|m| {
                let word = m.as_str();
                Token {
                    text: word.to_string(),
                    tag: self.tag_word(word),
                }
            })
            .collect()
    }

    fn tag_word(&self, word: &str) -> PosTag {
        if let Some(tag) = self.lexicon.get(word) {
            return *tag;
        }
        if word.chars().all(|c| c.is_ascii_digit()) {
            return PosTag::Numeral;
        }
        // Morphological fallbacks for open-class words.
        if word.len() > 4 && word.ends_with("ly") {
            return PosTag::Adverb;
        }
        if word.len() > 4 && word.ends_with("ing") {
            return PosTag::Verb;
        }
        if word.len() > 3 && word.ends_with("ed") {
            return PosTag::Verb;
        }
        // Unknown content words read as nouns, which is what a statistical
        // tagger overwhelmingly assigns them in this kind of query text.
        PosTag::Noun
    }
}

fn parse_lexicon(data: &str) -> std::result::Result<HashMap<String, PosTag>, String> {
    let mut lexicon = HashMap::new();
    for (line_no, line) in data.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (word, code) = line
            .split_once('\t')
            .ok_or_else(|| format!("lexicon line {}: expected word<TAB>tag", line_no + 1))?;
        let tag = PosTag::parse(code.trim())
            .ok_or_else(|| format!("lexicon line {}: unknown tag {:?}", line_no + 1, code))?;
        lexicon.insert(word.trim().to_string(), tag);
    }
    if lexicon.is_empty() {
        return Err("lexicon is empty".to_string());
    }
    Ok(lexicon)
}
