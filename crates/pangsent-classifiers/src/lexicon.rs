//! Pangasinan sentiment lexicon
//!
//! Two ordered tables detect local-language sentiment before any translation
//! happens:
//! - expressions: multi-word idioms, matched by substring containment
//! - words: single words (and a few short phrases), matched on word boundaries
//!
//! Expressions are always consulted first. Within each table the entry
//! declared first wins.

use crate::config::LexiconConfig;
use crate::phrases::{PhraseEntry, PhraseMatcher};
use pangsent_core::{Result, Sentiment};
use regex::RegexSet;
use serde::{Deserialize, Serialize};

use Sentiment::{Negative, Neutral, Positive};

/// Built-in single-word table, in precedence order
const BUILTIN_WORDS: &[(&str, Sentiment)] = &[
    ("mabli", Positive),
    ("maong", Positive),
    ("masanten", Positive),
    ("maliket", Positive),
    ("salamat", Positive),
    ("makapaliket", Positive),
    ("mabulos", Positive),
    ("magayaga", Positive),
    ("masanti", Positive),
    ("marakep", Positive),
    ("maples", Positive),
    ("masantos", Positive),
    ("mauges", Negative),
    ("masakit", Negative),
    ("onsot", Negative),
    ("amta la", Negative),
    ("maermen", Negative),
    ("mabayag", Negative),
    ("anggapo", Negative),
    ("mainomay", Negative),
    ("makapabwesit", Negative),
];

/// Built-in expression table, in precedence order
const BUILTIN_EXPRESSIONS: &[(&str, Sentiment)] = &[
    ("anggapo so nakala", Negative),
    ("masakit so ulok", Negative),
    ("maong ya agew", Positive),
    ("mabayag so pila", Negative),
    ("masanten ya bulan", Positive),
    ("masakbay ka la", Neutral),
    ("maong so ginawam", Positive),
    ("maermen ak", Negative),
    ("maliket ak", Positive),
    ("salamat na dakel", Positive),
    ("makapabwesit so office u", Negative),
    ("masantos na kabwasan sikayo amin", Positive),
];

/// A local-language word mapped to a sentiment label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    #[serde(alias = "word")]
    pub surface_form: String,
    pub sentiment: Sentiment,
}

impl LexiconEntry {
    pub fn new(surface_form: impl Into<String>, sentiment: Sentiment) -> Self {
        Self {
            surface_form: surface_form.into().to_lowercase(),
            sentiment,
        }
    }
}

/// A local-language multi-word expression mapped to a sentiment label
pub type ExpressionEntry = PhraseEntry;

/// Which table produced a local match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Expression,
    Word,
}

/// A local-language cue found in the text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalMatch {
    pub sentiment: Sentiment,
    /// The table entry that matched (lower-cased)
    pub surface: String,
    pub kind: MatchKind,
}

/// Immutable Pangasinan lexicon, built once at startup and shared by reference
pub struct LocalLexicon {
    expressions: PhraseMatcher,
    words: Vec<LexiconEntry>,
    word_matcher: RegexSet,
}

impl LocalLexicon {
    /// Lexicon with the built-in tables only
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_expressions(), builtin_words())
    }

    /// Built-in tables followed by configured extras.
    ///
    /// Extras are declared after the built-ins, so built-in entries keep
    /// precedence on conflicting matches.
    pub fn from_config(config: &LexiconConfig) -> Result<Self> {
        let mut expressions = builtin_expressions();
        expressions.extend(config.extra_expressions.iter().cloned());

        let mut words = builtin_words();
        words.extend(config.extra_words.iter().cloned());

        Self::new(expressions, words)
    }

    /// Build a lexicon from explicit tables (declaration order is precedence)
    pub fn new(expressions: Vec<ExpressionEntry>, words: Vec<LexiconEntry>) -> Result<Self> {
        let words: Vec<LexiconEntry> = words
            .into_iter()
            .map(|w| LexiconEntry::new(w.surface_form.trim(), w.sentiment))
            .filter(|w| !w.surface_form.is_empty())
            .collect();

        let patterns = words
            .iter()
            .map(|w| format!(r"(?i)\b{}\b", regex::escape(&w.surface_form)));
        let word_matcher = RegexSet::new(patterns).map_err(|e| {
            pangsent_core::Error::classifier(format!("Failed to build lexicon matcher: {e}"))
        })?;

        Ok(Self {
            expressions: PhraseMatcher::new(expressions)?,
            words,
            word_matcher,
        })
    }

    /// Earliest-declared expression contained in the text
    pub fn match_expression(&self, text: &str) -> Option<LocalMatch> {
        self.expressions.find(text).map(|entry| LocalMatch {
            sentiment: entry.sentiment,
            surface: entry.phrase.clone(),
            kind: MatchKind::Expression,
        })
    }

    /// Earliest-declared word present as a whole word in the text
    pub fn match_word(&self, text: &str) -> Option<LocalMatch> {
        if text.is_empty() {
            return None;
        }

        let lowered = text.to_lowercase();
        self.word_matcher
            .matches(&lowered)
            .iter()
            .next()
            .map(|idx| {
                let entry = &self.words[idx];
                LocalMatch {
                    sentiment: entry.sentiment,
                    surface: entry.surface_form.clone(),
                    kind: MatchKind::Word,
                }
            })
    }

    /// Expression table first, then the word table
    pub fn detect(&self, text: &str) -> Option<LocalMatch> {
        self.match_expression(text).or_else(|| self.match_word(text))
    }

    pub fn expressions(&self) -> &[ExpressionEntry] {
        self.expressions.entries()
    }

    pub fn words(&self) -> &[LexiconEntry] {
        &self.words
    }
}

fn builtin_words() -> Vec<LexiconEntry> {
    BUILTIN_WORDS
        .iter()
        .map(|(word, sentiment)| LexiconEntry::new(*word, *sentiment))
        .collect()
}

fn builtin_expressions() -> Vec<ExpressionEntry> {
    BUILTIN_EXPRESSIONS
        .iter()
        .map(|(phrase, sentiment)| PhraseEntry::new(*phrase, *sentiment))
        .collect()
}
