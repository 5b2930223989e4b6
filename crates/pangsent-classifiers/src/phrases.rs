//! Ordered phrase matcher (substring containment, declaration order wins)

use aho_corasick::AhoCorasick;
use pangsent_core::{Result, Sentiment};
use serde::{Deserialize, Serialize};

/// A phrase mapped directly to a sentiment label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseEntry {
    pub phrase: String,
    pub sentiment: Sentiment,
}

impl PhraseEntry {
    pub fn new(phrase: impl Into<String>, sentiment: Sentiment) -> Self {
        Self {
            phrase: phrase.into().to_lowercase(),
            sentiment,
        }
    }
}

/// Case-insensitive substring matcher over an ordered phrase table.
///
/// All phrases are searched in one Aho-Corasick pass; when several are
/// contained in the text, the one declared first wins regardless of where
/// it occurs in the text.
pub struct PhraseMatcher {
    entries: Vec<PhraseEntry>,
    automaton: AhoCorasick,
}

impl PhraseMatcher {
    /// Build a matcher from entries in declaration order
    pub fn new(entries: Vec<PhraseEntry>) -> Result<Self> {
        let entries: Vec<PhraseEntry> = entries
            .into_iter()
            .map(|e| PhraseEntry::new(e.phrase, e.sentiment))
            .filter(|e| !e.phrase.trim().is_empty())
            .collect();

        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(entries.iter().map(|e| e.phrase.as_str()))
            .map_err(|e| {
                pangsent_core::Error::classifier(format!("Failed to build phrase matcher: {e}"))
            })?;

        Ok(Self { entries, automaton })
    }

    /// Find the earliest-declared phrase contained in `text`
    pub fn find(&self, text: &str) -> Option<&PhraseEntry> {
        if text.is_empty() || self.entries.is_empty() {
            return None;
        }

        let lowered = text.to_lowercase();
        self.automaton
            .find_overlapping_iter(lowered.as_str())
            .map(|m| m.pattern().as_usize())
            .min()
            .map(|idx| &self.entries[idx])
    }

    pub fn entries(&self) -> &[PhraseEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
