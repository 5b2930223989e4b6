//! Hand-authored override phrases for translated text
//!
//! A small set of English phrases that signal strongly negative or positive
//! service experiences. A hit is authoritative and skips the classifier chain.

use crate::config::OverrideConfig;
use crate::phrases::{PhraseEntry, PhraseMatcher};
use pangsent_core::{Result, Sentiment};

use Sentiment::{Negative, Positive};

const BUILTIN_OVERRIDES: &[(&str, Sentiment)] = &[
    ("waited for hours", Negative),
    ("waited too long", Negative),
    ("very long line", Negative),
    ("long queue", Negative),
    ("rude staff", Negative),
    ("never again", Negative),
    ("waste of time", Negative),
    ("poor service", Negative),
    ("thank you very much", Positive),
    ("excellent service", Positive),
    ("very helpful", Positive),
    ("highly recommend", Positive),
];

pub struct OverrideMatcher {
    phrases: PhraseMatcher,
}

impl OverrideMatcher {
    pub fn builtin() -> Result<Self> {
        Self::from_config(&OverrideConfig::default())
    }

    /// Built-in phrases followed by configured extras
    pub fn from_config(config: &OverrideConfig) -> Result<Self> {
        let mut entries: Vec<PhraseEntry> = BUILTIN_OVERRIDES
            .iter()
            .map(|(phrase, sentiment)| PhraseEntry::new(*phrase, *sentiment))
            .collect();
        entries.extend(config.extra_phrases.iter().cloned());

        Ok(Self {
            phrases: PhraseMatcher::new(entries)?,
        })
    }

    /// Earliest-declared override phrase contained in the text
    pub fn check(&self, text: &str) -> Option<&PhraseEntry> {
        self.phrases.find(text)
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}
