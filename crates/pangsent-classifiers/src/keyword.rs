//! Keyword-count sentiment classifier
//!
//! Terminal step of the fallback chain: always produces a label.

use crate::strategy::SentimentStrategy;
use pangsent_core::{ClassifierOutcome, OutcomeSource, Result, Sentiment};
use std::time::Instant;

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "wonderful",
    "love",
    "like",
    "happy",
    "awesome",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "hate",
    "angry",
    "disappointed",
    "horrible",
    "worst",
];

/// Majority vote over fixed positive/negative word lists.
///
/// Each list word contained in the text (case-insensitive substring) counts
/// once. Ties, including no hits at all, are neutral.
pub struct KeywordCountStrategy {
    name: String,
    positive: Vec<String>,
    negative: Vec<String>,
}

impl KeywordCountStrategy {
    pub fn new() -> Self {
        Self::with_words(POSITIVE_WORDS, NEGATIVE_WORDS)
    }

    pub fn with_words(positive: &[&str], negative: &[&str]) -> Self {
        Self {
            name: "keyword_count".to_string(),
            positive: positive.iter().map(|w| w.to_lowercase()).collect(),
            negative: negative.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Positive and negative hit counts
    pub fn counts(&self, text: &str) -> (usize, usize) {
        let text_lower = text.to_lowercase();
        let positive = self
            .positive
            .iter()
            .filter(|word| text_lower.contains(word.as_str()))
            .count();
        let negative = self
            .negative
            .iter()
            .filter(|word| text_lower.contains(word.as_str()))
            .count();
        (positive, negative)
    }

    /// Infallible classification
    pub fn classify(&self, text: &str) -> ClassifierOutcome {
        let start = Instant::now();
        let (positive, negative) = self.counts(text);

        let label = match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => Sentiment::Positive,
            std::cmp::Ordering::Less => Sentiment::Negative,
            std::cmp::Ordering::Equal => Sentiment::Neutral,
        };

        ClassifierOutcome::new(label, OutcomeSource::KeywordFallback)
            .with_score(positive as f32 - negative as f32)
            .with_latency_us(start.elapsed().as_micros() as u64)
    }
}

impl Default for KeywordCountStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SentimentStrategy for KeywordCountStrategy {
    async fn try_classify(&self, text: &str) -> Result<Option<ClassifierOutcome>> {
        Ok(Some(self.classify(text)))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self) -> OutcomeSource {
        OutcomeSource::KeywordFallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_majority_positive() {
        let outcome = KeywordCountStrategy::new().classify("Great food, but bad parking. Love it");
        assert_eq!(outcome.label, Sentiment::Positive);
        assert_eq!(outcome.source, OutcomeSource::KeywordFallback);
        assert_eq!(outcome.raw_score, Some(1.0));
    }

    #[test]
    fn test_majority_negative() {
        let outcome = KeywordCountStrategy::new().classify("TERRIBLE and awful");
        assert_eq!(outcome.label, Sentiment::Negative);
    }

    #[test]
    fn test_no_hits_is_neutral() {
        let outcome = KeywordCountStrategy::new().classify("aaa bbb ccc");
        assert_eq!(outcome.label, Sentiment::Neutral);
        assert_eq!(outcome.raw_score, Some(0.0));
    }

    #[test]
    fn test_tie_is_neutral() {
        let outcome = KeywordCountStrategy::new().classify("good and bad");
        assert_eq!(outcome.label, Sentiment::Neutral);
    }

    #[test]
    fn test_each_word_counts_once() {
        let strategy = KeywordCountStrategy::new();
        assert_eq!(strategy.counts("bad bad bad good great"), (2, 1));
    }

    #[tokio::test]
    async fn test_always_definitive() {
        let outcome = KeywordCountStrategy::new().try_classify("").await.unwrap();
        assert_eq!(outcome.unwrap().label, Sentiment::Neutral);
    }
}
