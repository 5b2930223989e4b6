//! Lexical polarity scorer (second chain strategy)
//!
//! Averages per-word polarity over the polar words of the text, in the style
//! of pattern/TextBlob adjective lexicons:
//! - an intensifier multiplies the polarity of the word that follows it
//! - a negator within the two tokens before a polar word flips it and halves it
//!
//! Scores are clamped to [-1, 1].

use crate::config::PolarityConfig;
use crate::strategy::SentimentStrategy;
use pangsent_core::{ClassifierOutcome, OutcomeSource, Result, Sentiment};
use std::collections::HashMap;
use std::time::Instant;

const POLARITY_WORDS: &[(&str, f32)] = &[
    // positive
    ("excellent", 1.0),
    ("wonderful", 1.0),
    ("perfect", 1.0),
    ("best", 1.0),
    ("awesome", 1.0),
    ("outstanding", 0.9),
    ("fantastic", 0.9),
    ("beautiful", 0.85),
    ("great", 0.8),
    ("happy", 0.8),
    ("pleasant", 0.73),
    ("good", 0.7),
    ("amazing", 0.6),
    ("nice", 0.6),
    ("kind", 0.6),
    ("impressive", 0.6),
    ("love", 0.5),
    ("lovely", 0.5),
    ("glad", 0.5),
    ("pleased", 0.5),
    ("satisfied", 0.5),
    ("helpful", 0.5),
    ("polite", 0.5),
    ("efficient", 0.5),
    ("better", 0.5),
    ("ok", 0.5),
    ("okay", 0.5),
    ("easy", 0.43),
    ("fine", 0.42),
    ("friendly", 0.4),
    ("clean", 0.37),
    ("quick", 0.33),
    ("fast", 0.2),
    ("thankful", 0.5),
    ("grateful", 0.5),
    // negative
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("worst", -1.0),
    ("boring", -1.0),
    ("hate", -0.8),
    ("annoying", -0.8),
    ("disappointed", -0.75),
    ("sick", -0.71),
    ("bad", -0.7),
    ("painful", -0.7),
    ("disappointing", -0.6),
    ("unhappy", -0.6),
    ("dirty", -0.6),
    ("rude", -0.6),
    ("angry", -0.5),
    ("sad", -0.5),
    ("useless", -0.5),
    ("unhelpful", -0.5),
    ("wrong", -0.5),
    ("expensive", -0.5),
    ("difficult", -0.5),
    ("poor", -0.4),
    ("worse", -0.4),
    ("frustrating", -0.4),
    ("broken", -0.4),
    ("slow", -0.3),
    ("late", -0.3),
];

const INTENSIFIERS: &[(&str, f32)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("super", 1.3),
    ("so", 1.2),
    ("quite", 1.1),
];

const NEGATORS: &[&str] = &["not", "no", "never", "cannot", "hardly", "without"];

/// Tokens a negator stays active for
const NEGATION_WINDOW: usize = 2;

/// Scores are reported to this precision
const SCORE_RESOLUTION: f64 = 1e-6;

/// Word-level polarity scorer
pub struct PolarityScorer {
    words: HashMap<&'static str, f32>,
    intensifiers: HashMap<&'static str, f32>,
}

impl PolarityScorer {
    pub fn new() -> Self {
        Self {
            words: POLARITY_WORDS.iter().copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    /// Polarity in [-1, 1]; 0.0 when no polar word is present
    pub fn score(&self, text: &str) -> f32 {
        let normalized = text.to_lowercase().replace('\u{2019}', "'");
        let tokens = normalized
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .map(|t| t.trim_matches('\''))
            .filter(|t| !t.is_empty());

        let mut scores = Vec::new();
        let mut intensity = 1.0_f32;
        let mut negation_left = 0usize;

        for token in tokens {
            if is_negator(token) {
                negation_left = NEGATION_WINDOW;
                intensity = 1.0;
                continue;
            }

            if let Some(factor) = self.intensifiers.get(token) {
                intensity *= factor;
                continue;
            }

            if let Some(polarity) = self.words.get(token) {
                let mut value = (polarity * intensity).clamp(-1.0, 1.0);
                if negation_left > 0 {
                    value *= -0.5;
                }
                scores.push(value);
                intensity = 1.0;
                negation_left = 0;
                continue;
            }

            intensity = 1.0;
            negation_left = negation_left.saturating_sub(1);
        }

        if scores.is_empty() {
            return 0.0;
        }

        // round away f32 residue so cancelling words score exactly zero
        let sum: f64 = scores.iter().map(|&v| f64::from(v)).sum();
        let mean = sum / scores.len() as f64;
        let mean = (mean / SCORE_RESOLUTION).round() * SCORE_RESOLUTION;
        (mean as f32).clamp(-1.0, 1.0)
    }
}

impl Default for PolarityScorer {
    fn default() -> Self {
        Self::new()
    }
}

fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token) || token.ends_with("n't")
}

/// Maps the polarity score onto three classes with a symmetric neutral band.
///
/// A score of exactly zero carries no signal and is reported as inapplicable,
/// so the chain moves on to the keyword count.
pub struct LexicalPolarityStrategy {
    name: String,
    scorer: PolarityScorer,
    neutral_band: f32,
}

impl LexicalPolarityStrategy {
    pub fn new(neutral_band: f32) -> Self {
        Self {
            name: "lexical_polarity".to_string(),
            scorer: PolarityScorer::new(),
            neutral_band,
        }
    }

    pub fn from_config(config: &PolarityConfig) -> Self {
        Self::new(config.neutral_band)
    }

    /// Label for a score, ignoring the zero case
    pub fn label_for(&self, polarity: f32) -> Sentiment {
        if polarity > self.neutral_band {
            Sentiment::Positive
        } else if polarity < -self.neutral_band {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

impl Default for LexicalPolarityStrategy {
    fn default() -> Self {
        Self::from_config(&PolarityConfig::default())
    }
}

#[async_trait::async_trait]
impl SentimentStrategy for LexicalPolarityStrategy {
    async fn try_classify(&self, text: &str) -> Result<Option<ClassifierOutcome>> {
        let start = Instant::now();
        let polarity = self.scorer.score(text);

        if polarity == 0.0 {
            return Ok(None);
        }

        Ok(Some(
            ClassifierOutcome::new(self.label_for(polarity), OutcomeSource::LocalHeuristic)
                .with_score(polarity)
                .with_latency_us(start.elapsed().as_micros() as u64),
        ))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self) -> OutcomeSource {
        OutcomeSource::LocalHeuristic
    }
}
