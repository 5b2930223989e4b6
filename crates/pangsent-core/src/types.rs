//! Core types for pangsent

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Three-way sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Lower-case wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            "neutral" => Ok(Self::Neutral),
            other => Err(crate::Error::config(format!("unknown sentiment label: {other}"))),
        }
    }
}

/// A single piece of feedback to analyze
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Raw feedback text, possibly mixing Pangasinan and English
    pub text: String,
}

impl AnalysisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Which fallback-chain strategy produced a label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeSource {
    /// Hosted 3-class sentiment model
    RemoteModel,
    /// Local lexical polarity scorer
    LocalHeuristic,
    /// Keyword-count terminal step
    KeywordFallback,
}

impl OutcomeSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RemoteModel => "remote_model",
            Self::LocalHeuristic => "local_heuristic",
            Self::KeywordFallback => "keyword_fallback",
        }
    }
}

impl fmt::Display for OutcomeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Definitive result of one classifier strategy
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierOutcome {
    /// Canonical label
    pub label: Sentiment,

    /// Strategy that decided
    pub source: OutcomeSource,

    /// Strategy-specific score (model confidence, polarity, keyword margin)
    pub raw_score: Option<f32>,

    /// Latency in microseconds
    pub latency_us: u64,
}

impl ClassifierOutcome {
    /// Create a new outcome without timing information
    pub fn new(label: Sentiment, source: OutcomeSource) -> Self {
        Self {
            label,
            source,
            raw_score: None,
            latency_us: 0,
        }
    }

    /// Attach a raw score
    pub fn with_score(mut self, score: f32) -> Self {
        self.raw_score = Some(score);
        self
    }

    /// Attach a latency measurement
    pub fn with_latency_us(mut self, latency_us: u64) -> Self {
        self.latency_us = latency_us;
        self
    }
}

/// Where the final label of an analysis came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Pangasinan multi-word expression
    LocalExpression,
    /// Pangasinan single word
    LocalWord,
    /// Hand-authored override phrase on the translated text
    OverridePhrase,
    /// Fallback classifier chain
    Classifier(OutcomeSource),
    /// Blank input
    EmptyInput,
}

impl Provenance {
    /// Short label used in logs and metrics
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LocalExpression => "local_expression",
            Self::LocalWord => "local_word",
            Self::OverridePhrase => "override_phrase",
            Self::Classifier(source) => source.as_str(),
            Self::EmptyInput => "empty_input",
        }
    }
}

/// Outcome of resolving one piece of feedback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Text exactly as received
    pub original_text: String,

    /// Best current English form of the text (original text if translation failed)
    pub translated_text: String,

    /// Resolved label
    pub sentiment: Sentiment,

    /// Whether a Pangasinan expression or word was found in the original text
    pub contains_local_language: bool,

    /// Diagnostic metadata about the deciding stage
    pub provenance: Provenance,
}
