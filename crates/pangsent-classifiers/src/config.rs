//! Configuration for the lexicon, override phrases and the fallback chain

use crate::lexicon::{ExpressionEntry, LexiconEntry};
use crate::phrases::PhraseEntry;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration for all classifiers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Hosted sentiment model (first chain strategy)
    #[serde(default)]
    pub remote_model: RemoteModelConfig,

    /// Lexical polarity scorer (second chain strategy)
    #[serde(default)]
    pub polarity: PolarityConfig,

    /// Additional Pangasinan entries
    #[serde(default)]
    pub lexicon: LexiconConfig,

    /// Additional override phrases applied to translated text
    #[serde(default)]
    pub overrides: OverrideConfig,
}

impl ClassifierConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> pangsent_core::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> pangsent_core::Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> pangsent_core::Result<()> {
        let band = self.polarity.neutral_band;
        if !(0.0..1.0).contains(&band) {
            return Err(pangsent_core::Error::config(format!(
                "polarity.neutral_band must be in [0, 1), got {band}"
            )));
        }
        if self.remote_model.timeout_ms == 0 {
            return Err(pangsent_core::Error::config(
                "remote_model.timeout_ms must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// Remote sentiment model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteModelConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Inference endpoint URL
    #[serde(default = "default_remote_endpoint")]
    pub endpoint: String,

    /// API token; when absent the variable named by `token_env` is read
    #[serde(default)]
    pub token: Option<String>,

    #[serde(default = "default_token_env")]
    pub token_env: String,

    #[serde(default = "default_remote_timeout_ms")]
    pub timeout_ms: u64,
}

impl RemoteModelConfig {
    /// Configured token, falling back to the environment. Blank tokens count as absent.
    pub fn resolve_token(&self) -> Option<String> {
        self.token
            .clone()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| std::env::var(&self.token_env).ok())
            .filter(|t| !t.trim().is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for RemoteModelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: default_remote_endpoint(),
            token: None,
            token_env: default_token_env(),
            timeout_ms: default_remote_timeout_ms(),
        }
    }
}

/// Lexical polarity configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolarityConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Scores within [-band, band] map to neutral
    #[serde(default = "default_neutral_band")]
    pub neutral_band: f32,
}

impl Default for PolarityConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            neutral_band: default_neutral_band(),
        }
    }
}

/// Extra lexicon entries, appended after the built-in tables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconConfig {
    #[serde(default)]
    pub extra_words: Vec<LexiconEntry>,

    #[serde(default)]
    pub extra_expressions: Vec<ExpressionEntry>,
}

/// Extra override phrases, appended after the built-in phrases
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverrideConfig {
    #[serde(default)]
    pub extra_phrases: Vec<PhraseEntry>,
}

fn default_true() -> bool {
    true
}

fn default_remote_endpoint() -> String {
    "https://api-inference.huggingface.co/models/cardiffnlp/twitter-roberta-base-sentiment-latest"
        .to_string()
}

fn default_token_env() -> String {
    "HF_TOKEN".to_string()
}

fn default_remote_timeout_ms() -> u64 {
    10_000
}

fn default_neutral_band() -> f32 {
    0.1
}
