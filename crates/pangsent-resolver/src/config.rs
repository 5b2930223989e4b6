//! Analyzer configuration (translator plus classifier settings)

use crate::google::DEFAULT_ENDPOINT;
use pangsent_classifiers::ClassifierConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Full resolver configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default)]
    pub translator: TranslatorConfig,

    /// Lexicon extras, override phrases and fallback chain settings
    #[serde(flatten)]
    pub classifiers: ClassifierConfig,
}

impl AnalyzerConfig {
    /// Load from a YAML file; a missing file yields defaults
    pub fn load(path: impl AsRef<Path>) -> pangsent_core::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> pangsent_core::Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.classifiers.validate()?;
        if config.translator.timeout_ms == 0 {
            return Err(pangsent_core::Error::config(
                "translator.timeout_ms must be greater than zero",
            ));
        }
        Ok(config)
    }

    /// Disable every network collaborator
    pub fn offline(mut self) -> Self {
        self.translator.enabled = false;
        self.classifiers.remote_model.enabled = false;
        self
    }
}

/// Translation collaborator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// When disabled, text is passed through untranslated
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_source_lang")]
    pub source_lang: String,

    #[serde(default = "default_target_lang")]
    pub target_lang: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl TranslatorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: default_endpoint(),
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_source_lang() -> String {
    "auto".to_string()
}

fn default_target_lang() -> String {
    "en".to_string()
}

fn default_timeout_ms() -> u64 {
    5_000
}
