//! Translator collaborator interface and its fail-safe adapter

use async_trait::async_trait;
use pangsent_core::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// A translation backend. Implementations may fail; the adapter absorbs failures.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` from `source_lang` (or `"auto"`) into `target_lang`
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str)
        -> Result<String>;

    /// Get the translator name
    fn name(&self) -> &str;
}

/// Returns the text unchanged. Used offline and in tests.
#[derive(Debug, Default, Clone)]
pub struct NoopTranslator;

#[async_trait]
impl Translator for NoopTranslator {
    async fn translate(&self, text: &str, _source: &str, _target: &str) -> Result<String> {
        Ok(text.to_string())
    }

    fn name(&self) -> &str {
        "noop"
    }
}

/// Best-effort translation.
///
/// Every failure (error, timeout, blank output) yields the original text, so
/// callers always get the best current form of the text for classification.
#[derive(Clone)]
pub struct TranslatorAdapter {
    inner: Arc<dyn Translator>,
    source_lang: String,
    target_lang: String,
    timeout: Duration,
}

impl TranslatorAdapter {
    /// Adapter translating from auto-detected language into English
    pub fn new(inner: Arc<dyn Translator>, timeout: Duration) -> Self {
        Self {
            inner,
            source_lang: "auto".to_string(),
            target_lang: "en".to_string(),
            timeout,
        }
    }

    pub fn with_languages(
        mut self,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
    ) -> Self {
        self.source_lang = source_lang.into();
        self.target_lang = target_lang.into();
        self
    }

    /// Adapter that never calls out
    pub fn noop() -> Self {
        Self::new(Arc::new(NoopTranslator), Duration::from_secs(1))
    }

    pub fn translator_name(&self) -> &str {
        self.inner.name()
    }

    /// Translate, surfacing failures
    pub async fn try_translate(&self, text: &str) -> Result<String> {
        let translated = tokio::time::timeout(
            self.timeout,
            self.inner.translate(text, &self.source_lang, &self.target_lang),
        )
        .await
        .map_err(|_| pangsent_core::Error::Timeout)??;

        if translated.trim().is_empty() {
            return Err(pangsent_core::Error::translation("translator returned empty text"));
        }

        Ok(translated)
    }

    /// Translate, degrading to the original text on any failure
    pub async fn translate(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        match self.try_translate(text).await {
            Ok(translated) => {
                debug!("{} translated {} chars", self.inner.name(), text.len());
                translated
            }
            Err(e) => {
                warn!(
                    "Translation via {} unavailable, keeping original text: {}",
                    self.inner.name(),
                    e
                );
                text.to_string()
            }
        }
    }
}
