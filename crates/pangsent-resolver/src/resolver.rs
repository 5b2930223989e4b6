//! Multi-stage sentiment resolver
//!
//! Resolution order for one piece of feedback:
//! 1. Pangasinan expressions, then Pangasinan words, on the original text
//! 2. Translation into English (always, to fill `translated_text`)
//! 3. A local match is authoritative
//! 4. Otherwise English override phrases on the translated text
//! 5. Otherwise the fallback classifier chain on the translated text
//!
//! The resolver never fails: every collaborator failure degrades to the next
//! stage, and the chain's keyword count always yields a label.

use crate::config::AnalyzerConfig;
use crate::google::GoogleTranslator;
use crate::translator::{NoopTranslator, Translator, TranslatorAdapter};
use pangsent_classifiers::{
    FallbackChain, LexicalPolarityStrategy, LocalLexicon, MatchKind, OverrideMatcher,
};
use pangsent_core::{AnalysisRequest, AnalysisResult, Provenance, Result, Sentiment};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub struct Resolver {
    lexicon: Arc<LocalLexicon>,
    overrides: Arc<OverrideMatcher>,
    translator: TranslatorAdapter,
    chain: FallbackChain,
}

impl Resolver {
    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::default()
    }

    /// Build every stage from configuration
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self> {
        let lexicon = LocalLexicon::from_config(&config.classifiers.lexicon)?;
        info!(
            "Pangasinan lexicon: {} expressions, {} words",
            lexicon.expressions().len(),
            lexicon.words().len()
        );

        let overrides = OverrideMatcher::from_config(&config.classifiers.overrides)?;

        let translator: Arc<dyn Translator> = if config.translator.enabled {
            info!("Translator: google ({})", config.translator.endpoint);
            Arc::new(GoogleTranslator::new(
                &config.translator.endpoint,
                config.translator.timeout(),
            )?)
        } else {
            info!("Translator disabled, text passes through untranslated");
            Arc::new(NoopTranslator)
        };
        let translator = TranslatorAdapter::new(translator, config.translator.timeout())
            .with_languages(&config.translator.source_lang, &config.translator.target_lang);

        let chain = FallbackChain::from_config(&config.classifiers)?;

        Ok(Self {
            lexicon: Arc::new(lexicon),
            overrides: Arc::new(overrides),
            translator,
            chain,
        })
    }

    pub async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult {
        self.resolve(&request.text).await
    }

    /// Resolve one piece of feedback; always produces a label
    pub async fn resolve(&self, raw_text: &str) -> AnalysisResult {
        let start = Instant::now();

        if raw_text.trim().is_empty() {
            debug!("Blank feedback, resolving to neutral");
            return AnalysisResult {
                original_text: raw_text.to_string(),
                translated_text: raw_text.to_string(),
                sentiment: Sentiment::Neutral,
                contains_local_language: false,
                provenance: Provenance::EmptyInput,
            };
        }

        // Local matching must see the untranslated tokens
        let local = self.lexicon.detect(raw_text);
        let translated_text = self.translator.translate(raw_text).await;

        let (sentiment, provenance) = if let Some(found) = &local {
            let provenance = match found.kind {
                MatchKind::Expression => Provenance::LocalExpression,
                MatchKind::Word => Provenance::LocalWord,
            };
            debug!("Pangasinan cue '{}' -> {}", found.surface, found.sentiment);
            (found.sentiment, provenance)
        } else if let Some(hit) = self.overrides.check(&translated_text) {
            debug!("Override phrase '{}' -> {}", hit.phrase, hit.sentiment);
            (hit.sentiment, Provenance::OverridePhrase)
        } else {
            let outcome = self.chain.classify(&translated_text).await;
            (outcome.label, Provenance::Classifier(outcome.source))
        };

        debug!(
            sentiment = %sentiment,
            provenance = provenance.as_str(),
            latency_us = start.elapsed().as_micros() as u64,
            "Resolved feedback"
        );

        AnalysisResult {
            original_text: raw_text.to_string(),
            translated_text,
            sentiment,
            contains_local_language: local.is_some(),
            provenance,
        }
    }

    pub fn lexicon(&self) -> &LocalLexicon {
        &self.lexicon
    }

    pub fn chain(&self) -> &FallbackChain {
        &self.chain
    }

    pub fn translator(&self) -> &TranslatorAdapter {
        &self.translator
    }
}

/// Assembles a resolver from explicit parts.
///
/// Unset parts default to the built-in lexicon and overrides, a pass-through
/// translator and an offline chain (lexical polarity, then keyword count).
#[derive(Default)]
pub struct ResolverBuilder {
    lexicon: Option<Arc<LocalLexicon>>,
    overrides: Option<Arc<OverrideMatcher>>,
    translator: Option<Arc<dyn Translator>>,
    translator_timeout: Option<Duration>,
    chain: Option<FallbackChain>,
}

impl ResolverBuilder {
    pub fn lexicon(mut self, lexicon: Arc<LocalLexicon>) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    pub fn overrides(mut self, overrides: Arc<OverrideMatcher>) -> Self {
        self.overrides = Some(overrides);
        self
    }

    pub fn translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn translator_timeout(mut self, timeout: Duration) -> Self {
        self.translator_timeout = Some(timeout);
        self
    }

    pub fn chain(mut self, chain: FallbackChain) -> Self {
        self.chain = Some(chain);
        self
    }

    pub fn build(self) -> Result<Resolver> {
        let lexicon = match self.lexicon {
            Some(lexicon) => lexicon,
            None => Arc::new(LocalLexicon::builtin()?),
        };
        let overrides = match self.overrides {
            Some(overrides) => overrides,
            None => Arc::new(OverrideMatcher::builtin()?),
        };
        let translator = self
            .translator
            .unwrap_or_else(|| Arc::new(NoopTranslator) as Arc<dyn Translator>);
        let timeout = self.translator_timeout.unwrap_or(Duration::from_secs(5));
        let chain = self.chain.unwrap_or_else(|| {
            FallbackChain::new().with_strategy(Arc::new(LexicalPolarityStrategy::default()))
        });

        Ok(Resolver {
            lexicon,
            overrides,
            translator: TranslatorAdapter::new(translator, timeout),
            chain,
        })
    }
}
