//! pangsent Resolver
//!
//! Composes the Pangasinan lexicon, the translation collaborator, English
//! override phrases and the fallback classifier chain into a single
//! never-failing `resolve(text)` operation.
//!
//! The resolver is immutable once built and is shared as `Arc<Resolver>` by
//! the HTTP service, the batch updater and the interactive demo.

pub mod config;
pub mod google;
pub mod resolver;
pub mod translator;

pub use config::{AnalyzerConfig, TranslatorConfig};
pub use google::GoogleTranslator;
pub use resolver::{Resolver, ResolverBuilder};
pub use translator::{NoopTranslator, Translator, TranslatorAdapter};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::AnalyzerConfig;
    pub use crate::resolver::Resolver;
    pub use crate::translator::{Translator, TranslatorAdapter};
    pub use pangsent_core::{AnalysisRequest, AnalysisResult, Sentiment};
}
