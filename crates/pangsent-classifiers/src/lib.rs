//! pangsent Classifiers
//!
//! Sentiment detection building blocks for mixed Pangasinan/English feedback.
//!
//! Two families live here:
//! - Local-language matching: the Pangasinan lexicon (expressions, then whole
//!   words) and English override phrases, all deterministic table lookups
//! - The fallback classifier chain: remote model, lexical polarity and the
//!   keyword-count terminal step, tried in that order
//!
//! All tables are immutable after construction and safe to share across tasks.

pub mod chain;
pub mod config;
pub mod keyword;
pub mod lexicon;
pub mod overrides;
pub mod phrases;
pub mod polarity;
pub mod remote;
pub mod strategy;

pub use chain::{AttemptStatus, ChainExecution, FallbackChain, StrategyAttempt};
pub use config::{
    ClassifierConfig, LexiconConfig, OverrideConfig, PolarityConfig, RemoteModelConfig,
};
pub use keyword::KeywordCountStrategy;
pub use lexicon::{ExpressionEntry, LexiconEntry, LocalLexicon, LocalMatch, MatchKind};
pub use overrides::OverrideMatcher;
pub use phrases::{PhraseEntry, PhraseMatcher};
pub use polarity::{LexicalPolarityStrategy, PolarityScorer};
pub use remote::RemoteModelStrategy;
pub use strategy::SentimentStrategy;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::chain::FallbackChain;
    pub use crate::keyword::KeywordCountStrategy;
    pub use crate::lexicon::{LocalLexicon, LocalMatch, MatchKind};
    pub use crate::overrides::OverrideMatcher;
    pub use crate::polarity::LexicalPolarityStrategy;
    pub use crate::remote::RemoteModelStrategy;
    pub use crate::strategy::SentimentStrategy;
}
