//! Sentiment strategy trait

use async_trait::async_trait;
use pangsent_core::{ClassifierOutcome, OutcomeSource, Result};

/// One link of the fallback chain.
///
/// `Ok(Some(_))` is a definitive outcome and stops the chain. `Ok(None)`
/// means the strategy does not apply to this text; `Err(_)` means it is
/// unavailable. Both fall through to the next strategy.
#[async_trait]
pub trait SentimentStrategy: Send + Sync {
    /// Try to classify the given (translated) text
    async fn try_classify(&self, text: &str) -> Result<Option<ClassifierOutcome>>;

    /// Get the strategy name
    fn name(&self) -> &str;

    /// Source tag attached to outcomes of this strategy
    fn source(&self) -> OutcomeSource;
}
