//! Fallback sentiment classifier chain
//!
//! Strategies run strictly in order; the first definitive outcome wins. The
//! chain always ends with the keyword count, so it always yields a label.

use crate::config::ClassifierConfig;
use crate::keyword::KeywordCountStrategy;
use crate::polarity::LexicalPolarityStrategy;
use crate::remote::RemoteModelStrategy;
use crate::strategy::SentimentStrategy;
use pangsent_core::{ClassifierOutcome, Result};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// What happened when a strategy was tried
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptStatus {
    Decided,
    Inapplicable,
    Unavailable(String),
}

#[derive(Debug, Clone)]
pub struct StrategyAttempt {
    pub strategy: String,
    pub status: AttemptStatus,
    pub latency_us: u64,
}

/// Complete chain execution result
#[derive(Debug, Clone)]
pub struct ChainExecution {
    pub outcome: ClassifierOutcome,

    /// Every strategy tried, in order, including the one that decided
    pub attempts: Vec<StrategyAttempt>,

    pub total_latency_us: u64,
}

#[derive(Clone)]
pub struct FallbackChain {
    strategies: Vec<Arc<dyn SentimentStrategy>>,
    terminal: Arc<KeywordCountStrategy>,
}

impl FallbackChain {
    /// Chain with only the terminal keyword count
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
            terminal: Arc::new(KeywordCountStrategy::new()),
        }
    }

    /// Append a strategy before the terminal step
    pub fn with_strategy(mut self, strategy: Arc<dyn SentimentStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Remote model (when a token is available), then lexical polarity, then keyword count
    pub fn from_config(config: &ClassifierConfig) -> Result<Self> {
        let mut chain = Self::new();

        if let Some(remote) = RemoteModelStrategy::from_config(&config.remote_model)? {
            chain = chain.with_strategy(Arc::new(remote));
        }

        if config.polarity.enabled {
            chain = chain.with_strategy(Arc::new(LexicalPolarityStrategy::from_config(
                &config.polarity,
            )));
        }

        info!("Fallback chain: {}", chain.strategy_names().join(" -> "));
        Ok(chain)
    }

    /// Names of all strategies in execution order, terminal included
    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies
            .iter()
            .map(|s| s.name())
            .chain(std::iter::once(self.terminal.name()))
            .collect()
    }

    /// Classify, keeping only the outcome
    pub async fn classify(&self, text: &str) -> ClassifierOutcome {
        self.execute(text).await.outcome
    }

    /// Classify and report every attempt
    pub async fn execute(&self, text: &str) -> ChainExecution {
        let start = Instant::now();
        let mut attempts = Vec::with_capacity(self.strategies.len() + 1);

        for strategy in &self.strategies {
            let attempt_start = Instant::now();
            let result = strategy.try_classify(text).await;
            let latency_us = attempt_start.elapsed().as_micros() as u64;

            match result {
                Ok(Some(outcome)) => {
                    debug!("{} decided {}", strategy.name(), outcome.label);
                    attempts.push(StrategyAttempt {
                        strategy: strategy.name().to_string(),
                        status: AttemptStatus::Decided,
                        latency_us,
                    });
                    return ChainExecution {
                        outcome,
                        attempts,
                        total_latency_us: start.elapsed().as_micros() as u64,
                    };
                }
                Ok(None) => {
                    debug!("{} inapplicable, falling through", strategy.name());
                    attempts.push(StrategyAttempt {
                        strategy: strategy.name().to_string(),
                        status: AttemptStatus::Inapplicable,
                        latency_us,
                    });
                }
                Err(e) => {
                    warn!("{} unavailable, falling through: {}", strategy.name(), e);
                    attempts.push(StrategyAttempt {
                        strategy: strategy.name().to_string(),
                        status: AttemptStatus::Unavailable(e.to_string()),
                        latency_us,
                    });
                }
            }
        }

        let outcome = self.terminal.classify(text);
        attempts.push(StrategyAttempt {
            strategy: self.terminal.name().to_string(),
            status: AttemptStatus::Decided,
            latency_us: outcome.latency_us,
        });

        ChainExecution {
            outcome,
            attempts,
            total_latency_us: start.elapsed().as_micros() as u64,
        }
    }
}

impl Default for FallbackChain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RemoteModelConfig;
    use pangsent_core::{OutcomeSource, Sentiment};

    fn offline_config() -> ClassifierConfig {
        ClassifierConfig {
            remote_model: RemoteModelConfig {
                enabled: false,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_offline_chain_order() {
        let chain = FallbackChain::from_config(&offline_config()).unwrap();
        assert_eq!(chain.strategy_names(), vec!["lexical_polarity", "keyword_count"]);
    }

    #[tokio::test]
    async fn test_polarity_decides() {
        let chain = FallbackChain::from_config(&offline_config()).unwrap();
        let execution = chain
            .execute("The service was excellent and the staff were wonderful")
            .await;

        assert_eq!(execution.outcome.label, Sentiment::Positive);
        assert_eq!(execution.outcome.source, OutcomeSource::LocalHeuristic);
        assert_eq!(execution.attempts.len(), 1);
    }

    #[tokio::test]
    async fn test_zero_polarity_reaches_keyword_count() {
        let chain = FallbackChain::from_config(&offline_config()).unwrap();
        let execution = chain.execute("aaa bbb ccc").await;

        assert_eq!(execution.outcome.label, Sentiment::Neutral);
        assert_eq!(execution.outcome.source, OutcomeSource::KeywordFallback);
        assert_eq!(execution.attempts[0].status, AttemptStatus::Inapplicable);
        assert_eq!(execution.attempts[1].strategy, "keyword_count");
    }

    #[tokio::test]
    async fn test_polarity_disabled() {
        let mut config = offline_config();
        config.polarity.enabled = false;
        let chain = FallbackChain::from_config(&config).unwrap();

        let outcome = chain.classify("terrible, just awful").await;
        assert_eq!(outcome.source, OutcomeSource::KeywordFallback);
        assert_eq!(outcome.label, Sentiment::Negative);
    }
}
