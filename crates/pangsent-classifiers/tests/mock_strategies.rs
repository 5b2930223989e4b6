//! Mock strategies for testing the fallback chain
//!
//! Configurable implementations of `SentimentStrategy` used to check chain
//! ordering, short-circuiting and fall-through on errors.

use async_trait::async_trait;
use pangsent_classifiers::{AttemptStatus, FallbackChain, SentimentStrategy};
use pangsent_core::{ClassifierOutcome, OutcomeSource, Result, Sentiment};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
enum Behavior {
    Decide(Sentiment),
    Inapplicable,
    Fail(String),
}

/// A configurable mock strategy
pub struct MockStrategy {
    name: String,
    source: OutcomeSource,
    behavior: Behavior,
    simulated_latency: Option<Duration>,
    call_count: AtomicU32,
}

impl MockStrategy {
    /// Strategy that always decides `label`
    pub fn deciding(name: &str, label: Sentiment) -> Self {
        Self::with_behavior(name, Behavior::Decide(label))
    }

    /// Strategy that never applies
    pub fn inapplicable(name: &str) -> Self {
        Self::with_behavior(name, Behavior::Inapplicable)
    }

    /// Strategy that always errors
    pub fn failing(name: &str, message: &str) -> Self {
        Self::with_behavior(name, Behavior::Fail(message.to_string()))
    }

    fn with_behavior(name: &str, behavior: Behavior) -> Self {
        Self {
            name: name.to_string(),
            source: OutcomeSource::RemoteModel,
            behavior,
            simulated_latency: None,
            call_count: AtomicU32::new(0),
        }
    }

    pub fn with_source(mut self, source: OutcomeSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = Some(latency);
        self
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl SentimentStrategy for MockStrategy {
    async fn try_classify(&self, _text: &str) -> Result<Option<ClassifierOutcome>> {
        self.call_count.fetch_add(1, Ordering::Relaxed);

        if let Some(latency) = self.simulated_latency {
            tokio::time::sleep(latency).await;
        }

        match &self.behavior {
            Behavior::Decide(label) => Ok(Some(ClassifierOutcome::new(*label, self.source))),
            Behavior::Inapplicable => Ok(None),
            Behavior::Fail(message) => Err(pangsent_core::Error::remote_classifier(message)),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self) -> OutcomeSource {
        self.source
    }
}

#[tokio::test]
async fn test_first_definitive_strategy_short_circuits() {
    let first = Arc::new(MockStrategy::deciding("first", Sentiment::Negative));
    let second = Arc::new(MockStrategy::deciding("second", Sentiment::Positive));

    let chain = FallbackChain::new()
        .with_strategy(first.clone())
        .with_strategy(second.clone());

    let outcome = chain.classify("anything at all").await;
    assert_eq!(outcome.label, Sentiment::Negative);
    assert_eq!(first.call_count(), 1);
    assert_eq!(second.call_count(), 0);
}

#[tokio::test]
async fn test_failure_falls_through() {
    let remote = Arc::new(MockStrategy::failing("remote", "503 from model endpoint"));
    let local = Arc::new(
        MockStrategy::deciding("local", Sentiment::Positive)
            .with_source(OutcomeSource::LocalHeuristic),
    );

    let chain = FallbackChain::new()
        .with_strategy(remote.clone())
        .with_strategy(local.clone());

    let execution = chain.execute("text").await;
    assert_eq!(execution.outcome.source, OutcomeSource::LocalHeuristic);
    assert!(matches!(
        &execution.attempts[0].status,
        AttemptStatus::Unavailable(msg) if msg.contains("503")
    ));
    assert_eq!(execution.attempts[1].status, AttemptStatus::Decided);
    assert_eq!(remote.call_count(), 1);
}

#[tokio::test]
async fn test_everything_unavailable_reaches_terminal() {
    let chain = FallbackChain::new()
        .with_strategy(Arc::new(MockStrategy::failing("remote", "timeout")))
        .with_strategy(Arc::new(MockStrategy::inapplicable("polarity")));

    let execution = chain.execute("good and bad").await;
    assert_eq!(execution.outcome.source, OutcomeSource::KeywordFallback);
    assert_eq!(execution.outcome.label, Sentiment::Neutral);
    assert_eq!(execution.attempts.len(), 3);
    assert_eq!(
        chain.strategy_names(),
        vec!["remote", "polarity", "keyword_count"]
    );
}

#[tokio::test]
async fn test_empty_chain_uses_keyword_count() {
    let outcome = FallbackChain::new().classify("I love it, wonderful").await;
    assert_eq!(outcome.label, Sentiment::Positive);
    assert_eq!(outcome.source, OutcomeSource::KeywordFallback);
}

#[tokio::test]
async fn test_chain_is_shareable_across_tasks() {
    let slow = Arc::new(
        MockStrategy::deciding("slow", Sentiment::Neutral).with_latency(Duration::from_millis(5)),
    );
    let chain = Arc::new(FallbackChain::new().with_strategy(slow.clone()));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let chain = chain.clone();
            tokio::spawn(async move { chain.classify(&format!("request {i}")).await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().label, Sentiment::Neutral);
    }
    assert_eq!(slow.call_count(), 8);
}
