//! Batch feedback updater

use crate::store::{FeedbackStore, FeedbackUpdate};
use futures::stream::{self, StreamExt};
use pangsent_core::{Result, Sentiment};
use pangsent_resolver::Resolver;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info};

/// Summary of one batch run
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub updated: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub elapsed_ms: u64,
}

impl BatchReport {
    fn record(&mut self, sentiment: Sentiment) {
        self.updated += 1;
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }
}

/// Label every pending record.
///
/// Up to `concurrency` records are resolved at once; updates are written in
/// input order. A store failure stops the run.
pub async fn run_batch(
    resolver: &Resolver,
    store: &dyn FeedbackStore,
    concurrency: usize,
) -> Result<BatchReport> {
    let start = Instant::now();
    let pending = store.pending().await?;
    info!("{} feedback records pending", pending.len());

    let mut results = stream::iter(pending)
        .map(|record| async move {
            let result = resolver.resolve(&record.text).await;
            (record.id, result)
        })
        .buffered(concurrency.max(1));

    let mut report = BatchReport::default();
    while let Some((id, result)) = results.next().await {
        debug!(id, sentiment = %result.sentiment, "Updating feedback record");
        report.record(result.sentiment);

        store
            .update(FeedbackUpdate {
                id,
                sentiment: result.sentiment,
                feedback_text: result.translated_text,
            })
            .await?;
    }

    report.elapsed_ms = start.elapsed().as_millis() as u64;
    info!(
        "Feedback updated: {} records ({} positive, {} negative, {} neutral)",
        report.updated, report.positive, report.negative, report.neutral
    );
    Ok(report)
}
