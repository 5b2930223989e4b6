//! Hosted 3-class sentiment model (first chain strategy)
//!
//! Calls a Hugging Face style inference endpoint with `{"inputs": text}` and
//! expects a ranked list of `{label, score}`. Any transport error, non-2xx
//! status, timeout or unusable body makes the strategy unavailable for that
//! text; it never retries.

use crate::config::RemoteModelConfig;
use crate::strategy::SentimentStrategy;
use pangsent_core::{ClassifierOutcome, OutcomeSource, Result, Sentiment};
use serde::Deserialize;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f32,
}

/// The inference API wraps single-input results in an outer list
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Batched(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

pub struct RemoteModelStrategy {
    name: String,
    endpoint: String,
    token: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl RemoteModelStrategy {
    pub fn new(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            name: "remote_model".to_string(),
            endpoint: endpoint.into(),
            token: token.into(),
            timeout,
            client,
        })
    }

    /// Build from configuration; `None` when disabled or no token is available
    pub fn from_config(config: &RemoteModelConfig) -> Result<Option<Self>> {
        if !config.enabled {
            info!("Remote sentiment model disabled by configuration");
            return Ok(None);
        }

        match config.resolve_token() {
            Some(token) => {
                info!("Remote sentiment model enabled: {}", config.endpoint);
                Self::new(&config.endpoint, token, config.timeout()).map(Some)
            }
            None => {
                info!(
                    "No token in config or ${}, remote sentiment model skipped",
                    config.token_env
                );
                Ok(None)
            }
        }
    }

    async fn request(&self, text: &str) -> Result<Vec<LabelScore>> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "inputs": text }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(pangsent_core::Error::remote_classifier(format!(
                "model endpoint returned {status}"
            )));
        }

        let body = response.bytes().await?;
        parse_response(&body)
    }
}

/// Decode the ranked label list of an inference response
pub fn parse_response(body: &[u8]) -> Result<Vec<LabelScore>> {
    let parsed: InferenceResponse = serde_json::from_slice(body).map_err(|e| {
        pangsent_core::Error::remote_classifier(format!("malformed model response: {e}"))
    })?;

    let scores = match parsed {
        InferenceResponse::Batched(mut batches) => {
            if batches.is_empty() {
                Vec::new()
            } else {
                batches.swap_remove(0)
            }
        }
        InferenceResponse::Flat(scores) => scores,
    };

    if scores.is_empty() {
        return Err(pangsent_core::Error::remote_classifier(
            "model response contained no labels",
        ));
    }

    Ok(scores)
}

/// Highest-scoring entry
pub fn top_label(scores: &[LabelScore]) -> Option<&LabelScore> {
    scores
        .iter()
        .filter(|s| !s.score.is_nan())
        .max_by(|a, b| a.score.total_cmp(&b.score))
}

/// Map a model label to the canonical enum.
///
/// Handles both named (`positive`) and ordinal (`LABEL_2`) schemes.
pub fn map_label(label: &str) -> Sentiment {
    let label = label.to_lowercase();
    if label.contains("positive") || label == "label_2" {
        Sentiment::Positive
    } else if label.contains("negative") || label == "label_0" {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

#[async_trait::async_trait]
impl SentimentStrategy for RemoteModelStrategy {
    async fn try_classify(&self, text: &str) -> Result<Option<ClassifierOutcome>> {
        let start = Instant::now();

        let scores = tokio::time::timeout(self.timeout, self.request(text))
            .await
            .map_err(|_| pangsent_core::Error::Timeout)??;

        let top = top_label(&scores).ok_or_else(|| {
            pangsent_core::Error::remote_classifier("model response contained no usable scores")
        })?;
        debug!("Remote model top label: {} ({:.3})", top.label, top.score);

        Ok(Some(
            ClassifierOutcome::new(map_label(&top.label), OutcomeSource::RemoteModel)
                .with_score(top.score)
                .with_latency_us(start.elapsed().as_micros() as u64),
        ))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self) -> OutcomeSource {
        OutcomeSource::RemoteModel
    }
}
