//! Google web-translate client

use crate::translator::Translator;
use async_trait::async_trait;
use pangsent_core::Result;
use serde_json::Value;
use std::time::Duration;

/// The public endpoint rejects longer inputs
pub const MAX_CHARS: usize = 5000;

pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Translator backed by the public `client=gtx` endpoint.
///
/// The response is a nested JSON array whose first element lists the
/// translated segments; they are concatenated in order.
pub struct GoogleTranslator {
    endpoint: String,
    client: reqwest::Client,
}

impl GoogleTranslator {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
        if text.chars().count() > MAX_CHARS {
            return Err(pangsent_core::Error::translation(format!(
                "text exceeds {MAX_CHARS} characters"
            )));
        }

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", source_lang),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(pangsent_core::Error::translation(format!(
                "translate endpoint returned {status}"
            )));
        }

        let body: Value = response.json().await?;
        parse_segments(&body)
    }

    fn name(&self) -> &str {
        "google"
    }
}

/// Concatenate the translated segments of a `translate_a/single` response
pub fn parse_segments(body: &Value) -> Result<String> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| pangsent_core::Error::translation("unexpected translate response shape"))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        return Err(pangsent_core::Error::translation("translate response had no segments"));
    }

    Ok(translated)
}
