//! Feedback persistence
//!
//! The batch updater reads feedback that has not been labelled yet and writes
//! back the label plus the English text it was derived from.

use async_trait::async_trait;
use pangsent_core::{Error, Result, Sentiment};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;

/// One stored piece of feedback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: i64,

    pub text: String,

    /// `None` until the record has been analyzed
    #[serde(default)]
    pub sentiment: Option<Sentiment>,
}

/// Label written back for one record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackUpdate {
    pub id: i64,
    pub sentiment: Sentiment,
    pub feedback_text: String,
}

#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Records that still need a label
    async fn pending(&self) -> Result<Vec<FeedbackRecord>>;

    async fn update(&self, update: FeedbackUpdate) -> Result<()>;
}

/// JSON-lines store: records are read from one file, updates appended to another
pub struct JsonLinesStore {
    input: PathBuf,
    output: Mutex<File>,
}

impl JsonLinesStore {
    /// Open the store, truncating the output file
    pub async fn open(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<Self> {
        let output = File::create(output.as_ref()).await.map_err(|e| {
            Error::store(format!("cannot create {}: {}", output.as_ref().display(), e))
        })?;

        Ok(Self {
            input: input.as_ref().to_path_buf(),
            output: Mutex::new(output),
        })
    }
}

#[async_trait]
impl FeedbackStore for JsonLinesStore {
    async fn pending(&self) -> Result<Vec<FeedbackRecord>> {
        let content = tokio::fs::read_to_string(&self.input)
            .await
            .map_err(|e| Error::store(format!("cannot read {}: {}", self.input.display(), e)))?;

        let mut pending = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let record: FeedbackRecord = serde_json::from_str(line).map_err(|e| {
                Error::store(format!("{}:{}: {}", self.input.display(), index + 1, e))
            })?;

            if record.sentiment.is_some() {
                debug!("Record {} already labelled, skipping", record.id);
                continue;
            }
            pending.push(record);
        }

        Ok(pending)
    }

    async fn update(&self, update: FeedbackUpdate) -> Result<()> {
        let mut line = serde_json::to_vec(&update)?;
        line.push(b'\n');

        let mut output = self.output.lock().await;
        output.write_all(&line).await?;
        output.flush().await?;
        Ok(())
    }
}
