//! Error types for pangsent

/// Result type alias using pangsent's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for pangsent operations
///
/// None of these reach the caller of the resolver: collaborator failures are
/// logged and degraded to the next fallback.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Translation collaborator failed
    #[error("translation unavailable: {0}")]
    Translation(String),

    /// Remote sentiment model failed or returned something unusable
    #[error("remote classifier unavailable: {0}")]
    RemoteClassifier(String),

    /// Classifier construction errors
    #[error("classifier error: {0}")]
    Classifier(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Feedback store read/write errors
    #[error("feedback store error: {0}")]
    Store(String),

    /// HTTP transport errors
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Filesystem errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML errors
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Timeout errors
    #[error("operation timed out")]
    Timeout,

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new translation error
    pub fn translation(msg: impl Into<String>) -> Self {
        Self::Translation(msg.into())
    }

    /// Create a new remote classifier error
    pub fn remote_classifier(msg: impl Into<String>) -> Self {
        Self::RemoteClassifier(msg.into())
    }

    /// Create a new classifier error
    pub fn classifier(msg: impl Into<String>) -> Self {
        Self::Classifier(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new feedback store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
