//! pangsent Core
//!
//! Core types and error handling shared across pangsent components.
//!
//! This crate provides:
//! - The three-way `Sentiment` label and its wire representation
//! - Request/result types for the resolution pipeline
//! - Classifier outcomes with provenance
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    AnalysisRequest, AnalysisResult, ClassifierOutcome, OutcomeSource, Provenance, Sentiment,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{
        AnalysisRequest, AnalysisResult, ClassifierOutcome, OutcomeSource, Provenance, Sentiment,
    };
}
