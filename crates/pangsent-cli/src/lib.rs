//! pangsent CLI
//!
//! One-shot analysis, an interactive stdin demo and the batch updater that
//! labels pending records of a feedback store.

pub mod batch;
pub mod cli;
pub mod interactive;
pub mod store;

pub use batch::{run_batch, BatchReport};
pub use cli::{Cli, Commands};
pub use interactive::run_interactive;
pub use store::{FeedbackRecord, FeedbackStore, FeedbackUpdate, JsonLinesStore};
