//! Spam classification module
//!
//! Provides rule-based spam detection over a fixed trigger vocabulary,
//! for single texts and line-oriented batches.

pub mod batch;
pub mod patterns;
pub mod scorer;
pub mod types;

pub use batch::{classify_all, classify_all_concurrent, classify_lines};
pub use patterns::{PatternSet, DEFAULT_VOCABULARY};
pub use scorer::{classify, SpamClassifier};
pub use types::*;
