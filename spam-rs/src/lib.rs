//! spam-rs: Rule-based email spam classifier
//!
//! Classifies free text as spam or not-spam and reports a confidence score
//! together with the trigger patterns that were found.
//!
//! # Features
//!
//! - **Classifier**: Case-insensitive substring matching against an ordered vocabulary
//! - **Batch**: One record per line, blank lines skipped, per-line failure isolation
//! - **Concurrency**: Batches can be spread over tokio worker tasks, order preserved
//! - **Configuration**: TOML vocabulary and batch settings
//!
//! # Example
//!
//! ```
//! use spam_rs::spam::{classify, PatternSet};
//!
//! let patterns = PatternSet::default();
//! let verdict = classify("Congratulations, you WON free money!", &patterns).unwrap();
//!
//! assert!(verdict.is_spam);
//! assert_eq!(verdict.matched_patterns, vec!["congratulations", "won", "free", "money"]);
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`spam`]: Vocabulary, classifier and batch runner
//! - [`report`]: Terminal rendering of verdicts

pub mod config;
pub mod error;
pub mod report;
pub mod spam;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SpamError};
pub use spam::{BatchResult, PatternSet, SpamClassifier, Verdict};
