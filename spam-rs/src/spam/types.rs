//! Spam types and data structures

use serde::{Deserialize, Serialize};

/// Classification result for one text sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Is this text spam (probability > 0.5)
    pub is_spam: bool,
    /// Spam probability, between 0.1 and 0.99
    pub probability: f64,
    /// Patterns found in the text, in vocabulary order
    pub matched_patterns: Vec<String>,
}

/// Outcome of classifying one batch line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchOutcome {
    /// Line was classified
    Verdict(Verdict),
    /// Line could not be classified
    Failed { reason: String },
}

impl BatchOutcome {
    pub fn verdict(&self) -> Option<&Verdict> {
        match self {
            BatchOutcome::Verdict(verdict) => Some(verdict),
            BatchOutcome::Failed { .. } => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, BatchOutcome::Failed { .. })
    }
}

/// A batch line paired with its outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// Trimmed input line
    pub text: String,
    /// Classification outcome
    pub outcome: BatchOutcome,
}

/// Ordered results of a batch run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub entries: Vec<BatchEntry>,
}

impl BatchResult {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Successful verdicts, in input order
    pub fn verdicts(&self) -> impl Iterator<Item = &Verdict> {
        self.entries.iter().filter_map(|e| e.outcome.verdict())
    }

    /// Entries that failed to classify
    pub fn failures(&self) -> impl Iterator<Item = &BatchEntry> {
        self.entries.iter().filter(|e| e.outcome.is_failure())
    }

    /// Number of lines classified as spam
    pub fn spam_count(&self) -> usize {
        self.verdicts().filter(|v| v.is_spam).count()
    }
}
