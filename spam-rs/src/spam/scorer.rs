//! Spam scoring engine
//!
//! Rule-based classification: the spam probability grows with the number of
//! distinct vocabulary patterns found in the text.

use std::borrow::Cow;
use std::sync::Arc;
use tracing::debug;

use super::batch;
use super::patterns::PatternSet;
use super::types::*;
use crate::error::Result;

/// Probability reported when no pattern matches
pub const BASE_PROBABILITY: f64 = 0.1;

/// Probability added per matched pattern
pub const PATTERN_WEIGHT: f64 = 0.15;

/// Upper bound of the reported probability
pub const MAX_PROBABILITY: f64 = 0.99;

/// Probabilities strictly above this are spam
pub const SPAM_THRESHOLD: f64 = 0.5;

/// Spam probability for a number of matched patterns.
///
/// Rounded to two decimals so equal match counts always report the same
/// value, e.g. two matches give exactly `0.4`.
pub fn probability_for(matches: usize) -> f64 {
    let raw = BASE_PROBABILITY + PATTERN_WEIGHT * matches as f64;
    let rounded = (raw * 100.0).round() / 100.0;
    rounded.clamp(BASE_PROBABILITY, MAX_PROBABILITY)
}

/// ASCII case folding. Non-ASCII characters are left as they are.
pub fn fold_case(text: &str) -> Cow<'_, str> {
    if text.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(text.to_ascii_lowercase())
    } else {
        Cow::Borrowed(text)
    }
}

/// Classify a text against a pattern set
pub fn classify(text: &str, patterns: &PatternSet) -> Result<Verdict> {
    patterns.is_valid()?;

    let folded = fold_case(text);
    let matched_patterns: Vec<String> = patterns
        .iter()
        .filter(|pattern| folded.contains(pattern))
        .map(str::to_string)
        .collect();

    let probability = probability_for(matched_patterns.len());
    let is_spam = probability > SPAM_THRESHOLD;

    debug!(
        "Classified {} bytes: {} patterns matched, probability {:.2}",
        text.len(),
        matched_patterns.len(),
        probability
    );

    Ok(Verdict {
        is_spam,
        probability,
        matched_patterns,
    })
}

/// Classifier bound to one shared vocabulary
#[derive(Debug, Clone)]
pub struct SpamClassifier {
    patterns: Arc<PatternSet>,
}

impl SpamClassifier {
    /// Create a classifier, rejecting an invalid vocabulary up front
    pub fn new(patterns: PatternSet) -> Result<Self> {
        patterns.is_valid()?;
        Ok(Self {
            patterns: Arc::new(patterns),
        })
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Shared handle to the vocabulary, for concurrent batch runs
    pub fn shared_patterns(&self) -> Arc<PatternSet> {
        Arc::clone(&self.patterns)
    }

    /// Classify a single text
    pub fn classify(&self, text: &str) -> Result<Verdict> {
        classify(text, &self.patterns)
    }

    /// Classify multi-line input, one record per line
    pub fn classify_all(&self, input: &str) -> BatchResult {
        batch::classify_all(input, &self.patterns)
    }
}

impl Default for SpamClassifier {
    fn default() -> Self {
        Self {
            patterns: Arc::new(PatternSet::default()),
        }
    }
}
