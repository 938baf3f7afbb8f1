//! Spam vocabulary
//!
//! An ordered, immutable list of lowercase trigger substrings.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{Result, SpamError};

/// Default trigger vocabulary, in matching order
pub const DEFAULT_VOCABULARY: &[&str] = &[
    "congratulations",
    "won",
    "free",
    "viagra",
    "discount",
    "offer",
    "rich",
    "money",
    "limited time",
    "act now",
    "90%",
    "guaranteed",
    "claim",
];

/// Ordered set of lowercase trigger patterns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct PatternSet {
    entries: Vec<String>,
}

impl PatternSet {
    /// Create a validated pattern set
    pub fn new(entries: Vec<String>) -> Result<Self> {
        let set = Self { entries };
        set.is_valid()?;
        Ok(set)
    }

    /// Create a pattern set without validating it.
    ///
    /// Classification with an invalid set fails with
    /// [`SpamError::InvalidConfiguration`].
    pub fn unchecked(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Check that no entry is empty, duplicated or contains uppercase characters
    pub fn is_valid(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.entries.len());

        for (index, entry) in self.entries.iter().enumerate() {
            if entry.is_empty() {
                return Err(SpamError::InvalidConfiguration(format!(
                    "pattern #{} is empty",
                    index
                )));
            }
            if entry.chars().any(char::is_uppercase) {
                return Err(SpamError::InvalidConfiguration(format!(
                    "pattern '{}' is not lowercase",
                    entry
                )));
            }
            if !seen.insert(entry.as_str()) {
                return Err(SpamError::InvalidConfiguration(format!(
                    "pattern '{}' is duplicated",
                    entry
                )));
            }
        }

        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.entries.iter().any(|p| p == pattern)
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self {
            entries: DEFAULT_VOCABULARY.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for PatternSet {
    type Error = SpamError;

    fn try_from(entries: Vec<String>) -> Result<Self> {
        Self::new(entries)
    }
}

impl From<PatternSet> for Vec<String> {
    fn from(set: PatternSet) -> Self {
        set.entries
    }
}
