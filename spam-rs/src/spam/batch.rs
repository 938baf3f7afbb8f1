//! Batch classification
//!
//! Splits multi-line input into records, classifies each record on its own
//! and keeps results in input order. A record that fails to classify gets a
//! failure marker instead of aborting the batch.

use std::sync::Arc;
use tracing::{info, warn};

use super::patterns::PatternSet;
use super::scorer::classify;
use super::types::*;

/// Split input into trimmed, non-blank records
pub fn split_records(input: &str) -> impl Iterator<Item = &str> {
    input.lines().map(str::trim).filter(|line| !line.is_empty())
}

fn classify_entry(text: &str, patterns: &PatternSet) -> BatchEntry {
    let outcome = match classify(text, patterns) {
        Ok(verdict) => BatchOutcome::Verdict(verdict),
        Err(e) => {
            warn!("Failed to classify batch line: {}", e);
            BatchOutcome::Failed {
                reason: e.to_string(),
            }
        }
    };

    BatchEntry {
        text: text.to_string(),
        outcome,
    }
}

fn log_summary(result: &BatchResult) {
    info!(
        "Batch classified: {} lines, {} spam, {} failed",
        result.len(),
        result.spam_count(),
        result.failures().count()
    );
}

/// Classify multi-line text, one record per line
pub fn classify_all(input: &str, patterns: &PatternSet) -> BatchResult {
    classify_lines([input], patterns)
}

/// Classify a sequence of lines.
///
/// Each item is split on line boundaries and trimmed; blank records are
/// dropped before classification.
pub fn classify_lines<I, S>(lines: I, patterns: &PatternSet) -> BatchResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut entries = Vec::new();
    for item in lines {
        entries.extend(split_records(item.as_ref()).map(|text| classify_entry(text, patterns)));
    }

    let result = BatchResult { entries };
    log_summary(&result);
    result
}

/// Classify lines across up to `workers` blocking tasks.
///
/// Results are reassembled in input order. If a worker task dies, every line
/// it owned is reported as failed.
pub async fn classify_all_concurrent<I, S>(
    lines: I,
    patterns: Arc<PatternSet>,
    workers: usize,
) -> BatchResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let records: Vec<String> = lines
        .into_iter()
        .flat_map(|item| {
            split_records(item.as_ref())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect();

    if records.is_empty() {
        return BatchResult::default();
    }

    let workers = workers.clamp(1, records.len());
    let chunk_size = records.len().div_ceil(workers);

    let mut handles = Vec::with_capacity(workers);
    for chunk in records.chunks(chunk_size) {
        let chunk = chunk.to_vec();
        let patterns = Arc::clone(&patterns);
        let handle = tokio::task::spawn_blocking(move || {
            chunk
                .iter()
                .map(|text| classify_entry(text, &patterns))
                .collect::<Vec<_>>()
        });
        handles.push(handle);
    }

    let mut entries = Vec::with_capacity(records.len());
    for (handle, chunk) in handles.into_iter().zip(records.chunks(chunk_size)) {
        match handle.await {
            Ok(done) => entries.extend(done),
            Err(e) => {
                warn!("Batch worker failed: {}", e);
                entries.extend(chunk.iter().map(|text| BatchEntry {
                    text: text.clone(),
                    outcome: BatchOutcome::Failed {
                        reason: format!("worker failed: {}", e),
                    },
                }));
            }
        }
    }

    let result = BatchResult { entries };
    log_summary(&result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_dropped_in_order() {
        let result = classify_lines(["a", "", "  ", "b"], &PatternSet::default());

        assert_eq!(result.len(), 2);
        assert_eq!(result.entries[0].text, "a");
        assert_eq!(result.entries[1].text, "b");
    }

    #[test]
    fn test_multiline_input_is_split_and_trimmed() {
        let input = "  free money now  \r\n\n\t\nhello, how are you?\n";
        let result = classify_all(input, &PatternSet::default());

        assert_eq!(result.len(), 2);
        assert_eq!(result.entries[0].text, "free money now");
        assert_eq!(result.entries[1].text, "hello, how are you?");
    }

    #[test]
    fn test_default_vocabulary_batch() {
        let result = classify_lines(
            ["free money now", "hello, how are you?"],
            &PatternSet::default(),
        );

        let verdicts: Vec<_> = result.verdicts().collect();
        assert_eq!(verdicts.len(), 2);
        assert!(verdicts[0].probability > 0.1);
        assert_eq!(verdicts[1].probability, 0.1);
        assert!(!verdicts[1].is_spam);
    }

    #[test]
    fn test_invalid_patterns_mark_each_line() {
        let patterns = PatternSet::unchecked(vec![String::new()]);
        let result = classify_lines(["one", "two", "three"], &patterns);

        assert_eq!(result.len(), 3);
        assert_eq!(result.failures().count(), 3);
        assert_eq!(result.entries[1].text, "two");
        assert!(matches!(
            &result.entries[1].outcome,
            BatchOutcome::Failed { reason } if reason.contains("empty")
        ));
    }

    #[test]
    fn test_empty_input() {
        let result = classify_all("\n  \n", &PatternSet::default());
        assert!(result.is_empty());
    }
}
