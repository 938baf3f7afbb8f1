//! Text rendering of verdicts for terminal output

use std::fmt::Write;

use crate::spam::{BatchEntry, BatchOutcome, PatternSet, Verdict};

/// Maximum characters of input shown next to a verdict
pub const PREVIEW_CHARS: usize = 100;

/// Common spam patterns to watch for
pub const GUIDANCE: &[&str] = &[
    "Excessive use of capital letters or exclamation marks",
    "Urgency words (Act now, Limited time, Expires soon)",
    "Money-related promises (Free money, Cash prize, Get rich)",
    "Requests for personal information or financial details",
    "Suspicious links, attachments, or requests to download files",
];

pub fn label(verdict: &Verdict) -> &'static str {
    if verdict.is_spam {
        "SPAM"
    } else {
        "NOT SPAM"
    }
}

/// Probability as a whole percentage
pub fn percent(verdict: &Verdict) -> u32 {
    (verdict.probability * 100.0).round() as u32
}

/// Shorten text to [`PREVIEW_CHARS`] characters, marking the cut with "..."
pub fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

pub fn render_verdict(text: &str, verdict: &Verdict) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", preview(text));
    let _ = writeln!(out, "  {} ({}%)", label(verdict), percent(verdict));
    if !verdict.matched_patterns.is_empty() {
        let _ = writeln!(
            out,
            "  Suspicious patterns: {}",
            verdict.matched_patterns.join(", ")
        );
    }
    out
}

pub fn render_entry(entry: &BatchEntry) -> String {
    match &entry.outcome {
        BatchOutcome::Verdict(verdict) => render_verdict(&entry.text, verdict),
        BatchOutcome::Failed { reason } => {
            format!("{}\n  ERROR: {}\n", preview(&entry.text), reason)
        }
    }
}

/// Vocabulary followed by the guidance list
pub fn render_patterns(patterns: &PatternSet) -> String {
    let mut out = String::from("Trigger vocabulary:\n");
    for pattern in patterns.iter() {
        let _ = writeln!(out, "  - {}", pattern);
    }
    out.push_str("\nCommon spam patterns to watch for:\n");
    for hint in GUIDANCE {
        let _ = writeln!(out, "  ! {}", hint);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(probability: f64, matched: &[&str]) -> Verdict {
        Verdict {
            is_spam: probability > 0.5,
            probability,
            matched_patterns: matched.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_label_and_percent() {
        assert_eq!(label(&verdict(0.7, &[])), "SPAM");
        assert_eq!(label(&verdict(0.4, &[])), "NOT SPAM");
        assert_eq!(percent(&verdict(0.55, &[])), 55);
        assert_eq!(percent(&verdict(0.99, &[])), 99);
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let long = "x".repeat(150);
        let shown = preview(&long);
        assert_eq!(shown.len(), 103);
        assert!(shown.ends_with("..."));

        assert_eq!(preview("short"), "short");
        assert_eq!(preview(&"y".repeat(100)), "y".repeat(100));
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let text = "é".repeat(120);
        assert_eq!(preview(&text).chars().count(), 103);
    }

    #[test]
    fn test_render_verdict_lists_patterns() {
        let out = render_verdict("free money", &verdict(0.4, &["free", "money"]));
        assert!(out.contains("NOT SPAM (40%)"));
        assert!(out.contains("Suspicious patterns: free, money"));

        let clean = render_verdict("hello", &verdict(0.1, &[]));
        assert!(!clean.contains("Suspicious"));
    }

    #[test]
    fn test_render_failed_entry() {
        let entry = BatchEntry {
            text: "hello".to_string(),
            outcome: BatchOutcome::Failed {
                reason: "bad vocabulary".to_string(),
            },
        };
        assert!(render_entry(&entry).contains("ERROR: bad vocabulary"));
    }

    #[test]
    fn test_render_patterns() {
        let out = render_patterns(&PatternSet::default());
        assert!(out.contains("  - limited time"));
        assert!(out.contains("Common spam patterns to watch for"));
        assert_eq!(out.matches("  ! ").count(), GUIDANCE.len());
    }
}
