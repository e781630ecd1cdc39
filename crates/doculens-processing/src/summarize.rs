//! Naive sentence-truncation summarizer.
//!
//! Deterministic and linear in the input length; no language model, no
//! content awareness. Operates on previously extracted text only and never
//! re-extracts.

use std::sync::LazyLock;

use doculens_core::models::Summary;
use regex::Regex;

/// Minimum number of characters required in the source text.
pub const MIN_SOURCE_CHARS: usize = 50;

/// Maximum number of sentences carried into the summary.
pub const MAX_SUMMARY_SENTENCES: usize = 4;

static NEWLINE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+").expect("newline-run pattern is valid"));

/// Rejection of a summarization request; distinct from a valid-but-empty
/// summary so callers can tell "not enough source text" from "summary
/// computed".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SummarizeError {
    #[error("text shorter than {MIN_SOURCE_CHARS} characters ({length} given)")]
    InsufficientText { length: usize },
}

/// Summarize previously extracted text by sentence truncation.
///
/// Rejects sources shorter than [`MIN_SOURCE_CHARS`] characters. Otherwise:
/// newline runs are collapsed to single spaces, the text is split on `.`,
/// fragments are trimmed and empty ones discarded, and at most the first
/// [`MAX_SUMMARY_SENTENCES`] fragments are rejoined with `". "` plus a
/// trailing `.`. Only period-terminated fragments count; a source with no
/// `.` at all yields `sentence_count == 0` and the bare summary `"."`.
pub fn summarize(text: &str) -> Result<Summary, SummarizeError> {
    let source_length = text.chars().count();
    if source_length < MIN_SOURCE_CHARS {
        tracing::debug!(length = source_length, "Rejecting summarization, source too short");
        return Err(SummarizeError::InsufficientText {
            length: source_length,
        });
    }

    let normalized = NEWLINE_RUNS.replace_all(text, " ");
    let mut pieces: Vec<&str> = normalized.split('.').collect();
    // The element after the last '.' is a remainder, not a delimited sentence.
    pieces.pop();

    let sentences: Vec<&str> = pieces
        .into_iter()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .take(MAX_SUMMARY_SENTENCES)
        .collect();

    Ok(Summary {
        source_length,
        sentence_count: sentences.len(),
        text: format!("{}.", sentences.join(". ")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_short_text() {
        assert_eq!(
            summarize("short"),
            Err(SummarizeError::InsufficientText { length: 5 })
        );
    }

    #[test]
    fn test_rejects_empty_text() {
        assert_eq!(
            summarize(""),
            Err(SummarizeError::InsufficientText { length: 0 })
        );
    }

    #[test]
    fn test_boundary_at_fifty_characters() {
        let forty_nine = "x".repeat(49);
        assert!(summarize(&forty_nine).is_err());
        let fifty = "x".repeat(50);
        assert!(summarize(&fifty).is_ok());
    }

    #[test]
    fn test_five_sentences_use_first_four() {
        let text = "Hello world. This is a test. Third sentence. Fourth one. Fifth sentence.";
        let summary = summarize(text).unwrap();
        assert_eq!(summary.sentence_count, 4);
        assert_eq!(
            summary.text,
            "Hello world. This is a test. Third sentence. Fourth one."
        );
        assert_eq!(summary.source_length, text.chars().count());
    }

    #[test]
    fn test_fewer_sentences_use_all() {
        let text = "Only one full sentence lives in this source text, nothing more.";
        let summary = summarize(text).unwrap();
        assert_eq!(summary.sentence_count, 1);
        assert_eq!(
            summary.text,
            "Only one full sentence lives in this source text, nothing more."
        );
    }

    #[test]
    fn test_degenerate_no_periods() {
        let text = "a".repeat(60);
        let summary = summarize(&text).unwrap();
        assert_eq!(summary.sentence_count, 0);
        assert_eq!(summary.text, ".");
    }

    #[test]
    fn test_newline_runs_collapse_before_splitting() {
        let text = "First sentence spans\n\nlines. Second one also\nwraps. Third. Done here.";
        let summary = summarize(text).unwrap();
        assert_eq!(summary.sentence_count, 4);
        assert_eq!(
            summary.text,
            "First sentence spans lines. Second one also wraps. Third. Done here."
        );
    }

    #[test]
    fn test_empty_fragments_discarded() {
        let text = "One... Two. Three. And this padding makes it long enough.";
        let summary = summarize(text).unwrap();
        assert_eq!(summary.text, "One. Two. Three. And this padding makes it long enough.");
        assert_eq!(summary.sentence_count, 4);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 50 two-byte characters: accepted because the precondition is on
        // characters, not bytes.
        let text = "é".repeat(50);
        assert!(summarize(&text).is_ok());
    }
}
