//! Extractive summarisation.

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// Default summary length limit, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 200;

const MIN_MAX_LENGTH: usize = 4;
const SUMMARY_SENTENCES: usize = 3;
const ELLIPSIS: &str = "...";

/// Output of [`summarize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Length of the input, in characters.
    pub original_length: usize,
    /// Length of the summary, in characters.
    pub summary_length: usize,
    pub summary: String,
}

/// Summarises `content` by keeping its first three sentences.
///
/// Sentences are separated by `". "`. Content of three sentences or fewer
/// is returned unchanged. Otherwise the first three are joined back and
/// closed with a period; if that exceeds `max_length` characters it is cut
/// to `max_length - 3` characters and `"..."` is appended.
///
/// # Errors
///
/// Returns [`QueryError::InvalidArgument`] for blank content or a
/// `max_length` below 4.
///
/// ```
/// use libris_catalog::discovery::summarize;
///
/// let text = "One. Two. Three. Four. Five";
/// assert_eq!(summarize(text, 200).unwrap().summary, "One. Two. Three.");
/// assert_eq!(summarize(text, 10).unwrap().summary, "One. Tw...");
/// ```
pub fn summarize(content: &str, max_length: usize) -> Result<Summary, QueryError> {
    if content.trim().is_empty() {
        return Err(QueryError::invalid("content", "content to summarize is required"));
    }
    if max_length < MIN_MAX_LENGTH {
        return Err(QueryError::invalid(
            "maxLength",
            format!("must be at least {}", MIN_MAX_LENGTH),
        ));
    }

    let sentences: Vec<&str> = content.split(". ").collect();
    let summary = if sentences.len() <= SUMMARY_SENTENCES {
        content.to_string()
    } else {
        let mut summary = sentences[..SUMMARY_SENTENCES].join(". ");
        summary.push('.');
        if summary.chars().count() > max_length {
            let mut cut: String = summary.chars().take(max_length - ELLIPSIS.len()).collect();
            cut.push_str(ELLIPSIS);
            cut
        } else {
            summary
        }
    };

    Ok(Summary {
        original_length: content.chars().count(),
        summary_length: summary.chars().count(),
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_content_unchanged() {
        let text = "A single sentence without a break";
        let summary = summarize(text, 10).unwrap();
        assert_eq!(summary.summary, text);
        assert_eq!(summary.original_length, summary.summary_length);
    }

    #[test]
    fn test_three_sentences_unchanged() {
        let text = "First. Second. Third.";
        assert_eq!(summarize(text, 200).unwrap().summary, text);
    }

    #[test]
    fn test_truncation_respects_limit() {
        let text = "Alpha beta gamma. Delta epsilon zeta. Eta theta iota. Kappa lambda mu.";
        let summary = summarize(text, 20).unwrap();
        assert_eq!(summary.summary_length, 20);
        assert!(summary.summary.ends_with("..."));
    }

    #[test]
    fn test_multibyte_truncation() {
        let text = "Ünïcödé one. Ünïcödé two. Ünïcödé three. Ünïcödé four.";
        let summary = summarize(text, 8).unwrap();
        assert_eq!(summary.summary, "Ünïcö...");
    }

    #[test]
    fn test_invalid_arguments() {
        assert_eq!(summarize("", 200).unwrap_err().parameter(), "content");
        assert_eq!(summarize("   ", 200).unwrap_err().parameter(), "content");
        assert_eq!(summarize("text", 3).unwrap_err().parameter(), "maxLength");
    }
}
