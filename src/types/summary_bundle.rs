use serde::{Deserialize, Serialize};

use crate::model::ScoringScheme;

/// A sentence chosen for the summary.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedSentence {
    /// Position of the sentence in the source document.
    pub index: usize,
    /// Verbatim surface text.
    pub text: String,
    /// `None` for a sentence without scorable tokens.
    pub score: Option<f64>,
    /// Zero-based position in the descending-score ordering.
    pub rank: usize,
}

/// Metadata describing the outcome of a summarization call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetadata {
    pub scheme: ScoringScheme,
    pub sentence_count: usize,

    pub sentences_considered: usize,
    pub sentences_degenerate: usize,
}

/// The final result of a summarization call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Selected sentences joined by a single space, in document order.
    pub text: String,
    /// Selected sentences in document order.
    pub sentences: Vec<SelectedSentence>,
    pub summary: SummaryMetadata,
}

/// Internal: a sentence that has been scored but not yet selected.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    pub index: usize,
    pub score: f64,
    /// True when the sentence had no scorable tokens and was floored.
    pub degenerate: bool,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SummaryError {
    #[error("Invalid sentence count: {requested} (must be a positive integer)")]
    InvalidSentenceCount { requested: usize },

    #[error("Sentence count {requested} exceeds the {available} sentences in the document")]
    TooManySentences { requested: usize, available: usize },

    #[error("Sentence {index} has no scorable tokens")]
    DegenerateInput { index: usize },
}

impl SummaryError {
    /// True for the request-validation failures (`InvalidRequestError`).
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            SummaryError::InvalidSentenceCount { .. } | SummaryError::TooManySentences { .. }
        )
    }
}
