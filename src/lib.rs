//! Deterministic extractive summarization.
//!
//! `summary-core` trains a corpus-wide statistical model from tokenized
//! article/summary pairs (an IDF table or per-word Bayes weights), ranks the
//! sentences of a new text with it, and reassembles the best sentences in
//! their original order. Identical inputs always produce identical models and
//! identical summaries.

pub mod corpus;
pub mod model;
pub mod summarize;
pub mod text;
pub mod types;

pub use model::{build_model, CorpusModel, ScoringScheme};
pub use summarize::{summarize, Summarizer};
