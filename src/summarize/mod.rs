pub mod assembly;
pub mod ranking;

use serde::{Deserialize, Serialize};

use crate::model::CorpusModel;
use crate::text::{ContentWordTokenizer, SentenceSegmenter, UnicodeSentenceSegmenter, WordTokenizer};
use crate::types::summary_bundle::{SummaryError, SummaryMetadata, SummaryResult};
pub use assembly::{assemble, AssemblyResult};
pub use ranking::{
    rank_sentences, sorted_indices, SentenceScorer, TermFrequencies, EXCLUDED_PUNCTUATION,
    FLOOR_SCORE,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Characters removed from the raw text before segmentation.
    pub strip_chars: Vec<char>,
    pub default_sentence_count: usize,
}

impl SummarizerConfig {
    pub fn v0() -> Self {
        Self {
            strip_chars: vec!['“', '”', '"'],
            default_sentence_count: 5,
        }
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self::v0()
    }
}

pub struct Summarizer<G, T> {
    config: SummarizerConfig,
    segmenter: G,
    tokenizer: T,
}

impl Default for Summarizer<UnicodeSentenceSegmenter, ContentWordTokenizer> {
    fn default() -> Self {
        Self {
            config: SummarizerConfig::v0(),
            segmenter: UnicodeSentenceSegmenter,
            tokenizer: ContentWordTokenizer::default(),
        }
    }
}

impl<G, T> Summarizer<G, T>
where
    G: SentenceSegmenter,
    T: WordTokenizer,
{
    pub fn new(config: SummarizerConfig, segmenter: G, tokenizer: T) -> Self {
        Self {
            config,
            segmenter,
            tokenizer,
        }
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summary text of the `sentence_count` best sentences.
    pub fn summarize<S>(&self, model: &S, text: &str, sentence_count: usize) -> Result<String, SummaryError>
    where
        S: SentenceScorer + ?Sized,
    {
        Ok(self.summarize_detailed(model, text, sentence_count)?.text)
    }

    /// Summarize with the configured default sentence count.
    pub fn summarize_default<S>(&self, model: &S, text: &str) -> Result<String, SummaryError>
    where
        S: SentenceScorer + ?Sized,
    {
        self.summarize(model, text, self.config.default_sentence_count)
    }

    pub fn summarize_detailed<S>(
        &self,
        model: &S,
        text: &str,
        sentence_count: usize,
    ) -> Result<SummaryResult, SummaryError>
    where
        S: SentenceScorer + ?Sized,
    {
        // 1. Strip decorative quotes so they cannot disturb sentence boundaries
        let cleaned: String = text
            .chars()
            .filter(|c| !self.config.strip_chars.contains(c))
            .collect();

        // 2. Segmentation; surface text and tokens stay index-aligned
        let surface = self.segmenter.segment_sentences(&cleaned);

        // 3. Validation, before any ranking work
        validate_sentence_count(sentence_count, surface.len())?;

        let tokens: Vec<Vec<String>> = surface
            .iter()
            .map(|s| self.tokenizer.tokenize_words(s))
            .collect();

        // 4. Ranking
        let ranked = rank_sentences(model, &tokens)?;
        let sentences_degenerate = ranked.iter().filter(|s| s.degenerate).count();
        if sentences_degenerate > 0 {
            tracing::warn!(
                degenerate = sentences_degenerate,
                "Sentences without content words were ranked last"
            );
        }

        // 5. Assembly in document order
        let AssemblyResult { text, selected } = assemble(&surface, &ranked, sentence_count);

        tracing::debug!(
            scheme = %model.scheme(),
            considered = surface.len(),
            selected = selected.len(),
            "Summarized document"
        );

        Ok(SummaryResult {
            text,
            sentences: selected,
            summary: SummaryMetadata {
                scheme: model.scheme(),
                sentence_count,
                sentences_considered: surface.len(),
                sentences_degenerate,
            },
        })
    }
}

/// `sentence_count` must be positive and no larger than `available`.
pub fn validate_sentence_count(sentence_count: usize, available: usize) -> Result<(), SummaryError> {
    if sentence_count == 0 {
        return Err(SummaryError::InvalidSentenceCount {
            requested: sentence_count,
        });
    }
    if sentence_count > available {
        return Err(SummaryError::TooManySentences {
            requested: sentence_count,
            available,
        });
    }
    Ok(())
}

/// Summarize `text` with the default segmenter and tokenizer.
pub fn summarize(model: &CorpusModel, text: &str, sentence_count: usize) -> Result<String, SummaryError> {
    Summarizer::default().summarize(model, text, sentence_count)
}
