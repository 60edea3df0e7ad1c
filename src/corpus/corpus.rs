use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::text::WordTokenizer;
use crate::types::identifiers::CorpusId;

type TokenizedPair = (Vec<Vec<String>>, Vec<Vec<String>>);

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Corpus has {documents} documents but {summaries} summaries")]
    LengthMismatch { documents: usize, summaries: usize },
    #[error("Corpus `{corpus}` should hold {expected} documents, found {found}")]
    CountMismatch {
        corpus: CorpusId,
        expected: usize,
        found: usize,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Tokenized article/summary pairs used for training.
///
/// `documents[i]` and `summaries[i]` belong to the same pair. Each entry is a
/// sequence of lowercase content words and may be empty.
///
/// Serializes as the pair `[documents, summaries]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TokenizedPair", into = "TokenizedPair")]
pub struct Corpus {
    documents: Vec<Vec<String>>,
    summaries: Vec<Vec<String>>,
}

impl Corpus {
    pub fn new(
        documents: Vec<Vec<String>>,
        summaries: Vec<Vec<String>>,
    ) -> Result<Self, CorpusError> {
        if documents.len() != summaries.len() {
            return Err(CorpusError::LengthMismatch {
                documents: documents.len(),
                summaries: summaries.len(),
            });
        }

        Ok(Corpus {
            documents,
            summaries,
        })
    }

    /// Tokenize raw article/summary strings into a corpus.
    pub fn from_raw_pairs<A, S, T>(
        articles: &[A],
        summaries: &[S],
        tokenizer: &T,
    ) -> Result<Self, CorpusError>
    where
        A: AsRef<str>,
        S: AsRef<str>,
        T: WordTokenizer,
    {
        if articles.len() != summaries.len() {
            return Err(CorpusError::LengthMismatch {
                documents: articles.len(),
                summaries: summaries.len(),
            });
        }

        let documents = articles
            .iter()
            .map(|a| tokenizer.tokenize_words(a.as_ref()))
            .collect();
        let summaries = summaries
            .iter()
            .map(|s| tokenizer.tokenize_words(s.as_ref()))
            .collect();

        Self::new(documents, summaries)
    }

    pub fn documents(&self) -> &[Vec<String>] {
        &self.documents
    }

    pub fn summaries(&self) -> &[Vec<String>] {
        &self.summaries
    }

    /// Number of article/summary pairs.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl TryFrom<TokenizedPair> for Corpus {
    type Error = CorpusError;

    fn try_from((documents, summaries): TokenizedPair) -> Result<Self, Self::Error> {
        Corpus::new(documents, summaries)
    }
}

impl From<Corpus> for TokenizedPair {
    fn from(corpus: Corpus) -> Self {
        (corpus.documents, corpus.summaries)
    }
}
