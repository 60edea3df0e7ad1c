use std::cmp::Ordering;
use std::collections::HashMap;

use crate::model::{BayesModel, CorpusModel, IdfModel, ScoringScheme};
use crate::types::summary_bundle::{ScoredSentence, SummaryError};

/// Tokens never counted towards document term frequency.
pub const EXCLUDED_PUNCTUATION: &[&str] = &[".", ",", "?", "\"", "'", "(", ")", "“", "”"];

/// Score assigned to sentences without tokens; sorts after every real score.
pub const FLOOR_SCORE: f64 = f64::NEG_INFINITY;

pub trait SentenceScorer {
    fn scheme(&self) -> ScoringScheme;

    /// Score every sentence of one document, in order.
    ///
    /// Every sentence must hold at least one token; an empty one fails with
    /// [`SummaryError::DegenerateInput`].
    fn score_document(&self, sentences: &[&[String]]) -> Result<Vec<f64>, SummaryError>;
}

/// Raw token counts over a whole document.
#[derive(Debug, Clone, Default)]
pub struct TermFrequencies {
    counts: HashMap<String, usize>,
}

impl TermFrequencies {
    pub fn from_sentences(sentences: &[&[String]]) -> Self {
        let mut counts = HashMap::new();
        for token in sentences.iter().flat_map(|s| s.iter()) {
            if EXCLUDED_PUNCTUATION.contains(&token.as_str()) {
                continue;
            }
            *counts.entry(token.clone()).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }
}

fn ensure_scorable(sentences: &[&[String]]) -> Result<(), SummaryError> {
    match sentences.iter().position(|s| s.is_empty()) {
        Some(index) => Err(SummaryError::DegenerateInput { index }),
        None => Ok(()),
    }
}

fn mean_weight(tokens: &[String], weight: impl Fn(&str) -> f64) -> f64 {
    let total: f64 = tokens.iter().map(|t| weight(t.as_str())).sum();
    total / tokens.len() as f64
}

impl SentenceScorer for IdfModel {
    fn scheme(&self) -> ScoringScheme {
        ScoringScheme::TfIdf
    }

    /// Mean of `tf(t) * idf(t)` over the sentence, with `tf` counted across
    /// the whole document.
    fn score_document(&self, sentences: &[&[String]]) -> Result<Vec<f64>, SummaryError> {
        ensure_scorable(sentences)?;
        let tf = TermFrequencies::from_sentences(sentences);

        Ok(sentences
            .iter()
            .map(|tokens| mean_weight(tokens, |t| tf.get(t) as f64 * self.idf(t)))
            .collect())
    }
}

impl SentenceScorer for BayesModel {
    fn scheme(&self) -> ScoringScheme {
        ScoringScheme::Bayes
    }

    fn score_document(&self, sentences: &[&[String]]) -> Result<Vec<f64>, SummaryError> {
        ensure_scorable(sentences)?;

        Ok(sentences
            .iter()
            .map(|tokens| mean_weight(tokens, |t| self.score(t)))
            .collect())
    }
}

impl SentenceScorer for CorpusModel {
    fn scheme(&self) -> ScoringScheme {
        CorpusModel::scheme(self)
    }

    fn score_document(&self, sentences: &[&[String]]) -> Result<Vec<f64>, SummaryError> {
        match self {
            CorpusModel::Idf(model) => model.score_document(sentences),
            CorpusModel::Bayes(model) => model.score_document(sentences),
        }
    }
}

/// Score and order a document's sentences by descending score.
///
/// Sentences without tokens are not scored; they get [`FLOOR_SCORE`] and
/// sort last. Ties keep document order.
pub fn rank_sentences<S>(scorer: &S, sentences: &[Vec<String>]) -> Result<Vec<ScoredSentence>, SummaryError>
where
    S: SentenceScorer + ?Sized,
{
    let scorable: Vec<usize> = sentences
        .iter()
        .enumerate()
        .filter(|(_, tokens)| !tokens.is_empty())
        .map(|(index, _)| index)
        .collect();
    let token_lists: Vec<&[String]> = scorable.iter().map(|&i| sentences[i].as_slice()).collect();
    let scores = scorer.score_document(&token_lists)?;

    let mut ranked: Vec<ScoredSentence> = (0..sentences.len())
        .map(|index| ScoredSentence {
            index,
            score: FLOOR_SCORE,
            degenerate: true,
        })
        .collect();
    for (&index, score) in scorable.iter().zip(scores) {
        ranked[index].score = score;
        ranked[index].degenerate = false;
    }

    // Stable: equal scores stay in document order
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    debug_assert!(ranked.windows(2).all(|w| {
        let (a, b) = (&w[0], &w[1]);
        a.score > b.score || (a.score == b.score && a.index < b.index)
    }));

    Ok(ranked)
}

/// Sentence indices by descending score.
pub fn sorted_indices<S>(scorer: &S, sentences: &[Vec<String>]) -> Result<Vec<usize>, SummaryError>
where
    S: SentenceScorer + ?Sized,
{
    Ok(rank_sentences(scorer, sentences)?
        .into_iter()
        .map(|s| s.index)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(raw: &str) -> Vec<String> {
        raw.split_whitespace().map(str::to_string).collect()
    }

    fn idf_model(raw_docs: &[&str]) -> IdfModel {
        let docs: Vec<Vec<String>> = raw_docs.iter().map(|d| sentence(d)).collect();
        IdfModel::train(&docs).unwrap()
    }

    #[test]
    fn tf_idf_uses_document_wide_term_frequency() {
        // N = 2; "rare" appears in one document, "common" in both
        let model = idf_model(&["rare common", "common"]);
        let sentences = [sentence("rare common"), sentence("rare")];
        let lists: Vec<&[String]> = sentences.iter().map(Vec::as_slice).collect();

        let scores = model.score_document(&lists).unwrap();

        let idf_rare = (2.0f64).log10();
        assert_eq!(scores[0], (2.0 * idf_rare + 0.0) / 2.0);
        assert_eq!(scores[1], 2.0 * idf_rare / 1.0);
    }

    #[test]
    fn punctuation_counts_in_denominator_only() {
        let model = idf_model(&["word", "other"]);
        let sentences = [sentence("word ,")];
        let lists: Vec<&[String]> = sentences.iter().map(Vec::as_slice).collect();

        let scores = model.score_document(&lists).unwrap();

        assert_eq!(scores[0], (2.0f64).log10() / 2.0);
    }

    #[test]
    fn empty_sentence_is_degenerate_input() {
        let model = idf_model(&["word"]);
        let sentences = [sentence("word"), Vec::new()];
        let lists: Vec<&[String]> = sentences.iter().map(Vec::as_slice).collect();

        let err = model.score_document(&lists).unwrap_err();
        assert_eq!(err, SummaryError::DegenerateInput { index: 1 });
    }

    #[test]
    fn ranking_floors_empty_sentences() {
        let model = idf_model(&["alpha", "beta"]);
        let sentences = vec![Vec::new(), sentence("alpha"), sentence("gamma")];

        let ranked = rank_sentences(&model, &sentences).unwrap();

        assert_eq!(ranked.last().unwrap().index, 0);
        assert!(ranked.last().unwrap().degenerate);
        assert_eq!(ranked.last().unwrap().score, FLOOR_SCORE);
    }

    #[test]
    fn ties_keep_document_order() {
        let articles = vec![sentence("alpha beta")];
        let summaries = vec![sentence("alpha beta")];
        let model = BayesModel::train(&articles, &summaries).unwrap();
        // "beta alpha" and "alpha beta" score the same; "zzz" scores 0
        let sentences = vec![sentence("zzz"), sentence("beta alpha"), sentence("alpha beta")];

        assert_eq!(sorted_indices(&model, &sentences).unwrap(), vec![1, 2, 0]);
    }
}
