use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::config::ConfigurationError;

/// Per-word relevance weights estimated with Bayes' rule.
///
/// For a word `w`, with `Na`/`Ns` the article/summary token totals:
///
/// ```text
/// P(Sw)     = Ns / (Na + Ns)
/// P(w | Sw) = count_summaries(w) / Ns
/// P(w)      = (count_articles(w) + count_summaries(w)) / (Na + Ns)
/// score(w)  = P(w | Sw) * P(Sw) / P(w)
/// ```
///
/// Words are scored independently. Only words seen on the article side are
/// stored; anything else scores 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BayesModel {
    article_tokens: usize,
    summary_tokens: usize,
    scores: BTreeMap<String, f64>,
}

impl BayesModel {
    pub fn train(
        articles: &[Vec<String>],
        summaries: &[Vec<String>],
    ) -> Result<Self, ConfigurationError> {
        let article_counts = count_tokens(articles);
        let summary_counts = count_tokens(summaries);

        let na: usize = article_counts.values().sum();
        let ns: usize = summary_counts.values().sum();
        let total = na + ns;
        if total == 0 {
            return Err(ConfigurationError::EmptyCorpus);
        }

        let p_summary = ns as f64 / total as f64;

        let scores = article_counts
            .iter()
            .map(|(&word, &in_articles)| {
                let in_summaries = summary_counts.get(word).copied().unwrap_or(0);
                let p_word_given_summary = if ns == 0 {
                    0.0
                } else {
                    in_summaries as f64 / ns as f64
                };
                let p_word = (in_articles + in_summaries) as f64 / total as f64;

                (word.to_string(), p_word_given_summary * p_summary / p_word)
            })
            .collect();

        Ok(BayesModel {
            article_tokens: na,
            summary_tokens: ns,
            scores,
        })
    }

    /// Stored weight for `token`, 0 when it was never seen in an article.
    pub fn score(&self, token: &str) -> f64 {
        self.scores.get(token).copied().unwrap_or(0.0)
    }

    /// Prior probability that a token position belongs to a summary.
    pub fn summary_prior(&self) -> f64 {
        self.summary_tokens as f64 / (self.article_tokens + self.summary_tokens) as f64
    }

    pub fn article_tokens(&self) -> usize {
        self.article_tokens
    }

    pub fn summary_tokens(&self) -> usize {
        self.summary_tokens
    }

    pub fn vocabulary_size(&self) -> usize {
        self.scores.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(token, score)| (token.as_str(), *score))
    }
}

fn count_tokens(sequences: &[Vec<String>]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for token in sequences.iter().flatten() {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
}
