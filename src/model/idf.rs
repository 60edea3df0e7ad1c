use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::config::ConfigurationError;

/// Inverse document frequency table.
///
/// `idf(t) = log10(N / df(t))` where `df(t)` counts the training documents
/// containing `t` at least once. Tokens never seen in training resolve to
/// `log10(N)`, as if they appeared in exactly one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdfModel {
    document_count: usize,
    idf: BTreeMap<String, f64>,
}

impl IdfModel {
    pub fn train(documents: &[Vec<String>]) -> Result<Self, ConfigurationError> {
        let n = documents.len();
        if n == 0 {
            return Err(ConfigurationError::EmptyCorpus);
        }

        let mut df: HashMap<&str, usize> = HashMap::new();
        for doc in documents {
            let distinct: HashSet<&str> = doc.iter().map(String::as_str).collect();
            for token in distinct {
                *df.entry(token).or_insert(0) += 1;
            }
        }

        let idf = df
            .into_iter()
            .map(|(token, freq)| (token.to_string(), (n as f64 / freq as f64).log10()))
            .collect();

        Ok(IdfModel {
            document_count: n,
            idf,
        })
    }

    pub fn idf(&self, token: &str) -> f64 {
        self.idf
            .get(token)
            .copied()
            .unwrap_or_else(|| self.default_idf())
    }

    /// Weight of an unseen token.
    pub fn default_idf(&self) -> f64 {
        (self.document_count as f64).log10()
    }

    pub fn document_count(&self) -> usize {
        self.document_count
    }

    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.idf.iter().map(|(token, idf)| (token.as_str(), *idf))
    }
}
