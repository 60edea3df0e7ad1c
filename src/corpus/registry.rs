use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::ConfigurationError;
use crate::types::identifiers::CorpusId;

/// A named training corpus and the number of article/summary pairs it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusDescriptor {
    pub id: CorpusId,
    pub document_count: usize,
}

impl CorpusDescriptor {
    pub fn new(id: impl AsRef<str>, document_count: usize) -> Self {
        Self {
            id: CorpusId::new(id),
            document_count,
        }
    }
}

/// Known corpora, keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct CorpusRegistry {
    corpora: BTreeMap<CorpusId, CorpusDescriptor>,
}

impl CorpusRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// CNN stories (10000 pairs) and Inshorts news (4396 pairs).
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(CorpusDescriptor::new("cnn", 10_000));
        registry.register(CorpusDescriptor::new("ins", 4_396));
        registry
    }

    /// Add or replace a corpus.
    pub fn register(&mut self, descriptor: CorpusDescriptor) {
        self.corpora.insert(descriptor.id.clone(), descriptor);
    }

    pub fn resolve(&self, corpus: &str) -> Result<&CorpusDescriptor, ConfigurationError> {
        self.corpora
            .get(&CorpusId::new(corpus))
            .ok_or_else(|| ConfigurationError::UnknownCorpus(corpus.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CorpusDescriptor> {
        self.corpora.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_corpora_carry_their_sizes() {
        let registry = CorpusRegistry::builtin();

        assert_eq!(registry.resolve("cnn").unwrap().document_count, 10_000);
        assert_eq!(registry.resolve(" INS ").unwrap().document_count, 4_396);
    }

    #[test]
    fn unknown_corpus_is_a_configuration_error() {
        let registry = CorpusRegistry::builtin();
        let err = registry.resolve("reuters").unwrap_err();

        assert_eq!(err, ConfigurationError::UnknownCorpus("reuters".into()));
    }
}
