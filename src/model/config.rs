use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::corpus::{CorpusDescriptor, CorpusRegistry};

use super::scheme::ScoringScheme;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Scoring scheme `{0}` is not available (expected `tf-idf` or `bayes`)")]
    UnknownScheme(String),
    #[error("Corpus `{0}` is not registered")]
    UnknownCorpus(String),
    #[error("Corpus holds no tokens to train on")]
    EmptyCorpus,
}

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelBuildConfig {
    pub version: String,
    pub corpus: CorpusDescriptor,
    pub scheme: ScoringScheme,
}

impl ModelBuildConfig {
    pub fn v0(corpus: CorpusDescriptor, scheme: ScoringScheme) -> Self {
        Self {
            version: "1".into(),
            corpus,
            scheme,
        }
    }

    /// Validate a corpus identifier and scheme name against the registry.
    ///
    /// Nothing is loaded or computed here; both names are checked first.
    pub fn resolve(
        corpus: &str,
        scheme: &str,
        registry: &CorpusRegistry,
    ) -> Result<Self, ConfigurationError> {
        let scheme: ScoringScheme = scheme.parse()?;
        let descriptor = registry.resolve(corpus)?;

        Ok(Self::v0(descriptor.clone(), scheme))
    }
}
