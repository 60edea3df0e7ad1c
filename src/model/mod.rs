pub mod bayes;
pub mod config;
pub mod idf;
pub mod scheme;
pub mod store;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::corpus::{Corpus, CorpusError, CorpusSource};

pub use bayes::BayesModel;
pub use config::{ConfigurationError, ModelBuildConfig};
pub use idf::IdfModel;
pub use scheme::ScoringScheme;
pub use store::{ModelManifest, ModelStore, ModelStoreError, StoredModel};

/// A trained, immutable scoring model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scheme", content = "weights")]
pub enum CorpusModel {
    #[serde(rename = "tf-idf")]
    Idf(IdfModel),
    #[serde(rename = "bayes")]
    Bayes(BayesModel),
}

impl CorpusModel {
    pub fn scheme(&self) -> ScoringScheme {
        match self {
            CorpusModel::Idf(_) => ScoringScheme::TfIdf,
            CorpusModel::Bayes(_) => ScoringScheme::Bayes,
        }
    }

    pub fn vocabulary_size(&self) -> usize {
        match self {
            CorpusModel::Idf(model) => model.vocabulary_size(),
            CorpusModel::Bayes(model) => model.vocabulary_size(),
        }
    }
}

/// Train the model for `scheme` on `corpus`.
pub fn build_model(corpus: &Corpus, scheme: ScoringScheme) -> Result<CorpusModel, ConfigurationError> {
    let model = match scheme {
        ScoringScheme::TfIdf => CorpusModel::Idf(IdfModel::train(corpus.documents())?),
        ScoringScheme::Bayes => {
            CorpusModel::Bayes(BayesModel::train(corpus.documents(), corpus.summaries())?)
        }
    };

    tracing::debug!(
        scheme = %scheme,
        documents = corpus.len(),
        vocabulary = model.vocabulary_size(),
        "Built corpus model"
    );
    Ok(model)
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),
}

/// Load the corpus named by `config` from `source` and train on it.
pub fn build_model_from_source<S>(
    config: &ModelBuildConfig,
    source: &S,
) -> Result<CorpusModel, BuildError>
where
    S: CorpusSource + ?Sized,
{
    let corpus = source.load(&config.corpus)?;
    Ok(build_model(&corpus, config.scheme)?)
}
