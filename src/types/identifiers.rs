use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Name of a training corpus, e.g. `cnn` or `ins`.
///
/// Always trimmed and lowercased so that registry lookups are insensitive to
/// how the caller spelled the identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorpusId(String);

impl CorpusId {
    pub fn new(raw: impl AsRef<str>) -> Self {
        CorpusId(raw.as_ref().trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorpusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content hash of a trained model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelVersion(String);

impl ModelVersion {
    /// Hash the build config and the canonical weights bytes together.
    pub fn from_parts(config: &[u8], weights: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(config);
        hasher.update(weights);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        ModelVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
