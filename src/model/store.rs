use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::ModelVersion;

use super::config::ModelBuildConfig;
use super::scheme::ScoringScheme;
use super::CorpusModel;

const MANIFEST_FILE: &str = "manifest.json";
const WEIGHTS_FILE: &str = "weights.json";

#[derive(Debug, Error)]
pub enum ModelStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Output directory already exists: {0}")]
    OutputExists(PathBuf),
    #[error("Model was trained for `{model}` but the build config says `{config}`")]
    SchemeMismatch {
        config: ScoringScheme,
        model: ScoringScheme,
    },
    #[error("Model version mismatch: manifest says {expected}, weights hash to {found}")]
    VersionMismatch {
        expected: ModelVersion,
        found: ModelVersion,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelManifest {
    pub model_version: ModelVersion,
    pub build_config: ModelBuildConfig,
    pub created_at: DateTime<Utc>, // informational only
    pub vocabulary_size: usize,
    pub weights_file: String,
}

/// A model together with the manifest it was persisted under.
#[derive(Debug, Clone)]
pub struct StoredModel {
    pub root: PathBuf,
    pub manifest: ModelManifest,
    pub model: CorpusModel,
}

/// Writes trained models to disk and reads them back.
///
/// Single-threaded and non-reentrant.
pub struct ModelStore {
    config: ModelBuildConfig,
}

impl ModelStore {
    pub fn new(config: ModelBuildConfig) -> Self {
        Self { config }
    }

    /// Persist `model` into `output_dir`, which must not exist yet.
    pub fn save(&self, model: &CorpusModel, output_dir: &Path) -> Result<StoredModel, ModelStoreError> {
        if output_dir.exists() {
            return Err(ModelStoreError::OutputExists(output_dir.to_path_buf()));
        }
        if model.scheme() != self.config.scheme {
            return Err(ModelStoreError::SchemeMismatch {
                config: self.config.scheme,
                model: model.scheme(),
            });
        }

        // Weights are BTreeMaps: key order is fixed
        let weights = serde_json::to_vec(model)?;
        let config_json = serde_json::to_vec(&self.config)?;
        let model_version = ModelVersion::from_parts(&config_json, &weights);

        let manifest = ModelManifest {
            model_version: model_version.clone(),
            build_config: self.config.clone(),
            created_at: Utc::now(),
            vocabulary_size: model.vocabulary_size(),
            weights_file: WEIGHTS_FILE.to_string(),
        };

        let stem: String = model_version
            .as_str()
            .trim_start_matches("sha256:")
            .chars()
            .take(12)
            .collect();
        let temp_dir = output_dir.with_extension(format!("tmp.{stem}"));

        // Stale temp dir from a crashed save of this same version
        if temp_dir.exists() {
            fs::remove_dir_all(&temp_dir)?;
        }
        fs::create_dir_all(&temp_dir)?;

        let mut f_weights = fs::File::create(temp_dir.join(WEIGHTS_FILE))?;
        f_weights.write_all(&weights)?;
        f_weights.sync_all()?;

        let f_man = fs::File::create(temp_dir.join(MANIFEST_FILE))?;
        serde_json::to_writer_pretty(&f_man, &manifest)?;
        f_man.sync_all()?;

        fs::rename(&temp_dir, output_dir)?;

        tracing::debug!(
            path = %output_dir.display(),
            version = %model_version,
            scheme = %self.config.scheme,
            "Saved corpus model"
        );

        Ok(StoredModel {
            root: output_dir.to_path_buf(),
            manifest,
            model: model.clone(),
        })
    }

    /// Load a model saved by [`ModelStore::save`], verifying its version.
    pub fn open(root: &Path) -> Result<StoredModel, ModelStoreError> {
        let f = fs::File::open(root.join(MANIFEST_FILE))?;
        let manifest: ModelManifest = serde_json::from_reader(f)?;

        let weights = fs::read(root.join(&manifest.weights_file))?;
        let config_json = serde_json::to_vec(&manifest.build_config)?;
        let found = ModelVersion::from_parts(&config_json, &weights);
        if found != manifest.model_version {
            return Err(ModelStoreError::VersionMismatch {
                expected: manifest.model_version.clone(),
                found,
            });
        }

        let model: CorpusModel = serde_json::from_slice(&weights)?;
        if model.scheme() != manifest.build_config.scheme {
            return Err(ModelStoreError::SchemeMismatch {
                config: manifest.build_config.scheme,
                model: model.scheme(),
            });
        }

        tracing::debug!(
            path = %root.display(),
            version = %manifest.model_version,
            "Loaded corpus model"
        );

        Ok(StoredModel {
            root: root.to_path_buf(),
            manifest,
            model,
        })
    }
}
