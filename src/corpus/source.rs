use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use super::corpus::{Corpus, CorpusError};
use super::registry::CorpusDescriptor;

/// Supplies the tokenized corpus behind a descriptor.
pub trait CorpusSource {
    fn load(&self, descriptor: &CorpusDescriptor) -> Result<Corpus, CorpusError>;
}

/// Reads `<root>/<id>/<id><document_count>.json`, a JSON pair
/// `[documents, summaries]` of token lists.
#[derive(Debug, Clone)]
pub struct JsonCorpusSource {
    pub root: PathBuf,
}

impl JsonCorpusSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, descriptor: &CorpusDescriptor) -> PathBuf {
        let id = descriptor.id.as_str();
        self.root
            .join(id)
            .join(format!("{}{}.json", id, descriptor.document_count))
    }

    /// Write a corpus where `load` will look for it.
    pub fn store(&self, descriptor: &CorpusDescriptor, corpus: &Corpus) -> Result<PathBuf, CorpusError> {
        let path = self.path_for(descriptor);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let f = File::create(&path)?;
        serde_json::to_writer(&f, corpus)?;
        f.sync_all()?;
        Ok(path)
    }
}

impl CorpusSource for JsonCorpusSource {
    fn load(&self, descriptor: &CorpusDescriptor) -> Result<Corpus, CorpusError> {
        let path = self.path_for(descriptor);
        let corpus = read_corpus(&path)?;

        if corpus.len() != descriptor.document_count {
            return Err(CorpusError::CountMismatch {
                corpus: descriptor.id.clone(),
                expected: descriptor.document_count,
                found: corpus.len(),
            });
        }

        tracing::debug!(
            corpus = %descriptor.id,
            documents = corpus.len(),
            path = %path.display(),
            "Loaded corpus"
        );
        Ok(corpus)
    }
}

fn read_corpus(path: &Path) -> Result<Corpus, CorpusError> {
    let f = File::open(path)?;
    let corpus: Corpus = serde_json::from_reader(BufReader::new(f))?;
    Ok(corpus)
}
