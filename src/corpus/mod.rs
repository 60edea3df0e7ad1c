pub mod corpus;
pub mod registry;
pub mod source;

pub use crate::types::identifiers::CorpusId;
pub use corpus::{Corpus, CorpusError};
pub use registry::{CorpusDescriptor, CorpusRegistry};
pub use source::{CorpusSource, JsonCorpusSource};
