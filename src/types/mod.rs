pub mod identifiers;
pub mod summary_bundle;

pub use identifiers::{CorpusId, ModelVersion};
pub use summary_bundle::{
    ScoredSentence, SelectedSentence, SummaryError, SummaryMetadata, SummaryResult,
};
