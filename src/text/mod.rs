pub mod segmenter;
pub mod stopwords;
pub mod tokenizer;

pub use segmenter::{SentenceSegmenter, UnicodeSentenceSegmenter};
pub use tokenizer::{ContentWordTokenizer, TokenizerConfig, WordTokenizer};
