use std::collections::HashSet;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::stopwords;

/// Decimal numbers, runs of letters, or integers.
const CONTENT_WORD_PATTERN: &str = r"\d+\.\d+|[^\W\d]+|\d+";

pub trait WordTokenizer {
    /// Split text into lowercase content-word tokens.
    fn tokenize_words(&self, text: &str) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    pub remove_stopwords: bool,
    pub lowercase: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            remove_stopwords: true,
            lowercase: true,
        }
    }
}

/// Regex tokenizer producing lowercase content words.
///
/// "3.14" stays a single token, "covid19" splits into "covid" and "19",
/// and apostrophes split contractions ("Trump's" -> "trump", "s").
#[derive(Debug, Clone)]
pub struct ContentWordTokenizer {
    config: TokenizerConfig,
    pattern: Regex,
    stopwords: HashSet<&'static str>,
}

impl ContentWordTokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        let pattern = Regex::new(CONTENT_WORD_PATTERN).expect("Invalid regex");
        let stopwords = if config.remove_stopwords {
            stopwords::english()
        } else {
            HashSet::new()
        };

        Self {
            config,
            pattern,
            stopwords,
        }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }
}

impl Default for ContentWordTokenizer {
    fn default() -> Self {
        Self::new(TokenizerConfig::default())
    }
}

impl WordTokenizer for ContentWordTokenizer {
    fn tokenize_words(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .filter_map(|m| {
                let lowered = m.as_str().to_lowercase();
                if self.stopwords.contains(lowered.as_str()) {
                    return None;
                }
                Some(if self.config.lowercase {
                    lowered
                } else {
                    m.as_str().to_string()
                })
            })
            .collect()
    }
}
