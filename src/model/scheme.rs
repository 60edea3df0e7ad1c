use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::config::ConfigurationError;

/// Sentence scoring scheme a model is trained for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoringScheme {
    #[serde(rename = "tf-idf")]
    TfIdf,
    #[serde(rename = "bayes")]
    Bayes,
}

impl ScoringScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringScheme::TfIdf => "tf-idf",
            ScoringScheme::Bayes => "bayes",
        }
    }
}

impl fmt::Display for ScoringScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoringScheme {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tf-idf" => Ok(ScoringScheme::TfIdf),
            "bayes" => Ok(ScoringScheme::Bayes),
            other => Err(ConfigurationError::UnknownScheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_schemes() {
        assert_eq!("tf-idf".parse::<ScoringScheme>().unwrap(), ScoringScheme::TfIdf);
        assert_eq!("bayes".parse::<ScoringScheme>().unwrap(), ScoringScheme::Bayes);
    }

    #[test]
    fn rejects_unknown_scheme() {
        let err = "bm25".parse::<ScoringScheme>().unwrap_err();
        assert_eq!(err, ConfigurationError::UnknownScheme("bm25".into()));
    }

    #[test]
    fn serializes_as_wire_name() {
        assert_eq!(serde_json::to_string(&ScoringScheme::TfIdf).unwrap(), "\"tf-idf\"");
    }
}
