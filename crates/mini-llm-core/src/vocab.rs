//! Fixed output vocabulary

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Words the mock model can "generate", by default
pub const DEFAULT_WORDS: [&str; 7] = ["hello", "world", "AI", "future", "C++", "model", "token"];

/// Closed, ordered set of output words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    pub fn new(words: Vec<String>) -> Result<Self> {
        if words.is_empty() {
            return Err(Error::InvalidConfig("vocabulary must contain at least one word".into()));
        }
        if let Some(i) = words.iter().position(|w| w.trim().is_empty()) {
            return Err(Error::InvalidConfig(format!("vocabulary entry {} is blank", i)));
        }
        Ok(Self { words })
    }

    /// Parse a comma-separated list such as `"yes,no,maybe"`
    pub fn parse_list(list: &str) -> Result<Self> {
        Self::new(list.split(',').map(|w| w.trim().to_string()).collect())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl TryFrom<Vec<String>> for Vocabulary {
    type Error = Error;

    fn try_from(words: Vec<String>) -> Result<Self> {
        Self::new(words)
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocab: Vocabulary) -> Self {
        vocab.words
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self { words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocab() {
        let vocab = Vocabulary::default();
        assert_eq!(vocab.len(), 7);
        assert_eq!(vocab.get(0), Some("hello"));
        assert_eq!(vocab.get(4), Some("C++"));
        assert_eq!(vocab.get(7), None);
    }

    #[test]
    fn test_parse_list() {
        let vocab = Vocabulary::parse_list("yes, no ,maybe").unwrap();
        assert_eq!(vocab.words(), &["yes", "no", "maybe"]);
    }

    #[test]
    fn test_deserialize_validates_words() {
        let vocab: Vocabulary = serde_json::from_str(r#"["up", "down"]"#).unwrap();
        assert_eq!(vocab.words(), &["up", "down"]);

        assert!(serde_json::from_str::<Vocabulary>(r#"["a", "  "]"#).is_err());
        assert!(serde_json::from_str::<Vocabulary>("[]").is_err());
    }

    #[test]
    fn test_rejects_empty_and_blank() {
        assert!(Vocabulary::new(Vec::new()).is_err());
        assert!(Vocabulary::parse_list("a,,b").is_err());
    }
}
