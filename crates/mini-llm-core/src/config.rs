//! Mock model configuration

use crate::error::{Error, Result};
use crate::vocab::Vocabulary;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default embedding width
pub const DEFAULT_EMBED_DIM: usize = 4;

/// Mock model configuration
///
/// Every field is optional in the JSON form; missing fields take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiniLlmConfig {
    /// Output words; its length is the vocabulary size
    pub vocabulary: Vocabulary,
    /// Embedding vector width (rows of the weight matrix)
    pub embed_dim: usize,
    /// Fixed RNG seed for reproducible runs (None = OS entropy)
    pub seed: Option<u64>,
    /// Sampling temperature (0.0 = greedy)
    pub temperature: f32,
}

impl Default for MiniLlmConfig {
    fn default() -> Self {
        Self {
            vocabulary: Vocabulary::default(),
            embed_dim: DEFAULT_EMBED_DIM,
            seed: None,
            temperature: 1.0,
        }
    }
}

impl MiniLlmConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    pub fn with_embed_dim(mut self, embed_dim: usize) -> Self {
        self.embed_dim = embed_dim;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn validate(&self) -> Result<()> {
        if self.vocabulary.is_empty() {
            return Err(Error::InvalidConfig("vocabulary must contain at least one word".into()));
        }
        if self.embed_dim == 0 {
            return Err(Error::InvalidConfig("embed_dim must be > 0".into()));
        }
        if !self.temperature.is_finite() || self.temperature < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "temperature must be a finite value >= 0, got {}",
                self.temperature
            )));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MiniLlmConfig::default();
        assert_eq!(config.vocab_size(), 7);
        assert_eq!(config.embed_dim, 4);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = MiniLlmConfig::new()
            .with_embed_dim(8)
            .with_seed(7)
            .with_temperature(0.5)
            .with_vocabulary(Vocabulary::parse_list("a,b").unwrap());
        assert_eq!(config.embed_dim, 8);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.vocab_size(), 2);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(MiniLlmConfig::new().with_embed_dim(0).validate().is_err());
        assert!(MiniLlmConfig::new().with_temperature(-1.0).validate().is_err());
        assert!(MiniLlmConfig::new().with_temperature(f32::NAN).validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = MiniLlmConfig::from_json_str(r#"{ "embed_dim": 16, "seed": 3 }"#).unwrap();
        assert_eq!(config.embed_dim, 16);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.vocabulary, Vocabulary::default());
        assert_eq!(config.temperature, 1.0);
    }

    #[test]
    fn test_json_vocabulary() {
        let config = MiniLlmConfig::from_json_str(r#"{ "vocabulary": ["up", "down"] }"#).unwrap();
        assert_eq!(config.vocabulary.words(), &["up", "down"]);
    }

    #[test]
    fn test_json_rejects_blank_words() {
        let err = MiniLlmConfig::from_json_str(r#"{ "vocabulary": ["a", "  "] }"#).unwrap_err();
        assert!(matches!(err, Error::ParseError(_)));
        assert!(err.to_string().contains("blank"), "unexpected message: {}", err);
    }

    #[test]
    fn test_json_errors() {
        assert!(matches!(MiniLlmConfig::from_json_str("{ not json"), Err(Error::ParseError(_))));
        assert!(matches!(
            MiniLlmConfig::from_json_str(r#"{ "vocabulary": [] }"#),
            Err(Error::ParseError(_))
        ));
        assert!(matches!(
            MiniLlmConfig::from_json_file("/nonexistent/mini-llm.json"),
            Err(Error::Io(_))
        ));
    }
}
