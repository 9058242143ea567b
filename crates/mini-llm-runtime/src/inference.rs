//! Mock inference: token -> embedding -> matmul -> softmax -> sampled word
use std::fmt;

use mini_llm_core::error::{Error, Result};
use mini_llm_core::{MiniLlmConfig, Token, Tokenizer, Vocabulary};
use mini_llm_cpu::matmul;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::embedding::Embedder;
use crate::sampling::Sampler;
use crate::weights::WeightGenerator;

/// RNG for one run: seeded when `seed` is given, OS entropy otherwise
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Outcome of one mock inference
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    /// Token the model conditioned on
    pub last_token: Token,
    /// Index of the chosen word in the vocabulary
    pub index: usize,
    /// Chosen word
    pub word: String,
    /// Distribution the word was drawn from
    pub probabilities: Vec<f32>,
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[MockResponse] {} -> {}", self.last_token, self.word)
    }
}

/// Mock language model
///
/// Holds no parameters: every call to [`MockModel::infer`] draws fresh
/// weights from the supplied random source.
#[derive(Debug, Clone)]
pub struct MockModel {
    vocabulary: Vocabulary,
    tokenizer: Tokenizer,
    embedder: Embedder,
    weights: WeightGenerator,
    sampler: Sampler,
}

impl MockModel {
    pub fn new(config: &MiniLlmConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            vocabulary: config.vocabulary.clone(),
            tokenizer: Tokenizer::new(),
            embedder: Embedder::new(config.embed_dim)?,
            weights: WeightGenerator::new()?,
            sampler: Sampler::from_temperature(config.temperature),
        })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn embed_dim(&self) -> usize {
        self.embedder.dim()
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Run the pipeline on an already tokenized prompt
    pub fn infer<R: Rng + ?Sized>(&self, tokens: &[Token], rng: &mut R) -> Result<Generation> {
        let last_token = self.tokenizer.last_token(tokens)?;
        log::debug!("Conditioning on token {:?} ({} tokens total)", last_token, tokens.len());

        let input = self.embedder.embed_last(tokens)?;
        log::debug!("Embedding: {:?}", input.as_slice());

        let weights = self.weights.generate(self.embedder.dim(), self.vocabulary.len(), rng)?;
        log::debug!("Weights: {}x{}", weights.rows(), weights.cols());

        let output = matmul(&input, &weights)?;
        let logits = output.row(0).ok_or(Error::EmptyLogits)?;
        log::debug!("Logits: {:?}", logits);

        let probabilities = self.sampler.probabilities(logits)?;
        log::debug!("Probabilities: {:?}", probabilities);

        let index = self.sampler.sample(logits, rng)?;
        let word = self
            .vocabulary
            .get(index)
            .ok_or_else(|| {
                Error::DimensionMismatch(format!(
                    "sampled index {} outside vocabulary of {}",
                    index,
                    self.vocabulary.len()
                ))
            })?
            .to_string();
        log::info!("Sampled index {} ({:?})", index, word);

        Ok(Generation { last_token: last_token.to_string(), index, word, probabilities })
    }

    /// Tokenize `prompt` and run the pipeline
    pub fn generate<R: Rng + ?Sized>(&self, prompt: &str, rng: &mut R) -> Result<Generation> {
        let tokens = self.tokenizer.encode(prompt);
        self.infer(&tokens, rng)
    }
}
