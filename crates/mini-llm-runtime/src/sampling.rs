//! Logit processing and sampling
//!
//! Turns the logits of one inference step into a vocabulary index, either
//! greedily or by drawing from the softmax distribution. The random source is
//! always supplied by the caller so runs can be made reproducible.

use mini_llm_core::error::{Error, Result};
use mini_llm_cpu::{argmax, scale_logits, softmax};
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

/// Temperatures below this are treated as greedy decoding
pub const GREEDY_TEMPERATURE: f32 = 1e-7;

/// Sampling strategy
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Sampling {
    /// Always select the index with the highest logit
    ArgMax,
    /// Draw from softmax(logits / temperature)
    Categorical { temperature: f32 },
}

impl Default for Sampling {
    fn default() -> Self {
        Sampling::Categorical { temperature: 1.0 }
    }
}

/// Draw an index from a discrete distribution.
///
/// Inverse-CDF sampling: the first index whose running total exceeds a
/// uniform draw over `[0, total)` is returned, so weights summing to roughly
/// 1 need no renormalization.
pub fn sample_categorical<R: Rng + ?Sized>(probs: &[f32], rng: &mut R) -> Result<usize> {
    if probs.is_empty() {
        return Err(Error::EmptyLogits);
    }

    if let Some(i) = probs.iter().position(|p| p.is_infinite()) {
        return Err(Error::InvalidDistribution(format!("probability {} is {}", i, probs[i])));
    }

    let dist = WeightedIndex::new(probs)
        .map_err(|e| Error::InvalidDistribution(format!("Failed to create weighted index: {}", e)))?;
    Ok(dist.sample(rng))
}

/// Samples vocabulary indices from logits
#[derive(Clone, Debug, Default)]
pub struct Sampler {
    sampling: Sampling,
}

impl Sampler {
    pub fn from_sampling(sampling: Sampling) -> Self {
        Self { sampling }
    }

    /// Categorical sampling at `temperature`, or greedy when it is ~0
    pub fn from_temperature(temperature: f32) -> Self {
        let sampling = if temperature < GREEDY_TEMPERATURE {
            Sampling::ArgMax
        } else {
            Sampling::Categorical { temperature }
        };
        Self::from_sampling(sampling)
    }

    pub fn sampling_strategy(&self) -> &Sampling {
        &self.sampling
    }

    /// Probability distribution the strategy draws from
    ///
    /// Greedy decoding reports the untempered softmax.
    pub fn probabilities(&self, logits: &[f32]) -> Result<Vec<f32>> {
        match self.sampling {
            Sampling::ArgMax => softmax(logits),
            Sampling::Categorical { temperature } => {
                let mut scaled = logits.to_vec();
                scale_logits(&mut scaled, temperature)?;
                softmax(&scaled)
            }
        }
    }

    /// Sample an index from logits
    pub fn sample<R: Rng + ?Sized>(&self, logits: &[f32], rng: &mut R) -> Result<usize> {
        match self.sampling {
            Sampling::ArgMax => argmax(logits),
            Sampling::Categorical { .. } => {
                let probs = self.probabilities(logits)?;
                sample_categorical(&probs, rng)
            }
        }
    }
}
