//! Random projection weights
//!
//! The mock model has no trained parameters. Each inference draws a fresh
//! `[embed_dim, vocab_size]` matrix from the caller's random source.

use mini_llm_core::error::{Error, Result};
use mini_llm_core::{Matrix, Shape};
use rand::distr::{Distribution, Uniform};
use rand::Rng;

/// Lower bound of the weight distribution (inclusive)
pub const WEIGHT_MIN: f32 = -1.0;
/// Upper bound of the weight distribution (exclusive)
pub const WEIGHT_MAX: f32 = 1.0;

/// Uniform `[WEIGHT_MIN, WEIGHT_MAX)` weight generator
#[derive(Debug, Clone)]
pub struct WeightGenerator {
    dist: Uniform<f32>,
}

impl WeightGenerator {
    pub fn new() -> Result<Self> {
        Self::with_range(WEIGHT_MIN, WEIGHT_MAX)
    }

    /// Generator over a custom half-open range `[low, high)`
    pub fn with_range(low: f32, high: f32) -> Result<Self> {
        let dist = Uniform::new(low, high).map_err(|e| {
            Error::InvalidConfig(format!("invalid weight range [{}, {}): {}", low, high, e))
        })?;
        Ok(Self { dist })
    }

    /// Draw a `rows × cols` matrix of independent weights
    pub fn generate<R: Rng + ?Sized>(&self, rows: usize, cols: usize, rng: &mut R) -> Result<Matrix> {
        Shape::new(vec![rows, cols]).validate()?;

        let data: Vec<f32> = (0..rows * cols).map(|_| self.dist.sample(rng)).collect();
        Matrix::from_vec(rows, cols, data)
    }
}
