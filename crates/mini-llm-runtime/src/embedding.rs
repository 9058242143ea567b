//! Deterministic token embedding
//!
//! Stand-in for a learned embedding table: the vector depends only on the
//! first character of the token.

use mini_llm_core::error::{Error, Result};
use mini_llm_core::{Matrix, Token};

/// Modulus of the embedding formula; independent of the vocabulary size
pub const EMBED_MODULUS: u64 = 7;

/// Maps a token to a fixed-width vector
///
/// Component `i` is `((c + i) mod 7) / 7`, where `c` is the Unicode scalar
/// value of the token's first character.
#[derive(Debug, Clone, Copy)]
pub struct Embedder {
    dim: usize,
}

impl Embedder {
    pub fn new(dim: usize) -> Result<Self> {
        if dim == 0 {
            return Err(Error::InvalidShape("embedding dimension must be > 0".into()));
        }
        Ok(Self { dim })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Embed a single token
    pub fn embed(&self, token: &str) -> Result<Vec<f32>> {
        let first = token.chars().next().ok_or(Error::EmptyToken)?;
        let code = u64::from(u32::from(first));

        Ok((0..self.dim as u64)
            .map(|i| ((code + i) % EMBED_MODULUS) as f32 / EMBED_MODULUS as f32)
            .collect())
    }

    /// Embed the last token of a sequence as a 1×dim input matrix
    pub fn embed_last(&self, tokens: &[Token]) -> Result<Matrix> {
        let last = tokens.last().ok_or(Error::EmptyTokenSequence)?;
        Ok(Matrix::row_vector(self.embed(last)?))
    }
}
