//! Whitespace tokenizer
//!
//! Splits a prompt on runs of Unicode whitespace. There is no subword merging
//! and no token ids: a token is just the substring itself.

use crate::error::{Error, Result};

/// A whitespace-delimited piece of the prompt
pub type Token = String;

/// Split `text` into its whitespace-separated runs, in input order.
///
/// Leading and trailing whitespace is ignored and empty input yields an empty
/// vector.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace().map(str::to_owned).collect()
}

/// Stateless tokenizer handle
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Encode text into tokens
    pub fn encode(&self, text: &str) -> Vec<Token> {
        tokenize(text)
    }

    /// Last token of a sequence, the one the mock model conditions on
    pub fn last_token<'a>(&self, tokens: &'a [Token]) -> Result<&'a str> {
        tokens.last().map(String::as_str).ok_or(Error::EmptyTokenSequence)
    }
}
