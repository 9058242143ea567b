//! Core primitives for mini-llm
//!
//! This crate provides the building blocks shared by the kernels and the mock runtime:
//! - Error type
//! - Whitespace tokenizer
//! - Output vocabulary
//! - Row-major matrix type
//! - Model configuration

pub mod config;
pub mod error;
pub mod tensor;
pub mod tokenizer;
pub mod vocab;

pub use config::{MiniLlmConfig, DEFAULT_EMBED_DIM};
pub use error::{Error, Result};
pub use tensor::{Matrix, Shape};
pub use tokenizer::{tokenize, Token, Tokenizer};
pub use vocab::{Vocabulary, DEFAULT_WORDS};

/// Core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
