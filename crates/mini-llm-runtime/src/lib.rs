//! mini-llm mock inference runtime
//!
//! Composes the core types and CPU kernels into a single straight-line
//! pipeline: embed the last token, project it through random weights, and
//! sample a word from the vocabulary.

mod embedding;
mod inference;
mod sampling;
mod weights;

pub use embedding::{Embedder, EMBED_MODULUS};
pub use inference::{rng_from_seed, Generation, MockModel};
pub use sampling::{sample_categorical, Sampler, Sampling, GREEDY_TEMPERATURE};
pub use weights::{WeightGenerator, WEIGHT_MAX, WEIGHT_MIN};

/// Runtime version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
