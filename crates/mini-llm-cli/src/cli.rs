//! Command-line argument parsing for mini-llm.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mini_llm_core::{MiniLlmConfig, Vocabulary};

/// mini-llm: toy next-word generator over a fixed vocabulary.
#[derive(Parser, Debug, Default)]
#[command(name = "mini-llm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Prompt text, quoted as a single argument
    #[arg(allow_hyphen_values = true)]
    pub prompt: Option<String>,

    /// Embedding vector width
    #[arg(short = 'd', long = "embed-dim")]
    pub embed_dim: Option<usize>,

    /// Comma-separated output vocabulary
    #[arg(long = "vocab", value_name = "WORDS")]
    pub vocab: Option<String>,

    /// Seed for a reproducible run
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Sampling temperature (0 = greedy)
    #[arg(short = 't', long = "temperature")]
    pub temperature: Option<f32>,

    /// JSON configuration file
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Words after the prompt; ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

impl Cli {
    /// Configuration file (or defaults) with command-line overrides applied
    pub fn load_config(&self) -> Result<MiniLlmConfig> {
        let mut config = match &self.config {
            Some(path) => MiniLlmConfig::from_json_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => MiniLlmConfig::default(),
        };

        if let Some(embed_dim) = self.embed_dim {
            config = config.with_embed_dim(embed_dim);
        }
        if let Some(words) = &self.vocab {
            config = config.with_vocabulary(Vocabulary::parse_list(words)?);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(temperature) = self.temperature {
            config = config.with_temperature(temperature);
        }

        config.validate()?;
        Ok(config)
    }
}
