//! mini-llm command-line front end
//!
//! Prints the prompt's tokens followed by one mock generation.

pub mod cli;

use std::io::Write;

use anyhow::{Context, Result};
use mini_llm_core::Error;
use mini_llm_runtime::{rng_from_seed, MockModel};

pub use cli::Cli;

/// Usage line printed when the prompt is missing
pub fn usage(program: &str) -> String {
    format!("Usage: {} \"Your prompt here\"", program)
}

/// Run one invocation, writing the normal output to `out`
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let prompt = cli.prompt.as_deref().ok_or_else(|| Error::MissingArgument("prompt".into()))?;
    if !cli.ignored.is_empty() {
        log::debug!("Ignoring {} argument(s) after the prompt", cli.ignored.len());
    }

    let config = cli.load_config()?;
    let model = MockModel::new(&config).context("invalid model configuration")?;
    log::debug!(
        "Model: vocab_size={}, embed_dim={}, seed={:?}",
        model.vocabulary().len(),
        model.embed_dim(),
        config.seed
    );

    let tokens = model.tokenizer().encode(prompt);
    writeln!(out, "Tokens:")?;
    for (i, token) in tokens.iter().enumerate() {
        writeln!(out, "{}: {}", i, token)?;
    }

    let mut rng = rng_from_seed(config.seed);
    match model.infer(&tokens, &mut rng) {
        Ok(generation) => writeln!(out, "\nGenerated output: {}", generation)?,
        Err(Error::EmptyTokenSequence) => writeln!(out, "No tokens found.")?,
        Err(e) => return Err(e).context("inference failed"),
    }

    Ok(())
}

/// Whether `err` is the missing-prompt condition
pub fn is_missing_argument(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<Error>(), Some(Error::MissingArgument(_)))
}
