//! Train command implementation.

use clap::Parser;

/// Train command arguments.
#[derive(Parser)]
pub struct TrainCommand {
    /// Path to the training text ("-" for stdin)
    #[arg(short, long)]
    pub input: String,

    /// Output directory for the trained model
    #[arg(short, long)]
    pub output: String,

    /// Maximum number of merges to learn
    #[arg(short, long, default_value_t = 1_000)]
    pub max_merges: usize,

    /// Word boundary marker
    #[arg(short, long, default_value = mergetok_core::DEFAULT_BOUNDARY)]
    pub boundary: String,

    /// Stop once the best pair occurs fewer times than this
    #[arg(long, default_value_t = 1)]
    pub min_frequency: u64,

    /// Count and merge across words in parallel
    #[arg(short, long, default_value_t = false)]
    pub parallel: bool,

    /// Unicode normalization applied before training (none, nfc, nfkc)
    #[arg(short, long, default_value = "none")]
    pub normalization: NormalizationForm,
}

use super::read_input;
use anyhow::{Context, Result as AnyhowResult};
use mergetok_tokenizer::{NormalizationForm, Normalizer, Tokenizer, TrainingConfig};
use std::path::Path;
use std::time::Instant;

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    let config = TrainingConfig::builder()
        .max_merges(cmd.max_merges)
        .boundary(cmd.boundary.clone())
        .min_frequency(cmd.min_frequency)
        .parallel(cmd.parallel)
        .build()?;

    // Read training data
    let start = Instant::now();
    let raw = read_input(&cmd.input)?;
    let text = Normalizer::new(cmd.normalization).clean(&raw);
    log::info!(
        "Read {} bytes ({} after cleaning) in {:.2}s",
        raw.len(),
        text.len(),
        start.elapsed().as_secs_f64()
    );

    // Train
    let start = Instant::now();
    let tokenizer = Tokenizer::train(&text, &config)
        .with_context(|| format!("training on {} failed", cmd.input))?;
    println!(
        "Learned {} merges in {:.2}s",
        tokenizer.len(),
        start.elapsed().as_secs_f64()
    );

    // Save model
    let output_path = Path::new(&cmd.output);
    tokenizer
        .save(output_path)
        .with_context(|| format!("failed to save model to {}", cmd.output))?;
    println!("Model saved to {}", cmd.output);

    Ok(())
}
