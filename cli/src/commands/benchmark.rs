//! Benchmark command implementation.

use clap::Parser;

/// Benchmark command arguments.
#[derive(Parser)]
pub struct BenchmarkCommand {
    /// Path to the trained tokenizer model directory
    #[arg(short, long)]
    pub tokenizer: String,

    /// Path to input text file for benchmarking
    #[arg(short, long)]
    pub input: String,

    /// Number of iterations to run
    #[arg(short = 'n', long, default_value_t = 100)]
    pub iterations: usize,
}

use super::read_input;
use anyhow::{ensure, Context, Result as AnyhowResult};
use mergetok_tokenizer::{Normalizer, Tokenizer};
use std::path::Path;
use std::time::Instant;

pub fn run(cmd: BenchmarkCommand) -> AnyhowResult<()> {
    ensure!(cmd.iterations > 0, "iterations must be at least 1");

    // Load tokenizer
    let tokenizer_path = Path::new(&cmd.tokenizer);
    let tokenizer = Tokenizer::load(tokenizer_path)
        .with_context(|| format!("failed to load model from {}", cmd.tokenizer))?;

    // Read input text
    let text = Normalizer::default().clean(&read_input(&cmd.input)?);
    let words = text.split_whitespace().count();

    println!("Benchmarking encoding...");
    println!("  Text length: {} bytes", text.len());
    println!("  Words: {}", words);
    println!("  Merges: {}", tokenizer.len());
    println!("  Iterations: {}", cmd.iterations);
    println!();

    // Warmup
    let groups = tokenizer.encode_text(&text);
    let tokens: usize = groups.iter().map(|g| g.split(' ').count()).sum();

    // Benchmark
    let start = Instant::now();
    for _ in 0..cmd.iterations {
        std::hint::black_box(tokenizer.encode_text(std::hint::black_box(&text)));
    }
    let elapsed = start.elapsed();

    let avg_time_ms = elapsed.as_secs_f64() * 1000.0 / cmd.iterations as f64;
    let words_per_sec = if avg_time_ms > 0.0 {
        words as f64 / (avg_time_ms / 1000.0)
    } else {
        0.0
    };

    println!("Results:");
    println!("  Total time: {:.2}s", elapsed.as_secs_f64());
    println!("  Average time: {:.3}ms", avg_time_ms);
    println!("  Tokens per pass: {}", tokens);
    println!("  Throughput: {:.0} words/s", words_per_sec);

    Ok(())
}
