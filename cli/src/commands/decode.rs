//! Decode command implementation.

use clap::Parser;

/// Decode command arguments.
#[derive(Parser)]
pub struct DecodeCommand {
    /// Path to the trained tokenizer model directory
    #[arg(short, long)]
    pub tokenizer: String,

    /// Encoded text, one word per line as written by `encode` ("-" for stdin)
    #[arg(short, long)]
    pub input: String,

    /// Treat --input as a file path instead of literal text
    #[arg(short, long, default_value_t = false)]
    pub file: bool,
}

use super::read_input;
use anyhow::{Context, Result as AnyhowResult};
use mergetok_tokenizer::Tokenizer;
use std::path::Path;

pub fn run(cmd: DecodeCommand) -> AnyhowResult<()> {
    // Load tokenizer
    let tokenizer_path = Path::new(&cmd.tokenizer);
    let tokenizer = Tokenizer::load(tokenizer_path)
        .with_context(|| format!("failed to load model from {}", cmd.tokenizer))?;

    let encoded = if cmd.file || cmd.input == "-" {
        read_input(&cmd.input)?
    } else {
        cmd.input.clone()
    };

    // Each line holds the symbols of exactly one word
    let groups: Vec<&str> = encoded
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    println!("{}", tokenizer.decode_text(&groups));

    Ok(())
}
