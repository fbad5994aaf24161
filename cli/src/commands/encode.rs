//! Encode command implementation.

use clap::{Parser, ValueEnum};

/// Output layout for encoded text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per word, symbols separated by spaces
    Plain,
    /// One JSON object per word: {"word": ..., "tokens": [...]}
    Jsonl,
}

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    /// Path to the trained tokenizer model directory
    #[arg(short, long)]
    pub tokenizer: String,

    /// Text to encode ("-" for stdin)
    #[arg(short, long)]
    pub input: String,

    /// Treat --input as a file path instead of literal text
    #[arg(short, long, default_value_t = false)]
    pub file: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<String>,
}

use super::read_input;
use anyhow::{Context, Result as AnyhowResult};
use mergetok_tokenizer::{Normalizer, Tokenizer};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct EncodedWord<'a> {
    word: &'a str,
    tokens: Vec<&'a str>,
}

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    // Load tokenizer
    let tokenizer_path = Path::new(&cmd.tokenizer);
    let tokenizer = Tokenizer::load(tokenizer_path)
        .with_context(|| format!("failed to load model from {}", cmd.tokenizer))?;

    let input_text = if cmd.file || cmd.input == "-" {
        read_input(&cmd.input)?
    } else {
        cmd.input.clone()
    };
    let text = Normalizer::default().clean(&input_text);

    let output = render(&tokenizer, &text, cmd.format)?;
    let words = text.split_whitespace().count();

    match &cmd.output {
        Some(path) => {
            std::fs::write(path, &output).with_context(|| format!("failed to write {}", path))?;
            println!("Encoded {} words to {}", words, path);
        }
        None => {
            print!("{}", output);
        }
    }

    Ok(())
}

fn render(tokenizer: &Tokenizer, text: &str, format: OutputFormat) -> AnyhowResult<String> {
    let groups = tokenizer.encode_text(text);
    let mut out = String::new();

    match format {
        OutputFormat::Plain => {
            for group in &groups {
                out.push_str(group);
                out.push('\n');
            }
        }
        OutputFormat::Jsonl => {
            for (word, group) in text.split_whitespace().zip(&groups) {
                let tokens = group.split(' ').collect();
                out.push_str(&serde_json::to_string(&EncodedWord { word, tokens })?);
                out.push('\n');
            }
        }
    }

    Ok(out)
}
