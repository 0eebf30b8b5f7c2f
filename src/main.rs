//! Condense CLI - extractive summarisation of web pages, videos and PDFs
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments, wiring the pipeline together and presenting errors.

use clap::Parser;
use colored::Colorize;
use condense::{extract, summarize, Config, Source};
use std::path::PathBuf;

/// Summary length bounds exposed on the command line (the "slider").
const MIN_SENTENCES: u64 = 1;
const MAX_SENTENCES: u64 = 20;

#[derive(Parser)]
#[command(name = "condense")]
#[command(author, version, about = "Extractive summarisation for web pages, videos and PDFs", long_about = None)]
struct Cli {
    /// URL, YouTube link or file path to summarise
    source: String,

    /// Summary length in sentences
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(MIN_SENTENCES..=MAX_SENTENCES))]
    sentences: Option<u64>,

    /// Maximum chunk size in words for long documents
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    chunk_words: Option<u64>,

    /// Show raw extracted text instead of a summary
    #[arg(long)]
    raw: bool,

    /// Path to a configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let target_sentences = cli
        .sentences
        .map(|n| n as usize)
        .unwrap_or(config.summary.sentences);
    let max_chunk_words = cli
        .chunk_words
        .map(|n| n as usize)
        .unwrap_or(config.summary.max_chunk_words);

    let source = Source::detect(&cli.source);
    println!("Fetching: {}", source.describe());

    let document = match extract::extract(source, &config).await {
        Ok(document) => document,
        Err(e) if e.is_no_content() => {
            eprintln!("{}", "no text found or transcript disabled".red());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{} {}", "could not extract text from source:".red(), e);
            std::process::exit(1);
        }
    };

    if cli.raw {
        // Just show raw extracted text
        if let Some(title) = &document.title {
            println!("\n=== {} ===\n", title.bold());
        }
        println!("{}", document.text);
        println!("\n--- Extracted {} characters ---", document.text.len());
        return Ok(());
    }

    println!(
        "Summarising {} words into at most {} sentences...\n",
        condense::tokenize::word_count(&document.text),
        target_sentences
    );

    match summarize(&document.text, target_sentences, max_chunk_words) {
        Ok(summary) => {
            if let Some(title) = &document.title {
                println!("=== {} ===\n", title.bold());
            }
            println!("{}", summary.to_text());
        }
        Err(e) => {
            eprintln!("{} {}", "could not summarise:".red(), e);
            std::process::exit(1);
        }
    }

    Ok(())
}
