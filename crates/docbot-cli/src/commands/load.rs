//! Load command - check that the configured documents parse.

use super::load_config;
use anyhow::{Context, Result};
use colored::Colorize;
use docbot_ingest::{ChunkConfig, Chunker, DocumentLoader};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use tokio::runtime::Runtime;

pub fn run(explicit: Option<&Path>, sources: Vec<String>, show_text: bool) -> Result<()> {
    let config = load_config(explicit)?;
    let sources = if sources.is_empty() {
        config.documents.sources.clone()
    } else {
        sources
    };

    if sources.is_empty() {
        println!(
            "{} No document sources. Add one with {}",
            "Note:".yellow(),
            "docbot config add-source <path-or-url>".cyan()
        );
        return Ok(());
    }

    let loader = DocumentLoader::new(Duration::from_secs(config.ollama.timeout_seconds))
        .context("Failed to create document loader")?;
    let chunker = Chunker::new(ChunkConfig::from(&config.chunking));
    let rt = Runtime::new().context("Failed to create async runtime")?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Loading {} sources...", sources.len()));

    let result = rt.block_on(loader.load_all(&sources));
    pb.finish_and_clear();
    let documents = result?;

    println!("{}", "Loaded Documents".cyan().bold());
    println!("{}", "─".repeat(70));

    let mut total_segments = 0;
    for doc in &documents {
        let segments = chunker.chunk_text(&doc.text).len();
        total_segments += segments;

        println!(
            "  {} {} {}",
            "✓".green(),
            doc.source,
            format!(
                "({}, {} chars, {} segments)",
                doc.format,
                doc.text.chars().count(),
                segments
            )
            .dimmed()
        );

        if show_text {
            println!("{}", doc.text);
            println!();
        }
    }

    println!();
    println!(
        "{} documents, {} segments",
        documents.len().to_string().green().bold(),
        total_segments.to_string().green().bold()
    );

    Ok(())
}
