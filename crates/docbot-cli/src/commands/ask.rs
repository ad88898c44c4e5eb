//! Ask command - answer one question from the command line.

use super::load_config;
use anyhow::{Context, Result};
use colored::Colorize;
use docbot_server::build_chain;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use tokio::runtime::Runtime;

pub fn run(explicit: Option<&Path>, question: &str) -> Result<()> {
    let config = load_config(explicit)?;
    let rt = Runtime::new().context("Failed to create async runtime")?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Loading documents...");

    let chain = match rt.block_on(build_chain(&config)) {
        Ok(chain) => chain,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e).context("Failed to prepare documents");
        }
    };

    pb.set_message(format!(
        "Thinking ({} segments indexed)...",
        chain.segment_count()
    ));
    let answer = rt.block_on(chain.execute(question));
    pb.finish_and_clear();

    let answer = answer.context("Failed to answer question")?;

    println!("{} {}", "Question:".cyan().bold(), question);
    println!("{}", "─".repeat(70));
    println!("{}", answer);

    Ok(())
}
