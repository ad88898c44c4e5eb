//! Initialize Docbot.

use super::config_file;
use anyhow::{Context, Result};
use colored::Colorize;
use docbot_config::Config;
use std::path::Path;

pub fn run(explicit: Option<&Path>) -> Result<()> {
    let path = config_file(explicit)?;

    if path.exists() {
        println!("{} Docbot is already initialized.", "Note:".yellow().bold());
        println!("  Config: {}", path.display());
        return Ok(());
    }

    println!("{}", "Initializing Docbot...".cyan().bold());

    Config::create_default_file(&path).context("Failed to create config file")?;
    println!("  {} Created config: {}", "✓".green(), path.display());

    println!();
    println!("{}", "Docbot initialized successfully!".green().bold());
    println!();
    println!("Next steps:");
    println!(
        "  1. Add documents: {}",
        "docbot config add-source ./docs".cyan()
    );
    println!("  2. Check they parse: {}", "docbot load".cyan());
    println!("  3. Start chatting: {}", "docbot serve".cyan());

    Ok(())
}
