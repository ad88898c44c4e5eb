//! Configuration commands.

use super::{config_file, load_config};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

pub fn show(explicit: Option<&Path>) -> Result<()> {
    let path = config_file(explicit)?;

    if !path.exists() {
        println!(
            "{} No config file at {}, showing defaults.",
            "Note:".yellow(),
            path.display()
        );
    }

    let config = load_config(explicit)?;
    let contents = config
        .to_toml_string()
        .context("Failed to render configuration")?;

    println!("{}", "Current Configuration".cyan().bold());
    println!("{}", "─".repeat(50));
    println!("{}", contents);

    Ok(())
}

pub fn path(explicit: Option<&Path>) -> Result<()> {
    println!("{}", config_file(explicit)?.display());
    Ok(())
}

pub fn add_source(explicit: Option<&Path>, source: &str) -> Result<()> {
    let path = config_file(explicit)?;
    let mut config = load_config(explicit)?;

    if config.documents.sources.iter().any(|s| s == source) {
        println!(
            "{} Source already configured: {}",
            "Note:".yellow(),
            source
        );
        return Ok(());
    }

    config.add_source(source.to_string());
    config.save_to(&path).context("Failed to save config")?;

    println!("{} Added source: {}", "✓".green(), source);

    Ok(())
}
