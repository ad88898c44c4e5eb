//! Serve command - start the chat server.

use super::load_config;
use anyhow::{Context, Result};
use colored::Colorize;
use docbot_server::DocbotServer;
use std::path::Path;
use tokio::runtime::Runtime;

pub fn run(explicit: Option<&Path>, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut config = load_config(explicit)?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    println!(
        "{} {} document sources",
        "Loading".cyan().bold(),
        config.documents.sources.len()
    );

    let rt = Runtime::new().context("Failed to create async runtime")?;
    rt.block_on(async {
        let server = DocbotServer::from_config(config)
            .await
            .context("Failed to start Docbot")?;

        println!(
            "{} http://{}",
            "Serving on".green().bold(),
            server.address()
        );

        server.start().await.context("Server error")
    })
}
