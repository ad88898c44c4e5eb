//! Docbot CLI - Chat with a fixed set of documents

mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Docbot - Chat with your documents
#[derive(Parser)]
#[command(name = "docbot")]
#[command(version)]
#[command(about = "Answer questions from a fixed set of documents", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this config file instead of the default one
    #[arg(short, long, global = true, env = "DOCBOT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default config file
    Init,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Load the documents and start the chat server
    Serve {
        /// Address to bind (default: from config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (default: from config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Load the documents and answer a single question
    Ask {
        /// Your question
        question: String,
    },

    /// Load and parse the configured documents without starting anything
    Load {
        /// Sources to load instead of the configured ones
        sources: Vec<String>,

        /// Print the extracted text of each document
        #[arg(long)]
        show_text: bool,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the config file location
    Path,

    /// Add a document source
    AddSource {
        /// URL, file or directory
        source: String,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.as_deref();

    let result = match cli.command {
        Commands::Init => commands::init::run(config_path),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::show(config_path),
            ConfigCommands::Path => commands::config::path(config_path),
            ConfigCommands::AddSource { source } => {
                commands::config::add_source(config_path, &source)
            }
        },
        Commands::Serve { host, port } => commands::serve::run(config_path, host, port),
        Commands::Ask { question } => commands::ask::run(config_path, &question),
        Commands::Load { sources, show_text } => {
            commands::load::run(config_path, sources, show_text)
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
