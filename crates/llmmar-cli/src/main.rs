//! llmmar CLI - chat with an Ollama server from the terminal.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

/// llmmar - a small chat client for a local Ollama server
#[derive(Parser)]
#[command(name = "llmmar")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding persisted settings (default: ~/.llmmar)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Keep settings in memory only
    #[arg(long, global = true, conflicts_with = "data_dir")]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat interactively (default)
    Chat,

    /// Check whether the configured server is reachable
    Status,

    /// Send a single prompt and print the response
    Send {
        /// Prompt text
        #[arg(required = true, num_args = 1..)]
        prompt: Vec<String>,
    },

    /// Show or change persisted settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the current settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update one or more settings
    Set {
        /// Server host or IP address (empty to unset)
        #[arg(long)]
        ip: Option<String>,
        /// Model name, e.g. qwen3:4b
        #[arg(long)]
        model: Option<String>,
        /// Request streamed responses (stored as `verbose`)
        #[arg(long, value_name = "BOOL")]
        stream: Option<bool>,
        /// Dark mode preference
        #[arg(long, value_name = "BOOL")]
        dark_mode: Option<bool>,
    },
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "warn" };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    let command = cli.command.unwrap_or(Commands::Chat);
    let storage = commands::StorageOptions {
        data_dir: cli.data_dir,
        ephemeral: cli.ephemeral,
    };

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| miette::miette!("Failed to start async runtime: {}", e))?;

    runtime.block_on(async move {
        let session = commands::open_session(&storage).await?;

        match command {
            Commands::Chat => commands::chat::run(&session).await,
            Commands::Status => commands::status::run(&session).await,
            Commands::Send { prompt } => commands::send::run(&session, &prompt.join(" ")).await,
            Commands::Settings { action } => match action {
                SettingsAction::Show { json } => commands::settings::show(&session, &storage, json),
                SettingsAction::Set {
                    ip,
                    model,
                    stream,
                    dark_mode,
                } => {
                    let changes = commands::settings::Changes {
                        ip,
                        model,
                        stream,
                        dark_mode,
                    };
                    commands::settings::set(&session, changes).await
                }
            },
        }
    })
}
