use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use mindvault::ai::{Action, AssistRequest, AssistService, Tone};
use mindvault::config::Config;
use mindvault::server::{init_tracing, AppServer};

#[derive(Debug, Parser)]
#[command(name = "mindvault", version, about = "MindVault AI assist service")]
struct Cli {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server
    Serve {
        /// Override the configured bind address
        #[arg(long)]
        bind: Option<String>,
    },
    /// Run a single assist action and print the JSON result
    Run {
        #[arg(long, value_enum, ignore_case = true)]
        action: Action,
        #[arg(long)]
        content: Option<String>,
        #[arg(long, value_enum, ignore_case = true)]
        tone: Option<Tone>,
        #[arg(long)]
        prompt: Option<String>,
        #[arg(long)]
        question: Option<String>,
        #[arg(long)]
        notes_context: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    match cli.command {
        Command::Serve { bind } => {
            let bind_addr = bind.unwrap_or_else(|| config.server.bind_addr.clone());
            let mut server = AppServer::new(&config)?;
            server.try_bind(&bind_addr).await?;
            server.run().await?;
        }
        Command::Run {
            action,
            content,
            tone,
            prompt,
            question,
            notes_context,
        } => {
            let request = AssistRequest {
                action,
                content,
                tone,
                prompt,
                question,
                notes_context,
            };
            let service = AssistService::new(config.ai.clone())?;
            let result = service.assist(&request).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
