//! chat-gateway - rate-limited chat gateway for Azure OpenAI

#![allow(missing_docs)]

use chat_gateway::utils::logging::init_tracing;
use chat_gateway::{Config, Gateway, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Command line interface
#[derive(Debug, Parser)]
#[command(name = "gateway", version, about)]
struct Cli {
    /// YAML configuration file; environment variables override its values
    #[arg(short, long, env = "GATEWAY_CONFIG")]
    config: Option<PathBuf>,

    /// Bind host, overriding configuration
    #[arg(long)]
    host: Option<String>,

    /// Bind port, overriding configuration
    #[arg(short, long)]
    port: Option<u16>,
}

async fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::from_env()?,
    };

    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.validate()?;

    Ok(config)
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli).await?;
    init_tracing(&config.logging)?;

    info!(address = %config.server.address(), "Configuration loaded");

    Gateway::new(config)?.run().await
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is not an error.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
