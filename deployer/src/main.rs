//! `deployer` -- deploys the marketplace contracts to a Concordium node.
//!
//! # Environment variables
//!
//! | Variable           | Required | Default         | Description                              |
//! |--------------------|----------|-----------------|------------------------------------------|
//! | `EXPLORER_API_KEY` | no       | --              | Enables verification on public networks  |
//! | `UPDATE_FRONT_END` | no       | --              | Enables the frontend sync step           |
//! | `RUST_LOG`         | no       | `deployer=info` | Log filter                               |

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use deployer::config::DEFAULT_CONFIG_PATH;
use deployer::{ConcordiumClient, DeployConfig, Deployer, EnvSettings};

#[derive(Debug, Parser)]
#[command(name = "deployer", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the deployment steps against a network.
    Deploy {
        /// Network name from the config.
        #[arg(long)]
        network: String,

        /// Only run steps carrying one of these tags.
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,

        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deployer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match Cli::parse().command {
        Command::Deploy {
            network,
            tags,
            config,
        } => {
            let config = DeployConfig::load(&config)
                .with_context(|| format!("loading {}", config.display()))?;
            let node = config.network(&network)?;
            let client = ConcordiumClient::new(
                config.client_binary.clone(),
                node.grpc_ip.clone(),
                node.grpc_port,
            );

            tracing::info!(network = %network, tags = ?tags, "Starting deployment");
            Deployer::new(client, config, &network, EnvSettings::from_env())?
                .run(&tags)
                .await
                .with_context(|| format!("deploying to {network}"))?;
        }
    }

    Ok(())
}
