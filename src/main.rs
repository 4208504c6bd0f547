//! Sky Bet sports API command-line client.
//!
//! Resolves a root request builder from a TOML file and command-line flags,
//! runs one request and prints the JSON result.

use clap::Parser;
use skybet_api::cli::Cli;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,skybet_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    debug!(base_uri = %config.client.base_uri, "Resolved configuration");

    let root = config.root_builder()?;
    let request = cli.command.build(&root)?;
    info!(
        endpoint = request.endpoint_path().unwrap_or("/"),
        "Querying Sky Bet sports API"
    );

    let value = request.get().await?;
    println!("{}", serde_json::to_string_pretty(&value)?);

    Ok(())
}
