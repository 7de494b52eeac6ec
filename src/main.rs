use anyhow::Result;
use clap::Parser;
use resume_builder::cli::{run, Cli};
use resume_builder::config::EnvironmentConfig;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("resume_builder=info,rocket=warn")),
        )
        .init();

    let cli = Cli::parse();

    let config = EnvironmentConfig::load()?;
    config.ensure_directories().await?;

    run(cli, config).await
}
