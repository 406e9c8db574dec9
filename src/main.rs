mod aggregate;
mod cli;
mod config;
mod error;
mod http;
mod kubernetes;
mod policy;
mod types;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use cli::Cli;
use config::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::from(&cli);
    let app = http::router(settings.clone());

    let listener = TcpListener::bind(settings.listen).await?;
    info!("Listening on {}", settings.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
