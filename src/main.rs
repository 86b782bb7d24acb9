#![warn(clippy::all, clippy::pedantic)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use digiktav::{Cli, Config, app};

#[tokio::main]
async fn main() -> Result<()> {
    // Install default crypto provider for Rustls TLS.
    if let Err(e) = rustls::crypto::ring::default_provider().install_default() {
        eprintln!("Warning: Failed to install default crypto provider: {e:?}");
    }

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::load_or_init_at(path)?,
        None => Config::load_or_init()?,
    };
    config.apply_env_overrides();
    config.validate()?;

    // Logs go to stderr so command output can be piped.
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        config.tracing_level()?
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    app::dispatch(cli, &config).await
}
