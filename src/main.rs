//! salary-draft server
//!
//! Loads payroll and employee configuration and serves the salary draft API.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use salary_draft::api::{AppState, create_router};
use salary_draft::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Salary draft API server
#[derive(Parser, Debug)]
#[command(name = "salary-draft")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding payroll.yaml and employees.yaml
    #[arg(short, long, default_value = "./config/default")]
    config: PathBuf,

    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = ConfigLoader::load(&cli.config)
        .with_context(|| format!("failed to load config from {}", cli.config.display()))?;
    info!(
        config = %cli.config.display(),
        employees = config.employees().len(),
        currency = %config.payroll().currency,
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("failed to bind {}", cli.bind))?;
    info!(addr = %cli.bind, "Listening");

    axum::serve(listener, router)
        .await
        .context("server error")?;
    Ok(())
}
