//! roster: the users REST service.
//!
//! Reads `HOST` / `PORT` from the environment and `RUST_LOG` for log
//! filtering (default `info`).

use std::process;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use roster::config::Config;
use roster::env::Env;
use roster::{Server, app};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run().await {
        tracing::error!("{err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::load(&Env::real()).context("loading configuration")?;
    let router = app::router(app::AppState::seeded());

    Server::bind(config.addr())
        .serve(router)
        .await
        .with_context(|| format!("serving on {}", config.addr()))
}
