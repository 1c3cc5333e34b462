use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use driftwood_core::config::RootConfig;
use driftwood_infrastructure::{ConfigService, SecretService};
use driftwood_server::{bootstrap, http, logging};

#[derive(Debug, Parser)]
#[command(name = "driftwood", version, about = "Driftwood LLM simulation lab server")]
struct Args {
    /// Socket address to listen on
    #[arg(long, env = "DRIFTWOOD_HTTP_ADDR")]
    http_addr: Option<String>,

    /// Directory for scenario and run records
    #[arg(long, env = "DRIFTWOOD_STORAGE_DIR")]
    storage_dir: Option<PathBuf>,

    /// Path to config.toml
    #[arg(long, env = "DRIFTWOOD_CONFIG")]
    config: Option<PathBuf>,

    /// Path to secret.json
    #[arg(long, env = "DRIFTWOOD_SECRET_FILE")]
    secret_file: Option<PathBuf>,

    /// Keep all records in memory
    #[arg(long)]
    in_memory: bool,

    /// Upper bound on one completion call, in seconds
    #[arg(long)]
    request_timeout_secs: Option<u64>,

    /// Emit JSON log lines
    #[arg(long)]
    log_json: bool,
}

impl Args {
    /// Flags override whatever the config file set.
    fn apply(&self, config: &mut RootConfig) {
        if let Some(addr) = &self.http_addr {
            config.server.http_addr = addr.clone();
        }
        if let Some(dir) = &self.storage_dir {
            config.server.storage_dir = Some(dir.clone());
        }
        if self.in_memory {
            config.server.in_memory = true;
        }
        if let Some(secs) = self.request_timeout_secs {
            config.simulation.request_timeout_secs = secs;
        }
        if self.log_json {
            config.logging.json = true;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ConfigService::load(args.config.as_deref())?;
    args.apply(&mut config);

    let _log_guard = logging::init(&config.logging)?;

    let openai = SecretService::resolve_openai(args.secret_file.as_deref())?;
    let state = bootstrap::build_app_state(&config, openai).await?;
    let app = http::router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.http_addr)
        .await
        .with_context(|| format!("failed to bind http listener on {}", config.server.http_addr))?;
    tracing::info!("Driftwood listening on {}", config.server.http_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
        })
        .await
        .context("http server crashed")?;

    Ok(())
}
