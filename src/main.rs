//! HTTP server for the invoice ROI service.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use invoice_roi::api::{AppState, create_router};
use invoice_roi::config::ConfigLoader;

#[derive(Parser, Debug)]
#[command(name = "invoice-roi")]
#[command(about = "Serves the invoice processing ROI calculator", long_about = None)]
struct Cli {
    /// Path to the YAML settings file
    #[arg(short, long, env = "ROI_CONFIG", default_value = "config/roi.yaml")]
    config: PathBuf,

    /// Address to bind, overriding the settings file
    #[arg(short, long, env = "ROI_BIND")]
    bind: Option<String>,

    /// Emit logs as JSON
    #[arg(long, env = "ROI_LOG_JSON")]
    log_json: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let mut config = ConfigLoader::load(&cli.config)
        .with_context(|| format!("loading settings from {}", cli.config.display()))?;
    if let Some(bind) = cli.bind {
        config = config.with_bind_address(bind);
    }

    let bind_address = config.settings().server.bind_address.clone();
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("binding {bind_address}"))?;
    info!(address = %bind_address, "Invoice ROI service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("server error")?;

    Ok(())
}
