//! Frontend application shell.
//!
//! # Architecture Overview
//!
//! ```text
//!   config file / env / CLI
//!            │
//!            ▼
//!   ┌────────────────┐     ┌──────────────┐
//!   │   AppConfig    │────▶│  Providers   │  Router + ApiClient
//!   └────────────────┘     └──────┬───────┘
//!                                 │
//!                                 ▼
//!                          ┌──────────────┐   GET {base}/users   ┌─────────┐
//!                          │   AppRoot    │─────────────────────▶│ Backend │
//!                          │   init()     │◀─────────────────────│   API   │
//!                          └──────┬───────┘   JSON / failure     └─────────┘
//!                                 │
//!                                 ▼
//!                          diagnostic log
//! ```

use std::path::PathBuf;

use clap::Parser;

use frontend::config::{resolve_config, Overrides};
use frontend::lifecycle::{signals, startup};
use frontend::observability::init_logging;

#[derive(Parser)]
#[command(name = "frontend")]
#[command(about = "Application shell that loads users from the backend API", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base address, overriding the configuration file.
    #[arg(long, env = "FRONTEND_API_BASE_URL")]
    base_url: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let overrides = Overrides {
        base_url: cli.base_url,
        log_level: cli.log_level,
    };
    let config = resolve_config(cli.config.as_deref(), &overrides)?;

    init_logging(&config.observability.log_level);

    tracing::info!(
        base_url = %config.api.base_url,
        timeout_secs = config.api.timeout_secs,
        "frontend v0.1.0 starting"
    );

    let mut running = startup::start(&config)?;

    tokio::select! {
        _ = running.root.settled() => {}
        _ = signals::wait_for_ctrl_c() => {
            tracing::info!("Interrupted, tearing down");
        }
    }

    running.root.destroy();

    tracing::info!("Shutdown complete");
    Ok(())
}
