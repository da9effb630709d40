//! mutual-relay
//!
//! One-shot batch job:
//!
//! ```text
//!   ┌────────────┐   identity    ┌──────────────┐
//!   │   source   │──────────────▶│ dataset API  │
//!   │  (fetch)   │◀──────────────│              │
//!   └─────┬──────┘ users,webhook,└──────────────┘
//!         │        token
//!         ▼
//!   ┌────────────┐
//!   │   graph    │  mutual pairs (unordered set)
//!   └─────┬──────┘
//!         ▼
//!   ┌────────────┐   regNo +     ┌──────────────┐
//!   │  delivery  │──outcome─────▶│   webhook    │
//!   │ + retries  │  (≤ N tries)  │              │
//!   └────────────┘               └──────────────┘
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use mutual_relay::config::{ensure_valid, load_config, ConfigError, RelayConfig};
use mutual_relay::lifecycle::run_job;
use mutual_relay::observability::init_logging;

#[derive(Parser, Debug)]
#[command(name = "mutual-relay", version)]
#[command(about = "Find mutual followers in a remote dataset and deliver them to a webhook", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Caller name (overrides identity.name).
    #[arg(long)]
    name: Option<String>,

    /// Registration number (overrides identity.reg_no).
    #[arg(long)]
    reg_no: Option<String>,

    /// Contact email (overrides identity.email).
    #[arg(long)]
    email: Option<String>,

    /// Dataset endpoint (overrides source.url).
    #[arg(long)]
    source_url: Option<String>,

    /// Log level when RUST_LOG is unset (overrides observability.log_level).
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn apply(self, config: &mut RelayConfig) {
        if let Some(v) = self.name {
            config.identity.name = v;
        }
        if let Some(v) = self.reg_no {
            config.identity.reg_no = v;
        }
        if let Some(v) = self.email {
            config.identity.email = v;
        }
        if let Some(v) = self.source_url {
            config.source.url = v;
        }
        if let Some(v) = self.log_level {
            config.observability.log_level = v;
        }
    }
}

fn build_config(cli: Cli) -> Result<RelayConfig, ConfigError> {
    let mut config = load_config(cli.config.as_deref())?;
    cli.apply(&mut config);
    ensure_valid(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let fallback_level = cli.log_level.clone().unwrap_or_else(|| "info".to_string());
    let config_file = cli.config.clone();

    let config = match build_config(cli) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&fallback_level);
            tracing::error!(error = %e, "Configuration rejected");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config.observability.log_level);
    if let Some(path) = &config_file {
        tracing::debug!(path = %path.display(), "Configuration file loaded");
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        source = %config.source.url,
        max_attempts = config.delivery.max_attempts,
        backoff_unit_ms = config.delivery.backoff_unit_ms,
        request_timeout_secs = config.delivery.request_timeout_secs,
        "mutual-relay starting"
    );

    match run_job(&config).await {
        Ok(report) => {
            tracing::info!(
                users = report.users,
                pairs = report.pairs,
                attempts = report.receipt.attempts,
                status = report.receipt.status,
                "Application done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Application failed");
            ExitCode::FAILURE
        }
    }
}
