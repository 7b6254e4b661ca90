//! # Ferrous Lookup
//!
//! HTTP API for DNS lookups, IP validation and a Redis-backed query history

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use ferrous_lookup_domain::CliOverrides;
use tracing::info;

#[derive(Parser)]
#[command(name = "ferrous-lookup")]
#[command(version)]
#[command(about = "DNS lookup API with a persisted query history")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// HTTP port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind,
        log_level: cli.log_level,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!(version = env!("CARGO_PKG_VERSION"), "Ferrous Lookup starting");

    let services = di::Services::new(&config)?;
    let use_cases = di::UseCases::new(&services, &config, env!("CARGO_PKG_VERSION"));

    // Lookups keep working without Redis; only report here.
    use_cases.check_health.store_reachable().await;

    server::start_web_server(&config.server, use_cases.app_state()).await?;

    info!("Ferrous Lookup stopped");
    Ok(())
}
