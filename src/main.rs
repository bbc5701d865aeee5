use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use availability_monitor::health::{CHECK_INTERVAL, HTTP_TIMEOUT_MS};
use availability_monitor::lifecycle::signals;
use availability_monitor::observability::{logging, metrics};
use availability_monitor::{load_config, Checker, ReqwestTransport, Reporter, Scheduler, Shutdown};

/// Monitor HTTP endpoint availability.
#[derive(Parser, Debug)]
#[command(name = "availability-monitor", version)]
struct Cli {
    /// Endpoint list (YAML, or TOML with a `.toml` extension).
    config_file: PathBuf,

    /// Log every probe result.
    #[arg(short, long)]
    verbose: bool,

    /// Serve Prometheus metrics on this address.
    #[arg(long)]
    metrics_address: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %cli.config_file.display(),
        "availability-monitor starting"
    );

    let endpoints = match load_config(&cli.config_file) {
        Ok(endpoints) => endpoints,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        endpoints = endpoints.len(),
        interval_secs = CHECK_INTERVAL.as_secs(),
        timeout_ms = HTTP_TIMEOUT_MS,
        "Configuration loaded"
    );

    let transport = match ReqwestTransport::new() {
        Ok(transport) => transport,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(addr) = cli.metrics_address {
        if let Err(e) = metrics::init_metrics(addr) {
            tracing::error!(address = %addr, "Failed to start metrics exporter: {e}");
            return ExitCode::FAILURE;
        }
    }

    let shutdown = Shutdown::new();
    let stop = shutdown.subscribe();
    signals::spawn_signal_handler(shutdown);

    let mut scheduler = Scheduler::new(endpoints, Checker::new(transport), Reporter::new());
    scheduler.run(stop).await;

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
