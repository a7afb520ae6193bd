//! Lead intake relay service.
//!
//! Main entry point. Loads configuration, wires up the forwarding
//! client and clock, and serves the intake endpoint until shutdown.

use std::sync::Arc;

use anyhow::Result;
use leadrelay_api::{start_server, AppState, Config};
use leadrelay_core::RealClock;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration first: the debug flag widens the default log filter.
    let config = Config::load()?;
    init_tracing(config.debug);

    info!("Starting lead intake relay");
    info!(
        downstream_url = %config.downstream_url,
        host = %config.host,
        port = config.port,
        debug = config.debug,
        "Configuration loaded"
    );

    let addr = config.parse_server_addr()?;
    let state = AppState::new(config, Arc::new(RealClock))?;

    start_server(state, addr).await?;

    info!("Relay shutdown complete");
    Ok(())
}

/// Initializes tracing with environment-based configuration.
///
/// `RUST_LOG` wins when set; otherwise the filter defaults to `info`,
/// widened to debug for this crate's modules when the debug flag is on.
fn init_tracing(debug: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let fallback = if debug { "info,leadrelay=debug,tower_http=debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .expect("Invalid RUST_LOG environment variable");

    let fmt_layer = fmt::layer().with_target(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
