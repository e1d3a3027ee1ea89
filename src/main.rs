//! # QuickBite API
//!
//! Entry point: sets up tracing, reads [`Config`] from the environment, and serves
//! until a shutdown signal arrives.
//!
//! ```bash
//! RUST_LOG=info QUICKBITE_PORT=8000 cargo run
//! ```

use std::process::ExitCode;

use quickbite_api::config::Config;
use quickbite_api::lifecycle::setup_tracing;
use quickbite_api::server;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    setup_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    info!(address = %config.bind_address(), "Starting QuickBite API");

    match server::run(config).await {
        Ok(()) => {
            info!("Application stopped cleanly");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Server failed");
            ExitCode::FAILURE
        }
    }
}
