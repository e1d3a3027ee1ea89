//! Binds the listener, serves the router, and tears the system down on exit.

use thiserror::Error;
use tokio::{net::TcpListener, signal::ctrl_c};
use tracing::info;

#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

use crate::{api, config::Config, lifecycle::RestaurantSystem};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),

    #[error("Shutdown failed: {0}")]
    Shutdown(String),
}

/// Runs the service until Ctrl+C or SIGTERM.
pub async fn run(config: Config) -> Result<(), ServerError> {
    let system = RestaurantSystem::new(config.order_buffer);
    let app = api::router(system.app_state(), &config.cors_origins);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| ServerError::Bind {
            address: address.clone(),
            source,
        })?;

    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("Server shutting down...");
    system.shutdown().await.map_err(ServerError::Shutdown)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
