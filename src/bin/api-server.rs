//! Folio API Server
//!
//! Stateless HTTP API over the portfolio and signal engine. Owns no
//! session state, so it can be horizontally scaled.

use dotenvy::dotenv;
use folio::config::Config;
use folio::core::http::start_server;
use folio::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = Config::from_env();
    info!("Starting Folio API Server");
    info!(environment = %config.environment, "Environment");
    info!(port = config.port, "HTTP Server: http://0.0.0.0:{}", config.port);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(config.port).await {
            error!(error = %e, "HTTP server error");
        }
    });

    // Graceful shutdown
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
