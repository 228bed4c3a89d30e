//! Server Implementation
//!
//! HTTP listener startup and shutdown

use crate::core::{Config, Result, ServerError, ServerState};

/// HTTP Server
///
/// Serves an already initialized [`ServerState`]; storage is connected
/// before the listener is bound.
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create a server around connected state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Bind the listener and serve until Ctrl-C
    pub async fn run(&self) -> Result<()> {
        let addr = self.config.bind_addr();
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        tracing::info!("HRMS server listening on {}", addr);

        axum::serve(listener, self.state.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}
