use hrms_server::{Config, Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. .env overrides, then configuration
    let _ = dotenv::dotenv();
    let config = Config::from_env();

    // 2. Logging
    setup_environment(&config);
    tracing::info!("HRMS server starting...");

    // 3. Storage (fatal when unreachable)
    let state = match ServerState::initialize(&config).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Startup failed: {}", e);
            return Err(e.into());
        }
    };

    // 4. HTTP listener
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
