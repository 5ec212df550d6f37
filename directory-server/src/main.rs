use directory_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. .env, then configuration and logging
    let _ = dotenv::dotenv();
    let config = Config::from_env();
    let _log_guard = setup_environment(&config);

    print_banner();
    tracing::info!(env = %config.environment, "Employee Directory Server starting...");
    if config.is_production() && config.log_dir.is_none() {
        tracing::warn!("LOG_DIR is unset, production logs go to stdout");
    }

    // 2. Open the store
    let state = ServerState::initialize(&config).await?;

    // 3. Serve until Ctrl-C; the store is closed on the way out
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
