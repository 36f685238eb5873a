use catalog_server::{Config, Server, ServerState, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (dotenv first, config reads from it)
    dotenv::dotenv().ok();
    let config = Config::from_env();

    config.ensure_work_dir_structure()?;
    init_logger_with_file(Some(config.log_level.as_str()), config.log_dir().to_str());

    print_banner();
    tracing::info!("Cafe catalog server starting...");

    // 2. Initialize server state (database, schema)
    let state = ServerState::initialize(&config).await;

    // 3. Run the HTTP server
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
