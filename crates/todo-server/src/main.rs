use anyhow::Context;
use clap::Parser;

use todo_server::logging::init_logging;
use todo_server::{run_server, AppState, ServerConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ServerConfig::parse();

    init_logging(config.debug, config.log_format);

    tracing::info!("Starting todo server on {}", config.bind_addr());
    tracing::debug!("Server configuration: {:?}", config);

    let state = AppState::from_config(&config)
        .await
        .context("Failed to initialize todo storage")?;

    run_server(config, state)
        .await
        .context("Todo server exited with error")
}
