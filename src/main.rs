use anyhow::Result;
use interpret_backend::{analysis::AnalysisHandler, config, logging, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init(&config.server.logs) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    info!(
        "Starting interpret server with log level: {}",
        config.server.logs.level
    );

    server::run(config, AnalysisHandler::default()).await?;

    Ok(())
}
