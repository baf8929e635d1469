pub mod handlers;

use crate::{
    Result,
    analysis::{ANALYZE_PATH, AnalysisHandler},
    config::Config,
};
use axum::{Router, routing::post};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub use handlers::AppState;

/// Builds the router serving `POST /analyze`; every other path is a JSON 404.
pub fn router(handler: AnalysisHandler) -> Router {
    Router::new()
        .route(ANALYZE_PATH, post(handlers::analyze))
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(handlers::panic_response))
                .layer(CorsLayer::permissive()),
        )
        .with_state(AppState::new(handler))
}

pub async fn run(config: Config, handler: AnalysisHandler) -> Result<()> {
    let app = router(handler);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
