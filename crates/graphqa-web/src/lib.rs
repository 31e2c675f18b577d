//! graphqa Web Server
//!
//! Axum-based HTTP API for question answering over Neo4j.

pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/health/", get(routes::health::health))
        .route("/health", get(routes::health::health))
        .route("/health/neo4j/", get(routes::health::neo4j_health))
        .route("/health/neo4j", get(routes::health::neo4j_health))
        .route("/ask/", post(routes::ask::ask))
        .route("/ask", post(routes::ask::ask))
        .with_state(state);

    Router::new()
        .route("/docs", get(routes::docs::index))
        .route("/openapi.json", get(routes::docs::openapi))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Run the web server until Ctrl+C.
pub async fn run_server(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!("Web server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Shutting down web server");
        })
        .await?;
    Ok(())
}
