// Server module - router assembly and the listening loop

use axum::Router;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::infrastructure::AppState;

/// Build the HTTP router over already-initialised state
pub fn build_router(state: AppState) -> Router {
    api::api_router_with_state(state).layer(TraceLayer::new_for_http())
}

/// Bind `0.0.0.0:port` and serve until the process stops
pub async fn serve(state: AppState, port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Bookshelf server listening on {}", addr);

    axum::serve(listener, build_router(state)).await
}
