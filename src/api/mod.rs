//! HTTP layer exposing the handler.

pub mod routes;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use axum::{routing::post, Router};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::handler::Handler;

#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<Handler>,
}

pub fn router(handler: Handler) -> Router {
    let state = AppState {
        handler: Arc::new(handler),
    };
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    Router::new()
        .route("/analyze", post(routes::analyze))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(handler: Handler, host: String, port: u16) -> Result<()> {
    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, "serving supplement-check API");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router(handler).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(%err, "failed to listen for ctrl-c");
    }
    info!("shutting down");
}
