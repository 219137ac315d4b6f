//! Link Pulse web server
//!
//! Axum-based single page that summarizes a YouTube video or web page.

pub mod animation;
pub mod routes;
pub mod state;
pub mod view;

use std::net::SocketAddr;

use axum::{
    routing::{get, post},
    Router,
};
use link_pulse::{Loader, Summarizer};
use tower_http::trace::TraceLayer;

use state::AppState;

/// Create the application router.
pub fn create_router<V, P, S>(state: AppState<V, P, S>) -> Router
where
    V: Loader + Send + Sync + 'static,
    P: Loader + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(routes::index::index::<V, P, S>))
        .route("/summarize", post(routes::summarize::summarize::<V, P, S>))
        .route("/healthz", get(routes::health::healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the web server until the process is stopped.
pub async fn run_server<V, P, S>(state: AppState<V, P, S>, addr: SocketAddr) -> anyhow::Result<()>
where
    V: Loader + Send + Sync + 'static,
    P: Loader + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
