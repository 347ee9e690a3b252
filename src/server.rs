//! HTTP delivery for the application shell.
//!
//! The router is a pure function of the static asset directory so
//! integration tests can mount it in-process without binding a socket.

use std::time::Duration;

use axum::{Router, response::Html, routing::get};
use tower_http::{services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

use crate::config::AppConfig;
use crate::ui;

/// Per-request timeout. The shell renders synchronously, so this only
/// guards slow static-file reads.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the application router.
pub fn router(static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
}

/// GET / - the rendered application shell.
async fn index_handler() -> Html<String> {
    Html(ui::app::render_index())
}

/// Bind the configured listener and serve the shell until shutdown.
pub async fn serve(config: &AppConfig) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = router(&config.assets.static_dir);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %format!("http://{addr}"),
        "Server started"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
