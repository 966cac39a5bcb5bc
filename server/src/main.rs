//! Preview server for the international student platform: serves the static
//! site and accepts contact form submissions.

mod config;
mod routes;
mod state;

use config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to bind port {port}: {source}")]
    Bind { port: u16, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // Missing .env is fine; the environment may already be set.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    if !config.site_dir.is_dir() {
        tracing::warn!(site_dir = %config.site_dir.display(), "site directory not found; static pages will 404");
    }

    let state = state::AppState::new(config.contact_inbox_limit);
    let app = routes::app(state, &config.site_dir);
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(|source| ServerError::Bind { port, source })?;

    tracing::info!(%port, site_dir = %config.site_dir.display(), "preview server listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
