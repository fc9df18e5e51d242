//! tavola-server — restaurant management backend
//!
//! Long-running service that:
//! - Authenticates console users (JWT session cookie)
//! - Manages the menu (CRUD)
//! - Manages reservations (CRUD + cancel transition, day-window listing)

use tavola_server::api;
use tavola_server::config::Config;
use tavola_server::state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tavola_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting tavola-server (env: {})", config.environment);

    // Initialize application state
    let state = AppState::new(&config).await?;

    let app = api::create_router(state);

    let http_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;
    tracing::info!("tavola-server listening on {http_addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
