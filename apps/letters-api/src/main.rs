//! Letters API Server binary

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use letters_api::{app, ApiConfig, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("letters_api=info".parse()?)
                .add_directive("letter_engine=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    let config = ApiConfig::from_env();

    // Initialize application state
    info!("Initializing Letters API...");
    let state = Arc::new(AppState::new(&config).await?);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Starting Letters API on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
