use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing_subscriber::{EnvFilter, fmt};

use voice_chat_backend::{config::AppConfig, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    fmt().with_env_filter(filter).compact().init();

    let config = AppConfig::from_env()?;
    config.ensure_index()?;
    config.log_summary();

    let bind_addr = config.bind_addr.clone();
    let app = routes::create_router(&config.static_dir)
        .with_state(Arc::new(AppState::with_groq(config)))
        .layer(CorsLayer::very_permissive());

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("🚀 voice chatbot running at http://{bind_addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
