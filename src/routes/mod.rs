// src/routes/mod.rs
pub mod chat;

use std::path::Path;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// `static_dir` must contain `index.html`; it is served at `/` and the rest of
/// the directory backs the fallback.
pub fn create_router(static_dir: impl AsRef<Path>) -> Router<SharedState> {
    let static_dir = static_dir.as_ref();

    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route("/chat", post(chat_handler))
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}
