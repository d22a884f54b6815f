// src/state.rs
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{groq::GroqClient, provider::ChatProvider};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Arc<AppConfig>,
    pub provider: Arc<dyn ChatProvider>,
}

impl AppState {
    pub fn new(config: AppConfig, provider: Arc<dyn ChatProvider>) -> Self {
        Self {
            config: Arc::new(config),
            provider,
        }
    }

    /// Wires the Groq client from the loaded config.
    pub fn with_groq(config: AppConfig) -> Self {
        let provider = Arc::new(GroqClient::from_config(&config));
        Self::new(config, provider)
    }
}
