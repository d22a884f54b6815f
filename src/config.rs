// src/config.rs
use std::{env, path::PathBuf};

use thiserror::Error;

use crate::services::conversation::SYSTEM_PROMPT;

pub const DEFAULT_MODEL: &str = "mixtral-8x7b-32768";
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_STATIC_DIR: &str = "public";
pub const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("landing page not found at {}", .0.display())]
    MissingIndex(PathBuf),
}

/// Process-wide settings, read once at startup and shared read-only.
#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub base_url: String,
    pub bind_addr: String,
    pub static_dir: PathBuf,
    pub system_prompt: &'static str,
}

// Keeps the credential out of logs and panic messages.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("base_url", &self.base_url)
            .field("bind_addr", &self.bind_addr)
            .field("static_dir", &self.static_dir)
            .finish()
    }
}

impl AppConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            temperature: TEMPERATURE,
            base_url: DEFAULT_BASE_URL.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            system_prompt: SYSTEM_PROMPT,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty("GROQ_API_KEY").ok_or(ConfigError::MissingVar("GROQ_API_KEY"))?;
        let mut cfg = Self::new(api_key);

        if let Some(model) = non_empty("GROQ_MODEL") {
            cfg.model = model;
        }
        if let Some(url) = non_empty("GROQ_BASE_URL") {
            cfg.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(addr) = non_empty("BIND_ADDR") {
            cfg.bind_addr = addr;
        }
        if let Some(dir) = non_empty("STATIC_DIR") {
            cfg.static_dir = PathBuf::from(dir);
        }
        Ok(cfg)
    }

    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }

    /// A missing landing page is a deployment fault, so it is caught before serving.
    pub fn ensure_index(&self) -> Result<(), ConfigError> {
        let path = self.index_path();
        if path.is_file() {
            Ok(())
        } else {
            Err(ConfigError::MissingIndex(path))
        }
    }

    pub fn log_summary(&self) {
        tracing::info!(
            model = %self.model,
            temperature = self.temperature,
            base_url = %self.base_url,
            static_dir = %self.static_dir.display(),
            api_key_set = !self.api_key.is_empty(),
            "configuration loaded"
        );
    }
}
