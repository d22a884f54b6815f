// src/services/groq.rs
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::{
    conversation::{Conversation, Message},
    provider::{ChatProvider, GenerationParams, ProviderError, ProviderReply},
};
use crate::config::AppConfig;

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: &'a [Message],
}

/// Client for Groq's OpenAI-compatible chat completions endpoint.
pub struct GroqClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GroqClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(cfg: &AppConfig) -> Self {
        Self::new(cfg.api_key.clone(), cfg.base_url.clone())
    }
}

#[async_trait]
impl ChatProvider for GroqClient {
    async fn invoke(
        &self,
        conversation: &Conversation,
        params: GenerationParams<'_>,
    ) -> Result<ProviderReply, ProviderError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = ApiRequest {
            model: params.model,
            temperature: params.temperature,
            messages: conversation.messages(),
        };

        let resp = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status: status.as_u16(), body: text });
        }

        let bytes = resp.bytes().await?;
        let value: Value =
            serde_json::from_slice(&bytes).map_err(|e| ProviderError::Decode(e.to_string()))?;

        Ok(ProviderReply::from_json(value))
    }
}
