// src/services/provider.rs
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use super::conversation::Conversation;

/// Anything that can go wrong while talking to the inference provider.
/// Callers never branch on the kind; they only need the description.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0}")]
    Transport(String),

    #[error("provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed provider response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        let decode = e.is_decode();
        // reqwest keeps the actual cause (refused, timed out, dns) in the source chain.
        let description = format!("{:#}", anyhow::Error::from(e));
        if decode {
            ProviderError::Decode(description)
        } else {
            ProviderError::Transport(description)
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct GenerationParams<'a> {
    pub model: &'a str,
    pub temperature: f32,
}

/// The shapes a provider answer can take.
#[derive(Clone, Debug, PartialEq)]
pub enum ProviderReply {
    Structured { content: String },
    PlainText(String),
    Unknown(Value),
}

impl ProviderReply {
    /// Classifies a decoded response body.
    ///
    /// Chat-completion bodies carry the text at `choices[0].message.content`;
    /// a bare `content` string on the top-level object is accepted too.
    pub fn from_json(value: Value) -> Self {
        let content = value
            .pointer("/choices/0/message/content")
            .or_else(|| value.get("content"))
            .and_then(Value::as_str)
            .map(str::to_owned);

        match (content, value) {
            (Some(content), _) => ProviderReply::Structured { content },
            (None, Value::String(s)) => ProviderReply::PlainText(s),
            (None, other) => ProviderReply::Unknown(other),
        }
    }

    pub fn into_text(self) -> String {
        match self {
            ProviderReply::Structured { content } => content,
            ProviderReply::PlainText(text) => text,
            ProviderReply::Unknown(raw) => raw.to_string(),
        }
    }
}

#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn invoke(
        &self,
        conversation: &Conversation,
        params: GenerationParams<'_>,
    ) -> Result<ProviderReply, ProviderError>;
}
