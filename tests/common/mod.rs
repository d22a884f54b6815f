#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use voice_chat_backend::services::conversation::Conversation;
use voice_chat_backend::services::provider::{
    ChatProvider, GenerationParams, ProviderError, ProviderReply,
};

/// Replays scripted outcomes in order and records every conversation it receives.
#[derive(Default)]
pub struct StubProvider {
    outcomes: Mutex<VecDeque<Result<ProviderReply, String>>>,
    pub seen: Mutex<Vec<(Conversation, String, f32)>>,
}

impl StubProvider {
    pub fn new(outcomes: Vec<Result<ProviderReply, String>>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into()),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn replying(content: &str) -> Arc<Self> {
        Self::new(vec![Ok(ProviderReply::Structured { content: content.to_string() })])
    }

    pub fn failing(description: &str) -> Arc<Self> {
        Self::new(vec![Err(description.to_string())])
    }

    pub fn seen(&self) -> Vec<(Conversation, String, f32)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for StubProvider {
    async fn invoke(
        &self,
        conversation: &Conversation,
        params: GenerationParams<'_>,
    ) -> Result<ProviderReply, ProviderError> {
        self.seen.lock().unwrap().push((
            conversation.clone(),
            params.model.to_string(),
            params.temperature,
        ));
        let outcome = self
            .outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("stub provider ran out of scripted outcomes");
        outcome.map_err(ProviderError::Transport)
    }
}
