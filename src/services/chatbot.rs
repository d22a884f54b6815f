use super::{
    conversation::Conversation,
    provider::{ChatProvider, GenerationParams, ProviderError},
};
use crate::config::AppConfig;

/// Sends `user_msg` behind the fixed system prompt and returns the reply text.
pub async fn generate_reply(
    provider: &dyn ChatProvider,
    cfg: &AppConfig,
    user_msg: &str,
) -> Result<String, ProviderError> {
    let conversation = Conversation::new(cfg.system_prompt, user_msg);
    let params = GenerationParams {
        model: &cfg.model,
        temperature: cfg.temperature,
    };

    let reply = provider.invoke(&conversation, params).await?;
    Ok(reply.into_text())
}
