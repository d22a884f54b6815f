// src/services/conversation.rs
use serde::Serialize;

pub const SYSTEM_PROMPT: &str = "You are a basic voice-to-voice chatbot designed to answer simple questions.
Your responses should be short, concise, and to the point.
Aim to provide helpful information without being overly verbose.
If a question is too complex or outside your scope, politely inform the user that you can only handle simple queries.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

/// The two-turn exchange sent per request: system instruction, then the user's text.
/// Built fresh every time and never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversation {
    messages: [Message; 2],
}

impl Conversation {
    pub fn new(system: &str, user: impl Into<String>) -> Self {
        Self {
            messages: [
                Message { role: MessageRole::System, content: system.to_string() },
                Message { role: MessageRole::User, content: user.into() },
            ],
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn system(&self) -> &str {
        &self.messages[0].content
    }

    pub fn user(&self) -> &str {
        &self.messages[1].content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_comes_first() {
        let conv = Conversation::new(SYSTEM_PROMPT, "hi");
        let roles: Vec<_> = conv.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![MessageRole::System, MessageRole::User]);
        assert_eq!(conv.system(), SYSTEM_PROMPT);
        assert_eq!(conv.user(), "hi");
    }

    #[test]
    fn user_text_is_kept_verbatim() {
        let conv = Conversation::new(SYSTEM_PROMPT, "  spaced \n out ");
        assert_eq!(conv.user(), "  spaced \n out ");
    }

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_value(&Conversation::new("s", "u").messages()[0]).unwrap();
        assert_eq!(json, serde_json::json!({ "role": "system", "content": "s" }));
    }
}
