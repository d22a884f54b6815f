pub mod chatbot;
pub mod conversation;
pub mod groq;
pub mod provider;
