//! Core domain types

pub mod chat;

pub use chat::{
    ChatMessage, ChatRequest, ChatResult, MessageRole, assistant_message, system_message,
    user_message,
};
