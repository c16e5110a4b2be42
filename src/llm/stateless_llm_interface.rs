use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single chat message sent to (or returned by) the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Failures raised by a text generation provider
#[derive(Debug, Error)]
pub enum LLMError {
    #[error("request to LLM provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("LLM provider returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to parse LLM provider response: {0}")]
    Malformed(String),

    #[error("LLM provider response contained no choices")]
    NoChoices,
}

/// Interface for a stateless language model.
/// Stateless means the model keeps no memory between calls.
#[async_trait]
pub trait StatelessLLMInterface: Send + Sync {
    /// Send the messages in one completion request and return the raw text
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<String, LLMError>;
}
