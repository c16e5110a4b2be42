use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::stateless_llm_interface::{ChatMessage, LLMError, StatelessLLMInterface};

/// OpenAI compatible chat completion client (Groq exposes this API)
pub struct OpenAICompatibleLLM {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAICompatibleLLM {
    pub fn new(
        client: Client,
        api_url: String,
        api_key: String,
        model: String,
        temperature: f32,
    ) -> Self {
        debug!(
            "Initialized OpenAICompatibleLLM: model={}, api_url={}",
            model, api_url
        );
        Self {
            client,
            api_url,
            api_key,
            model,
            temperature,
        }
    }
}

#[async_trait]
impl StatelessLLMInterface for OpenAICompatibleLLM {
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<String, LLMError> {
        let request = ChatRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(LLMError::Status { status, body });
        }

        let body = response.text().await?;
        let chat_response: ChatResponse =
            serde_json::from_str(&body).map_err(|e| LLMError::Malformed(e.to_string()))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or(LLMError::NoChoices)?
            .message
            .content
            .unwrap_or_default();

        info!("LLM completion received from {}", self.model);
        Ok(content)
    }
}
