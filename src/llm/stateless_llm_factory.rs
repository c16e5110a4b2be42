use reqwest::Client;
use std::sync::Arc;
use tracing::error;

use super::openai_compatible_llm::OpenAICompatibleLLM;
use super::stateless_llm_interface::StatelessLLMInterface;
use crate::config::LLMConfig;
use crate::error::TranslateError;

pub const MISSING_API_KEY_MESSAGE: &str =
    "GROQ_API_KEY not configured. Please set it in your .env file.";

/// Factory for creating stateless LLM instances
pub struct StatelessLLMFactory;

impl StatelessLLMFactory {
    /// Build the Groq client from the current configuration.
    ///
    /// Fails with a configuration error when no API key is set, so the
    /// credential is checked on every call rather than only at startup.
    pub fn create_llm(
        client: &Client,
        config: &LLMConfig,
    ) -> Result<Arc<dyn StatelessLLMInterface>, TranslateError> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            error!("GROQ_API_KEY not found in environment variables");
            TranslateError::Configuration(MISSING_API_KEY_MESSAGE.to_string())
        })?;

        Ok(Arc::new(OpenAICompatibleLLM::new(
            client.clone(),
            config.api_url.clone(),
            api_key,
            config.model.clone(),
            config.temperature,
        )))
    }
}
