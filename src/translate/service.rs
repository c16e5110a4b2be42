use tracing::{error, info};

use super::interface::{TranslationRequest, TranslationResponse};
use super::prompt::build_translation_prompt;
use crate::error::TranslateError;
use crate::llm::{ChatMessage, StatelessLLMInterface};

/// Translate a validated request with a single provider call.
///
/// The provider output is trimmed; an empty result counts as a failure.
/// There is no retry.
pub async fn translate_text(
    llm: &dyn StatelessLLMInterface,
    request: &TranslationRequest,
) -> Result<TranslationResponse, TranslateError> {
    let prompt = build_translation_prompt(
        &request.source_lang,
        &request.target_lang,
        &request.text,
    );

    info!(
        "Translating from {} to {}",
        request.source_lang, request.target_lang
    );

    let output = llm
        .chat_completion(vec![ChatMessage::user(prompt)])
        .await
        .map_err(|e| {
            error!("Translation error: {}", e);
            TranslateError::from(e)
        })?;

    let translated_text = output.trim();
    if translated_text.is_empty() {
        error!("Translation error: empty response from AI model");
        return Err(TranslateError::EmptyResponse);
    }

    info!(
        "Translation successful ({} -> {}): {} chars -> {} chars",
        request.source_lang,
        request.target_lang,
        request.text.chars().count(),
        translated_text.chars().count()
    );

    Ok(TranslationResponse {
        translated_text: translated_text.to_string(),
    })
}
