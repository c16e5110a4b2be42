use serde::{Deserialize, Serialize};

use crate::error::TranslateError;

pub const EMPTY_TEXT_MESSAGE: &str = "Text cannot be empty";
pub const MISSING_LANGUAGES_MESSAGE: &str = "Source and target languages are required";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub translated_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl TranslationRequest {
    /// Checks run in order and the first failure wins
    pub fn validate(&self) -> Result<(), TranslateError> {
        if self.text.trim().is_empty() {
            return Err(TranslateError::Validation(EMPTY_TEXT_MESSAGE.to_string()));
        }

        if self.source_lang.trim().is_empty() || self.target_lang.trim().is_empty() {
            return Err(TranslateError::Validation(
                MISSING_LANGUAGES_MESSAGE.to_string(),
            ));
        }

        Ok(())
    }
}
