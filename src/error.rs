use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::llm::LLMError;
use crate::translate::ErrorResponse;

pub const EMPTY_RESPONSE_MESSAGE: &str = "Translation failed - empty response from AI model";
pub const PROVIDER_FAILURE_MESSAGE: &str = "Translation failed, please try again.";

#[derive(Debug, Error)]
pub enum TranslateError {
    /// Client input was empty or missing
    #[error("{0}")]
    Validation(String),

    /// Body was not a JSON translation request (bad syntax, missing or
    /// null fields, wrong content type)
    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    /// The provider credential is not configured
    #[error("{0}")]
    Configuration(String),

    #[error("{}", EMPTY_RESPONSE_MESSAGE)]
    EmptyResponse,

    #[error(transparent)]
    Provider(#[from] LLMError),
}

impl TranslateError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TranslateError::Validation(_) => StatusCode::BAD_REQUEST,
            TranslateError::InvalidBody(rejection) => rejection.status(),
            TranslateError::Configuration(_)
            | TranslateError::EmptyResponse
            | TranslateError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to the caller. Provider details stay in the logs.
    pub fn client_message(&self) -> String {
        match self {
            TranslateError::Provider(_) => PROVIDER_FAILURE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for TranslateError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.client_message(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = TranslateError::Validation("Text cannot be empty".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.client_message(), "Text cannot be empty");
    }

    #[test]
    fn test_empty_response_message() {
        let err = TranslateError::EmptyResponse;
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.client_message(), EMPTY_RESPONSE_MESSAGE);
    }

    #[test]
    fn test_provider_error_hides_details() {
        let err = TranslateError::Provider(LLMError::Malformed("secret detail".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.client_message(), PROVIDER_FAILURE_MESSAGE);
        assert!(!err.client_message().contains("secret"));
    }

    #[test]
    fn test_configuration_error_is_server_error() {
        let err = TranslateError::Configuration("GROQ_API_KEY not configured".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.client_message().contains("GROQ_API_KEY"));
    }
}
