use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::error::TranslateError;
use crate::state::AppState;
use crate::translate::{translate_text, TranslationRequest, TranslationResponse};

/// POST /translate
///
/// Input is validated before the provider is built, so bad requests never
/// reach the model and never depend on the credential being present.
pub async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslationRequest>, JsonRejection>,
) -> Result<Json<TranslationResponse>, TranslateError> {
    let Json(request) = payload?;
    request.validate()?;

    let llm = state.llm().await?;
    let response = translate_text(llm.as_ref(), &request).await?;

    Ok(Json(response))
}

/// Path exists but not for this method, e.g. `GET /translate`
pub async fn method_not_allowed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}
