use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, Json};

use svcmsg_domain::credentials::SessionAccessToken;

use super::error::ApiError;
use super::state::AppState;
use crate::application::dtos::SendMessageResponse;

pub const SEND_MESSAGE_PATH: &str = "/api/send-message";
pub const ACCESS_TOKEN_HEADER: &str = "x-liff-access-token";

/// `POST /api/send-message`
///
/// Validation order: header, then channel configuration, then the pipeline.
/// Nothing leaves the process until both checks pass.
pub async fn send_message_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<SendMessageResponse>, ApiError> {
    let raw_token = headers
        .get(ACCESS_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let session_token =
        SessionAccessToken::new(raw_token).map_err(|_| ApiError::MissingAccessToken)?;

    let config = state.config_source.load()?;

    let receipt = state.pipeline.run(&config, session_token).await?;

    Ok(Json(SendMessageResponse::delivered(receipt)))
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
