use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::{error, warn};

use svcmsg_domain::notification::PipelineError;
use svcmsg_infrastructure::config::ConfigError;

use crate::application::dtos::ErrorBody;

/// Every failure the send endpoint can report
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("LIFF Access Token is required")]
    MissingAccessToken,

    #[error("{0}")]
    Configuration(#[from] ConfigError),

    #[error("{message}")]
    Upstream {
        status: StatusCode,
        message: &'static str,
        details: Value,
    },

    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::MissingAccessToken => StatusCode::BAD_REQUEST,
            ApiError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream { status, .. } => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        match err.rejection() {
            Some((status, details)) => match StatusCode::from_u16(status) {
                Ok(status) => ApiError::Upstream {
                    status,
                    message: err.step.failure_message(),
                    details: details.clone(),
                },
                Err(_) => ApiError::Internal(err.to_string()),
            },
            None => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        let body = match self {
            ApiError::Upstream { details, .. } => ErrorBody::new(message).with_details(details),
            ApiError::Configuration(_) => {
                error!("Service misconfigured: {}", message);
                ErrorBody::new(message)
            }
            ApiError::Internal(detail) => {
                error!("Error sending service message: {}", detail);
                ErrorBody::new(message)
            }
            ApiError::MethodNotAllowed | ApiError::MissingAccessToken => {
                warn!(status = status.as_u16(), "Rejected request: {}", message);
                ErrorBody::new(message)
            }
        };

        (status, Json(body)).into_response()
    }
}
