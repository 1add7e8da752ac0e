use serde_json::Value;

use super::value_objects::PipelineStep;
use crate::shared::ErrorCode;

/// Failure of a single call against the messaging platform
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// The platform answered with a non-success status
    #[error("platform rejected request with status {status}: {details}")]
    Rejected { status: u16, details: Value },

    /// Connection, timeout or body read failure
    #[error("transport error: {0}")]
    Transport(String),

    /// Response body was not the JSON the step expects
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl PlatformError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PlatformError::Rejected { .. } => ErrorCode::ExternalServiceError,
            PlatformError::Transport(_) => ErrorCode::NetworkError,
            PlatformError::MalformedResponse(_) => ErrorCode::MalformedResponse,
        }
    }
}

/// Failure of the pipeline, tagged with the step that short-circuited it
#[derive(Debug, thiserror::Error)]
#[error("{step} failed: {source}")]
pub struct PipelineError {
    pub step: PipelineStep,
    #[source]
    pub source: PlatformError,
}

impl PipelineError {
    pub fn new(step: PipelineStep, source: PlatformError) -> Self {
        Self { step, source }
    }

    /// Upstream status and payload when the platform rejected the step
    pub fn rejection(&self) -> Option<(u16, &Value)> {
        match &self.source {
            PlatformError::Rejected { status, details } => Some((*status, details)),
            _ => None,
        }
    }
}
