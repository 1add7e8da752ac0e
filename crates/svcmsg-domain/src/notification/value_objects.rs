use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Stages of the credential-exchange-and-send pipeline, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStep {
    IssueServiceCredential,
    IssueNotificationToken,
    SendServiceMessage,
}

impl PipelineStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStep::IssueServiceCredential => "issue_service_credential",
            PipelineStep::IssueNotificationToken => "issue_notification_token",
            PipelineStep::SendServiceMessage => "send_service_message",
        }
    }

    /// Message reported to the caller when this step is rejected upstream
    pub fn failure_message(&self) -> &'static str {
        match self {
            PipelineStep::IssueServiceCredential => "Failed to get stateless token",
            PipelineStep::IssueNotificationToken => "Failed to issue notification token",
            PipelineStep::SendServiceMessage => "Failed to send service message",
        }
    }
}

impl fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Delivery metadata echoed by the platform after a send
///
/// Fields are raw JSON carried exactly as reported, whatever their shape; a
/// field the platform omits stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryReceipt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_count: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_token: Option<Value>,
}
