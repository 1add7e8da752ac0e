use serde::{Deserialize, Serialize};
use serde_json::Value;

use svcmsg_domain::notification::DeliveryReceipt;

pub const SEND_SUCCESS_MESSAGE: &str = "Service message sent successfully";

/// Body of a successful `POST /api/send-message`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub success: bool,
    pub message: String,
    #[serde(flatten)]
    pub receipt: DeliveryReceipt,
}

impl SendMessageResponse {
    pub fn delivered(receipt: DeliveryReceipt) -> Self {
        Self {
            success: true,
            message: SEND_SUCCESS_MESSAGE.to_string(),
            receipt,
        }
    }
}

/// Body of every failed request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}
