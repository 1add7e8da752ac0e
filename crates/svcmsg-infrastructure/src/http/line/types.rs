use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response of `POST /oauth2/v3/token`
#[derive(Debug, Deserialize)]
pub struct StatelessTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Body of `POST /message/v3/notifier/token`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationTokenRequest<'a> {
    pub liff_access_token: &'a str,
}

/// Response of `POST /message/v3/notifier/token`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationTokenResponse {
    pub notification_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub remaining_count: Option<i64>,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Body of `POST /message/v3/notifier/send?target=service`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendServiceMessageRequest<'a> {
    pub notification_token: &'a str,
    pub template_name: &'a str,
    pub params: &'a Map<String, Value>,
}
