use async_trait::async_trait;
use reqwest::{header, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use svcmsg_domain::credentials::{
    ChannelCredentials, NotificationToken, ServiceCredential, SessionAccessToken,
};
use svcmsg_domain::notification::{
    DeliveryReceipt, PlatformError, ServiceMessage, ServiceMessagePlatform,
};

use super::types::{
    NotificationTokenRequest, NotificationTokenResponse, SendServiceMessageRequest,
    StatelessTokenResponse,
};
use super::{LineApiClient, NOTIFIER_SEND_PATH, NOTIFIER_TOKEN_PATH, TOKEN_PATH};
use crate::http::ResultExt;

#[async_trait]
impl ServiceMessagePlatform for LineApiClient {
    async fn issue_service_credential(
        &self,
        credentials: &ChannelCredentials,
    ) -> Result<ServiceCredential, PlatformError> {
        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", credentials.client_id()),
            ("client_secret", credentials.client_secret()),
        ];

        let response = self
            .client
            .post(self.build_url(TOKEN_PATH))
            .form(&form)
            .send()
            .await
            .to_transport_err("Failed to send stateless token request")?;

        let body: StatelessTokenResponse = read_json(response).await?;
        log::debug!(
            "Stateless token issued (type: {:?}, expires_in: {:?})",
            body.token_type,
            body.expires_in
        );

        Ok(ServiceCredential::new(body.access_token))
    }

    async fn issue_notification_token(
        &self,
        credential: &ServiceCredential,
        session_token: &SessionAccessToken,
    ) -> Result<NotificationToken, PlatformError> {
        let payload = NotificationTokenRequest {
            liff_access_token: session_token.as_str(),
        };

        let response = self
            .client
            .post(self.build_url(NOTIFIER_TOKEN_PATH))
            .header(header::AUTHORIZATION, credential.bearer())
            .json(&payload)
            .send()
            .await
            .to_transport_err("Failed to send notification token request")?;

        let body: NotificationTokenResponse = read_json(response).await?;
        log::debug!(
            "Notification token issued (expires_in: {:?}, remaining_count: {:?}, session: {:?})",
            body.expires_in,
            body.remaining_count,
            body.session_id
        );

        Ok(NotificationToken::new(body.notification_token))
    }

    async fn send_service_message(
        &self,
        credential: &ServiceCredential,
        message: &ServiceMessage,
    ) -> Result<DeliveryReceipt, PlatformError> {
        let payload = SendServiceMessageRequest {
            notification_token: message.notification_token.as_str(),
            template_name: message.template.name(),
            params: message.template.params(),
        };

        let response = self
            .client
            .post(self.build_url(NOTIFIER_SEND_PATH))
            .query(&[("target", "service")])
            .header(header::AUTHORIZATION, credential.bearer())
            .json(&payload)
            .send()
            .await
            .to_transport_err("Failed to send service message request")?;

        read_json(response).await
    }
}

/// Decode a platform response
///
/// Non-success statuses become `Rejected` carrying the JSON error payload
/// verbatim. An error body that is not JSON is a malformed response.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, PlatformError> {
    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .to_transport_err("Failed to read response body")?;

    if !status.is_success() {
        let details: Value = serde_json::from_slice(&bytes).to_malformed_err(&format!(
            "Error response with status {} is not JSON",
            status
        ))?;
        return Err(PlatformError::Rejected {
            status: status.as_u16(),
            details,
        });
    }

    serde_json::from_slice(&bytes).to_malformed_err("Failed to parse response body")
}
