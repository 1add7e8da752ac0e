use async_trait::async_trait;

use super::error::PlatformError;
use super::value_objects::DeliveryReceipt;
use crate::credentials::{
    ChannelCredentials, NotificationToken, ServiceCredential, SessionAccessToken,
    TemplateReference,
};

/// Service message to be sent
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceMessage {
    pub notification_token: NotificationToken,
    pub template: TemplateReference,
}

impl ServiceMessage {
    pub fn new(notification_token: NotificationToken, template: TemplateReference) -> Self {
        Self {
            notification_token,
            template,
        }
    }
}

/// Messaging platform operations used by the send pipeline
///
/// Every call is an irreversible remote interaction. Implementations must not
/// retry.
#[async_trait]
pub trait ServiceMessagePlatform: Send + Sync {
    /// Mint a stateless channel access token (client-credentials grant)
    async fn issue_service_credential(
        &self,
        credentials: &ChannelCredentials,
    ) -> Result<ServiceCredential, PlatformError>;

    /// Exchange the user's session token for a notification token
    async fn issue_notification_token(
        &self,
        credential: &ServiceCredential,
        session_token: &SessionAccessToken,
    ) -> Result<NotificationToken, PlatformError>;

    /// Send one templated service message
    async fn send_service_message(
        &self,
        credential: &ServiceCredential,
        message: &ServiceMessage,
    ) -> Result<DeliveryReceipt, PlatformError>;
}
