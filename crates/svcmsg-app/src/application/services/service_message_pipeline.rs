use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use svcmsg_domain::credentials::{
    ChannelConfig, ChannelCredentials, NotificationToken, ServiceCredential, SessionAccessToken,
};
use svcmsg_domain::notification::{
    DeliveryReceipt, PipelineError, PipelineStep, PlatformError, ServiceMessage,
    ServiceMessagePlatform,
};

/// Credential-exchange-and-send pipeline
///
/// Runs three dependent platform calls in order: stateless token, service
/// notification token, templated send. The first failure ends the run; there
/// is no retry and nothing to roll back since every token is single-use.
pub struct ServiceMessagePipeline {
    platform: Arc<dyn ServiceMessagePlatform>,
}

impl ServiceMessagePipeline {
    pub fn new(platform: Arc<dyn ServiceMessagePlatform>) -> Self {
        Self { platform }
    }

    /// Send one service message to the user behind `session_token`
    ///
    /// Not idempotent: every successful run consumes platform send quota.
    pub async fn run(
        &self,
        config: &ChannelConfig,
        session_token: SessionAccessToken,
    ) -> Result<DeliveryReceipt, PipelineError> {
        let credential = self.issue_service_credential(config.credentials()).await?;
        let notification_token = self
            .issue_notification_token(&credential, &session_token)
            .await?;

        let message = ServiceMessage::new(notification_token, config.template().clone());
        let receipt = self.send_service_message(&credential, &message).await?;

        info!(
            template = config.template().name(),
            remaining_count = ?receipt.remaining_count,
            "Service message sent"
        );

        Ok(receipt)
    }

    async fn issue_service_credential(
        &self,
        credentials: &ChannelCredentials,
    ) -> Result<ServiceCredential, PipelineError> {
        run_step(
            PipelineStep::IssueServiceCredential,
            self.platform.issue_service_credential(credentials),
        )
        .await
    }

    async fn issue_notification_token(
        &self,
        credential: &ServiceCredential,
        session_token: &SessionAccessToken,
    ) -> Result<NotificationToken, PipelineError> {
        run_step(
            PipelineStep::IssueNotificationToken,
            self.platform
                .issue_notification_token(credential, session_token),
        )
        .await
    }

    async fn send_service_message(
        &self,
        credential: &ServiceCredential,
        message: &ServiceMessage,
    ) -> Result<DeliveryReceipt, PipelineError> {
        run_step(
            PipelineStep::SendServiceMessage,
            self.platform.send_service_message(credential, message),
        )
        .await
    }
}

/// Run one platform call inside its own span and tag any failure with the step
async fn run_step<T, F>(step: PipelineStep, call: F) -> Result<T, PipelineError>
where
    F: std::future::Future<Output = Result<T, PlatformError>>,
{
    let span = info_span!("pipeline_step", step = %step);

    async move {
        tracing::debug!("Calling platform");
        call.await.map_err(|e| {
            match &e {
                PlatformError::Rejected { status, details } => {
                    warn!(status = *status, details = %details, "{}", step.failure_message());
                }
                other => {
                    warn!(error_code = other.code().code(), "{}: {}", step.failure_message(), other);
                }
            }
            PipelineError::new(step, e)
        })
    }
    .instrument(span)
    .await
}
