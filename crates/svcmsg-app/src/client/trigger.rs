use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;
use tracing::{error, info};
use url::Url;

use svcmsg_infrastructure::config::TimeoutConfig;

use crate::presentation::{ACCESS_TOKEN_HEADER, SEND_MESSAGE_PATH};

/// Initialized LIFF session as seen by the page
pub trait LiffSession: Send + Sync {
    /// Stable identity of this session object
    fn session_id(&self) -> &str;

    /// Access token of the logged-in user, if the client exposes one
    fn access_token(&self) -> Option<String>;
}

/// What a trigger attempt did
#[derive(Debug, Clone, PartialEq)]
pub enum TriggerOutcome {
    /// Already fired for this session identity
    AlreadyTriggered,
    /// Session had no access token; nothing was sent
    MissingToken,
    /// Endpoint answered 2xx; the notification popup is now visible
    Delivered(Value),
    /// Endpoint answered with an error status
    Rejected { status: u16, body: Value },
    /// Request never got a usable answer
    TransportFailed,
}

/// Page-side glue: calls the send endpoint once per LIFF session
pub struct ClientTrigger {
    client: Client,
    endpoint: String,
    fired_for: Mutex<Option<String>>,
    show_notification: AtomicBool,
}

impl ClientTrigger {
    /// `origin` is where the page was served from, e.g. `https://miniapp.example.com`
    pub fn new(origin: &Url) -> Result<Self> {
        let client = Client::builder()
            .timeout(TimeoutConfig::global().http_request)
            .build()
            .context("Failed to create HTTP client")?;

        let endpoint = origin
            .join(SEND_MESSAGE_PATH)
            .context("Invalid page origin")?
            .to_string();

        Ok(Self {
            client,
            endpoint,
            fired_for: Mutex::new(None),
            show_notification: AtomicBool::new(false),
        })
    }

    /// Run the trigger for a freshly initialized session
    ///
    /// Failures are logged, never raised: the user only ever sees the success
    /// popup.
    pub async fn on_session_ready(&self, session: &dyn LiffSession) -> TriggerOutcome {
        if !self.claim(session.session_id()) {
            return TriggerOutcome::AlreadyTriggered;
        }

        let Some(token) = session.access_token().filter(|t| !t.is_empty()) else {
            error!("Failed to get LIFF Access Token");
            return TriggerOutcome::MissingToken;
        };

        let response = match self
            .client
            .post(&self.endpoint)
            .header(ACCESS_TOKEN_HEADER, token)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("Error sending message: {}", e);
                return TriggerOutcome::TransportFailed;
            }
        };

        let status = response.status();
        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                error!("Error sending message: {}", e);
                return TriggerOutcome::TransportFailed;
            }
        };

        if status.is_success() {
            info!("Service message sent: {}", body);
            self.show_notification.store(true, Ordering::SeqCst);
            TriggerOutcome::Delivered(body)
        } else {
            error!("Failed to send message: {}", body);
            TriggerOutcome::Rejected {
                status: status.as_u16(),
                body,
            }
        }
    }

    pub fn is_notification_visible(&self) -> bool {
        self.show_notification.load(Ordering::SeqCst)
    }

    /// OK button on the popup
    pub fn dismiss_notification(&self) {
        self.show_notification.store(false, Ordering::SeqCst);
    }

    /// Record `session_id` as handled; false if it already was
    fn claim(&self, session_id: &str) -> bool {
        let mut fired_for = match self.fired_for.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if fired_for.as_deref() == Some(session_id) {
            return false;
        }
        *fired_for = Some(session_id.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeSession {
        id: &'static str,
        token: Option<&'static str>,
    }

    impl LiffSession for FakeSession {
        fn session_id(&self) -> &str {
            self.id
        }

        fn access_token(&self) -> Option<String> {
            self.token.map(str::to_string)
        }
    }

    fn trigger() -> ClientTrigger {
        ClientTrigger::new(&Url::parse("http://127.0.0.1:9").unwrap()).unwrap()
    }

    #[test]
    fn test_endpoint_is_joined_to_origin() {
        let trigger = ClientTrigger::new(&Url::parse("https://miniapp.example.com/app/").unwrap())
            .unwrap();
        assert_eq!(
            trigger.endpoint,
            "https://miniapp.example.com/api/send-message"
        );
    }

    #[tokio::test]
    async fn test_missing_token_sends_nothing() {
        let trigger = trigger();
        let session = FakeSession {
            id: "session-1",
            token: None,
        };

        assert_eq!(
            trigger.on_session_ready(&session).await,
            TriggerOutcome::MissingToken
        );
        assert!(!trigger.is_notification_visible());
    }

    #[tokio::test]
    async fn test_same_session_fires_once() {
        let trigger = trigger();
        let session = FakeSession {
            id: "session-1",
            token: None,
        };

        trigger.on_session_ready(&session).await;
        assert_eq!(
            trigger.on_session_ready(&session).await,
            TriggerOutcome::AlreadyTriggered
        );
    }

    #[test]
    fn test_dismiss_hides_notification() {
        let trigger = trigger();
        trigger.show_notification.store(true, Ordering::SeqCst);

        trigger.dismiss_notification();
        assert!(!trigger.is_notification_visible());
    }
}
