use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::DomainError;

/// LIFF access token presented by the end user's client
///
/// Only proves identity for the lifetime of one request, so it is never
/// stored or logged.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionAccessToken(String);

impl SessionAccessToken {
    pub fn new(token: impl Into<String>) -> Result<Self, DomainError> {
        let token = token.into();
        if token.is_empty() {
            return Err(DomainError::MissingAccessToken(
                "LIFF Access Token is required".to_string(),
            ));
        }
        Ok(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionAccessToken(<redacted>)")
    }
}

/// Stateless channel access token minted with the client-credentials grant
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceCredential(String);

impl ServiceCredential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for ServiceCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ServiceCredential(<redacted>)")
    }
}

/// Service notification token, valid for sending to exactly one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationToken(String);

impl NotificationToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotificationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_session_token_rejected() {
        let result = SessionAccessToken::new("");
        assert!(matches!(result, Err(DomainError::MissingAccessToken(_))));
    }

    #[test]
    fn test_session_token_keeps_value() {
        let token = SessionAccessToken::new("abc123").unwrap();
        assert_eq!(token.as_str(), "abc123");
    }

    #[test]
    fn test_secrets_are_redacted_in_debug() {
        let session = SessionAccessToken::new("abc123").unwrap();
        let credential = ServiceCredential::new("svc-tok");

        assert!(!format!("{:?}", session).contains("abc123"));
        assert!(!format!("{:?}", credential).contains("svc-tok"));
    }

    #[test]
    fn test_bearer_header_value() {
        let credential = ServiceCredential::new("svc-tok");
        assert_eq!(credential.bearer(), "Bearer svc-tok");
    }

    #[test]
    fn test_notification_token_serializes_as_string() {
        let token = NotificationToken::new("ntf-1");
        assert_eq!(serde_json::to_string(&token).unwrap(), "\"ntf-1\"");
    }
}
