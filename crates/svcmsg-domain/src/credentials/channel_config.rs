use serde_json::{Map, Value};
use std::fmt;

use crate::shared::DomainError;

/// Channel identity used for the client-credentials grant
#[derive(Clone, PartialEq, Eq)]
pub struct ChannelCredentials {
    client_id: String,
    client_secret: String,
}

impl ChannelCredentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let credentials = Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        };
        credentials.validate()?;
        Ok(credentials)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.client_id.is_empty() {
            return Err(DomainError::Configuration(
                "Channel client id cannot be empty".to_string(),
            ));
        }
        if self.client_secret.is_empty() {
            return Err(DomainError::Configuration(
                "Channel client secret cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for ChannelCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Pre-approved service message template
///
/// Parameters are a fixed empty mapping; the template itself lives on the
/// platform.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateReference {
    name: String,
    params: Map<String, Value>,
}

impl TemplateReference {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::Configuration(
                "Template name cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            name,
            params: Map::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &Map<String, Value> {
        &self.params
    }
}

/// Immutable per-request configuration handed to the pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelConfig {
    credentials: ChannelCredentials,
    template: TemplateReference,
}

impl ChannelConfig {
    pub fn new(credentials: ChannelCredentials, template: TemplateReference) -> Self {
        Self {
            credentials,
            template,
        }
    }

    pub fn credentials(&self) -> &ChannelCredentials {
        &self.credentials
    }

    pub fn template(&self) -> &TemplateReference {
        &self.template
    }
}
