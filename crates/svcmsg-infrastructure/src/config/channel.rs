use std::collections::HashMap;
use std::env;

use svcmsg_domain::credentials::{ChannelConfig, ChannelCredentials, TemplateReference};
use svcmsg_domain::DomainError;

pub const CHANNEL_ID_VAR: &str = "LINE_CHANNEL_ID";
pub const CHANNEL_SECRET_VAR: &str = "LINE_CHANNEL_SECRET";
pub const TEMPLATE_NAME_VAR: &str = "LINE_SERVICE_MESSAGE_TEMPLATE_NAME";

/// Operator-correctable configuration problems
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("LINE_CHANNEL_ID and LINE_CHANNEL_SECRET must be configured")]
    MissingChannelCredentials,

    #[error("LINE_SERVICE_MESSAGE_TEMPLATE_NAME must be configured")]
    MissingTemplateName,

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Source of the channel configuration used by one pipeline run
pub trait ChannelConfigSource: Send + Sync {
    fn load(&self) -> Result<ChannelConfig, ConfigError>;
}

type Lookup = dyn Fn(&str) -> Option<String> + Send + Sync;

/// Reads the channel configuration from the environment on every call
pub struct EnvChannelConfigSource {
    lookup: Box<Lookup>,
}

impl EnvChannelConfigSource {
    pub fn new() -> Self {
        Self::with_lookup(|key| env::var(key).ok())
    }

    /// Use a custom variable lookup instead of the process environment
    pub fn with_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            lookup: Box::new(lookup),
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|value| !value.is_empty())
    }
}

impl Default for EnvChannelConfigSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelConfigSource for EnvChannelConfigSource {
    fn load(&self) -> Result<ChannelConfig, ConfigError> {
        let (client_id, client_secret) =
            match (self.var(CHANNEL_ID_VAR), self.var(CHANNEL_SECRET_VAR)) {
                (Some(id), Some(secret)) => (id, secret),
                _ => return Err(ConfigError::MissingChannelCredentials),
            };

        let template_name = self
            .var(TEMPLATE_NAME_VAR)
            .ok_or(ConfigError::MissingTemplateName)?;

        build_config(client_id, client_secret, template_name)
    }
}

/// Fixed configuration, for tests and embedders that manage their own settings
#[derive(Debug, Clone, Default)]
pub struct StaticChannelConfigSource {
    values: HashMap<&'static str, String>,
}

impl StaticChannelConfigSource {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        template_name: impl Into<String>,
    ) -> Self {
        Self::default()
            .with(CHANNEL_ID_VAR, client_id)
            .with(CHANNEL_SECRET_VAR, client_secret)
            .with(TEMPLATE_NAME_VAR, template_name)
    }

    /// Empty source; every load fails until values are added
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.values.insert(key, value.into());
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        self.values.remove(key);
        self
    }
}

impl ChannelConfigSource for StaticChannelConfigSource {
    fn load(&self) -> Result<ChannelConfig, ConfigError> {
        let values = self.values.clone();
        EnvChannelConfigSource::with_lookup(move |key| values.get(key).cloned()).load()
    }
}

fn build_config(
    client_id: String,
    client_secret: String,
    template_name: String,
) -> Result<ChannelConfig, ConfigError> {
    let credentials_key = if client_id.is_empty() {
        CHANNEL_ID_VAR
    } else {
        CHANNEL_SECRET_VAR
    };
    let credentials = ChannelCredentials::new(client_id, client_secret)
        .map_err(|e| invalid_value(credentials_key, e))?;
    let template =
        TemplateReference::new(template_name).map_err(|e| invalid_value(TEMPLATE_NAME_VAR, e))?;

    Ok(ChannelConfig::new(credentials, template))
}

fn invalid_value(key: &str, err: DomainError) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        reason: err.message().to_string(),
    }
}
