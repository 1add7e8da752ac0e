use std::{env, fmt::Display, net::IpAddr, path::PathBuf, str::FromStr};

use tracing::{info, warn};
use url::Url;

use super::channel::ConfigError;
use crate::http::LINE_API_BASE_URL;

/// Process-wide settings read once at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
    pub line_api_base_url: Url,
    pub liff_id: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl ServerConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            bind: try_load(&lookup, "SVCMSG_BIND", "0.0.0.0")?,
            port: try_load(&lookup, "SVCMSG_PORT", "3000")?,
            line_api_base_url: try_load(&lookup, "LINE_API_BASE_URL", LINE_API_BASE_URL)?,
            liff_id: optional(&lookup, "LIFF_ID"),
            log_dir: optional(&lookup, "SVCMSG_LOG_DIR").map(PathBuf::from),
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

fn optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.trim().is_empty())
}

fn try_load<F, T>(lookup: &F, key: &str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    optional(lookup, key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e: T::Err| {
            warn!("Invalid {key} value: {e}");
            ConfigError::InvalidValue {
                key: key.to_string(),
                reason: e.to_string(),
            }
        })
}
