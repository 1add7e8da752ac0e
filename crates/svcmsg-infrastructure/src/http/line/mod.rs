mod platform;
mod types;

use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use url::Url;

use crate::config::TimeoutConfig;

pub const LINE_API_BASE_URL: &str = "https://api.line.me";

const TOKEN_PATH: &str = "/oauth2/v3/token";
const NOTIFIER_TOKEN_PATH: &str = "/message/v3/notifier/token";
const NOTIFIER_SEND_PATH: &str = "/message/v3/notifier/send";

/// LINE Messaging API client for the service message endpoints
pub struct LineApiClient {
    client: Client,
    base_url: String,
}

impl LineApiClient {
    pub fn with_base_url(base_url: Url, timeouts: &TimeoutConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeouts.http_request)
            .connect_timeout(timeouts.http_connect)
            .gzip(true)
            // Direct connection to the LINE API only
            .no_proxy()
            .build()
            .context("Failed to create HTTP client")?;

        debug!("LINE API client targeting {}", base_url);

        Ok(Self {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
