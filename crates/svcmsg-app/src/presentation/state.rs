use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use svcmsg_domain::notification::ServiceMessagePlatform;
use svcmsg_infrastructure::config::{
    ChannelConfigSource, EnvChannelConfigSource, ServerConfig, TimeoutConfig,
};
use svcmsg_infrastructure::http::LineApiClient;

use super::page::render_index_page;
use crate::application::services::ServiceMessagePipeline;

/// Shared, immutable request-handling state
pub struct AppState {
    pub pipeline: ServiceMessagePipeline,
    pub config_source: Arc<dyn ChannelConfigSource>,
    pub index_page: String,
}

impl AppState {
    pub fn new(
        platform: Arc<dyn ServiceMessagePlatform>,
        config_source: Arc<dyn ChannelConfigSource>,
        liff_id: Option<&str>,
    ) -> Arc<Self> {
        Arc::new(Self {
            pipeline: ServiceMessagePipeline::new(platform),
            config_source,
            index_page: render_index_page(liff_id),
        })
    }

    /// Production wiring: LINE API over HTTPS, channel settings from the environment
    pub fn from_server_config(config: &ServerConfig) -> Result<Arc<Self>> {
        let client = LineApiClient::with_base_url(
            config.line_api_base_url.clone(),
            TimeoutConfig::global(),
        )?;
        info!(line_api = client.base_url(), "LINE API client ready");

        Ok(Self::new(
            Arc::new(client),
            Arc::new(EnvChannelConfigSource::new()),
            config.liff_id.as_deref(),
        ))
    }
}
