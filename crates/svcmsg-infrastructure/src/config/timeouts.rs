use std::time::Duration;

/// Timeouts applied to outbound platform calls
#[derive(Debug, Clone)]
pub struct TimeoutConfig {
    /// Whole-request timeout for each platform call
    pub http_request: Duration,

    /// TCP/TLS connect timeout
    pub http_connect: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        GLOBAL_TIMEOUT_CONFIG.clone()
    }
}

impl TimeoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the global timeout configuration
    pub fn global() -> &'static Self {
        &GLOBAL_TIMEOUT_CONFIG
    }
}

static GLOBAL_TIMEOUT_CONFIG: TimeoutConfig = TimeoutConfig {
    http_request: Duration::from_secs(30),
    http_connect: Duration::from_secs(10),
};
