mod channel;
mod server;
mod timeouts;

pub use channel::{
    ChannelConfigSource, ConfigError, EnvChannelConfigSource, StaticChannelConfigSource,
    CHANNEL_ID_VAR, CHANNEL_SECRET_VAR, TEMPLATE_NAME_VAR,
};
pub use server::ServerConfig;
pub use timeouts::TimeoutConfig;
