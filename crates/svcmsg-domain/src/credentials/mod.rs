mod channel_config;
mod value_objects;

pub use channel_config::{ChannelConfig, ChannelCredentials, TemplateReference};
pub use value_objects::{NotificationToken, ServiceCredential, SessionAccessToken};
