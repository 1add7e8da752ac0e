mod error;
mod platform;
mod value_objects;

pub use error::{PipelineError, PlatformError};
pub use platform::{ServiceMessage, ServiceMessagePlatform};
pub use value_objects::{DeliveryReceipt, PipelineStep};
