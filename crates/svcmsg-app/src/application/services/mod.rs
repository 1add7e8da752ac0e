mod service_message_pipeline;

pub use service_message_pipeline::ServiceMessagePipeline;
