// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod credentials;
pub mod notification;
pub mod shared;

// Re-exports for convenience
pub use shared::{DomainError, ErrorCode};
