use svcmsg_domain::notification::PlatformError;

/// Extension trait for Result types to simplify error handling
pub trait ResultExt<T, E> {
    /// Convert error to PlatformError::Transport
    /// Usage: `result.to_transport_err("Failed to send request")?`
    fn to_transport_err(self, context: &str) -> Result<T, PlatformError>;

    /// Convert error to PlatformError::MalformedResponse
    fn to_malformed_err(self, context: &str) -> Result<T, PlatformError>;
}

impl<T, E: std::fmt::Display> ResultExt<T, E> for Result<T, E> {
    fn to_transport_err(self, context: &str) -> Result<T, PlatformError> {
        self.map_err(|e| PlatformError::Transport(format!("{}: {}", context, e)))
    }

    fn to_malformed_err(self, context: &str) -> Result<T, PlatformError> {
        self.map_err(|e| PlatformError::MalformedResponse(format!("{}: {}", context, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_transport_err() {
        let result: Result<i32, &str> = Err("connection reset");
        match result.to_transport_err("Failed to send request") {
            Err(PlatformError::Transport(msg)) => {
                assert_eq!(msg, "Failed to send request: connection reset")
            }
            _ => panic!("Expected Transport error"),
        }
    }

    #[test]
    fn test_to_malformed_err() {
        let result: Result<i32, &str> = Err("expected value");
        assert!(matches!(
            result.to_malformed_err("Failed to parse body"),
            Err(PlatformError::MalformedResponse(_))
        ));
    }
}
