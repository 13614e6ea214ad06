use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The operation is never served by this server implementation.
    Unsupported,
    InvalidConfig,
    Internal,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::Unsupported => "unsupported",
            ErrorCode::InvalidConfig => "invalid_config",
            ErrorCode::Internal => "internal",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{code}: {message}")]
pub struct BridgeError {
    pub code: ErrorCode,
    pub message: String,
}

impl BridgeError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        BridgeError {
            code,
            message: message.into(),
        }
    }

    /// Rejection of a request-dispatch entry point.
    pub fn unsupported(operation: &str) -> Self {
        Self::new(
            ErrorCode::Unsupported,
            format!(
                "{} is not supported: request dispatch belongs to the host container",
                operation
            ),
        )
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidConfig, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, message)
    }

    /// True when the error indicates a wiring mistake in the caller rather
    /// than a transient condition. Such errors must never be retried.
    pub fn is_programming_error(&self) -> bool {
        self.code == ErrorCode::Unsupported
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        BridgeError::invalid_config(format!("JSON error: {}", err))
    }
}

impl From<std::io::Error> for BridgeError {
    fn from(err: std::io::Error) -> Self {
        BridgeError::internal(format!("IO error: {}", err))
    }
}
