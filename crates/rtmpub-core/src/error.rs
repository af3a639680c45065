//! Shared error type across rtmpub crates.

use thiserror::Error;

/// Stable error codes for diagnostics and test vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Non-positive time-to-live.
    InvalidTtl,
    /// Envelope fields violate the ttl pairing rule.
    InvalidEnvelope,
    /// Malformed input (JSON, YAML, enum string, action).
    BadRequest,
    /// Unsupported config/protocol version.
    UnsupportedVersion,
    /// Internal failure (I/O, encoder).
    Internal,
}

impl ErrorCode {
    /// String representation used in vectors and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidTtl => "INVALID_TTL",
            ErrorCode::InvalidEnvelope => "INVALID_ENVELOPE",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, RtmError>;

/// Unified error type used by core and codec.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RtmError {
    #[error("invalid ttl: must be positive, got {0}")]
    InvalidTtl(i64),
    #[error("invalid envelope: {0}")]
    InvalidEnvelope(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl RtmError {
    /// Map to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            RtmError::InvalidTtl(_) => ErrorCode::InvalidTtl,
            RtmError::InvalidEnvelope(_) => ErrorCode::InvalidEnvelope,
            RtmError::BadRequest(_) => ErrorCode::BadRequest,
            RtmError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            RtmError::Internal(_) => ErrorCode::Internal,
        }
    }
}
