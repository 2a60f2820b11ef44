use thiserror::Error;

/// Error type for JWT operations.
///
/// Every decoding failure is one of `TokenExpired`, `InvalidSignature` or
/// `Malformed`; callers that only care about validity can treat them alike.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token signature does not match")]
    InvalidSignature,

    #[error("Token is malformed: {0}")]
    Malformed(String),
}
