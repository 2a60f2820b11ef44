use thiserror::Error;

/// Failures of the sign-in flows.
///
/// The display strings are what clients see, so they never say which part of
/// a credential was wrong.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("user not found")]
    UserNotFound,

    #[error("token not provided")]
    TokenMissing,

    #[error("token invalid or expired")]
    TokenInvalid,

    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Whether the caller failed to prove who they are.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidCredentials
                | AuthError::UserNotFound
                | AuthError::TokenMissing
                | AuthError::TokenInvalid
        )
    }
}
