use thiserror::Error;

/// Error type for password operations.
///
/// Verifying a password never produces an error: a wrong password or an
/// unparsable stored hash is simply reported as a mismatch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid hashing parameters: {0}")]
    InvalidParameters(String),
}
