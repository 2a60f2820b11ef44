use async_trait::async_trait;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::AuthSession;
use crate::domain::authentication::models::AuthenticatedIdentity;
use crate::domain::authentication::models::Credentials;

/// Port for the sign-in flows.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Exchange email and password for a fresh bearer token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email, wrong password, or passwordless account
    /// * `Internal` - Storage or token signing failed
    async fn sign_in(&self, credentials: Credentials) -> Result<AuthSession, AuthError>;

    /// Re-establish a session from an already verified token.
    ///
    /// The returned session carries the same token; no new one is issued.
    ///
    /// # Errors
    /// * `UserNotFound` - Token subject no longer exists
    /// * `Internal` - Storage failed
    async fn sign_in_by_token(
        &self,
        identity: &AuthenticatedIdentity,
    ) -> Result<AuthSession, AuthError>;
}
