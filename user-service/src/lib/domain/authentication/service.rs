use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::PasswordError;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::AuthSession;
use crate::domain::authentication::models::AuthenticatedIdentity;
use crate::domain::authentication::models::Credentials;
use crate::domain::authentication::ports::AuthServicePort;
use crate::domain::user::ports::UserRepository;

const DECOY_PASSWORD: &str = "decoy password never assigned to an account";

/// Domain service for password and token sign-in.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    // Verified against when there is no stored hash, so every rejected
    // sign-in costs one Argon2 verification.
    decoy_hash: Arc<str>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create the service, hashing a decoy password with the authenticator's
    /// work factor.
    ///
    /// # Errors
    /// * `PasswordError` - The decoy password could not be hashed
    pub fn new(
        repository: Arc<UR>,
        authenticator: Arc<Authenticator>,
    ) -> Result<Self, PasswordError> {
        let decoy_hash = authenticator.hash_password(DECOY_PASSWORD)?.into();

        Ok(Self {
            repository,
            authenticator,
            decoy_hash,
        })
    }

    /// Spend one password verification without an account to check.
    async fn verify_decoy(&self, password: String) -> Result<(), AuthError> {
        let authenticator = Arc::clone(&self.authenticator);
        let decoy_hash = Arc::clone(&self.decoy_hash);

        tokio::task::spawn_blocking(move || authenticator.verify_password(&password, &decoy_hash))
            .await
            .map(|_| ())
            .map_err(|e| {
                tracing::error!(error = %e, "Password verification task failed");
                AuthError::Internal(e.to_string())
            })
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn sign_in(&self, credentials: Credentials) -> Result<AuthSession, AuthError> {
        let user = self
            .repository
            .find_by_email(&credentials.email)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "User lookup failed during sign-in");
                AuthError::Internal(e.to_string())
            })?;

        let Some(user) = user else {
            self.verify_decoy(credentials.password).await?;
            tracing::warn!("Sign-in rejected: no account for email");
            return Err(AuthError::InvalidCredentials);
        };

        let Some(stored_hash) = user.password_hash.clone() else {
            self.verify_decoy(credentials.password).await?;
            tracing::warn!(user_id = %user.id, "Sign-in rejected: account has no password");
            return Err(AuthError::InvalidCredentials);
        };

        // Argon2 verification is CPU bound.
        let authenticator = Arc::clone(&self.authenticator);
        let password = credentials.password;
        let subject = user.id.to_string();
        let email = user.email.to_string();
        let outcome = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &stored_hash, &subject, &email)
        })
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Password verification task failed");
            AuthError::Internal(e.to_string())
        })?;

        match outcome {
            Ok(result) => {
                tracing::info!(user_id = %user.id, "User signed in");
                Ok(AuthSession {
                    user,
                    token: result.access_token,
                })
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::warn!(user_id = %user.id, "Sign-in rejected: wrong password");
                Err(AuthError::InvalidCredentials)
            }
            Err(AuthenticationError::JwtError(e)) => {
                tracing::error!(error = %e, "Token signing failed");
                Err(AuthError::Internal(e.to_string()))
            }
        }
    }

    async fn sign_in_by_token(
        &self,
        identity: &AuthenticatedIdentity,
    ) -> Result<AuthSession, AuthError> {
        let user = self
            .repository
            .find_by_id(&identity.user_id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "User lookup failed during token sign-in");
                AuthError::Internal(e.to_string())
            })?
            .ok_or_else(|| {
                tracing::warn!(user_id = %identity.user_id, "Token subject no longer exists");
                AuthError::UserNotFound
            })?;

        tracing::debug!(user_id = %user.id, "User signed in by token");

        Ok(AuthSession {
            user,
            token: identity.token.clone(),
        })
    }
}
