use auth::Authenticator;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::AuthenticatedIdentity;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

const BEARER_SCHEME: &str = "bearer";

/// Middleware that validates the bearer token and attaches the caller's
/// identity to the request extensions.
///
/// Rejected requests never reach the wrapped handler.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = identify(req.headers(), &state.authenticator)?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

/// Resolve the identity proven by the `Authorization: Bearer <token>` header.
///
/// # Errors
/// * `TokenMissing` - No `Authorization` header
/// * `TokenInvalid` - Wrong scheme, empty token, bad signature, expired, or
///   a subject that is not a user ID
pub fn identify(
    headers: &HeaderMap,
    authenticator: &Authenticator,
) -> Result<AuthenticatedIdentity, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::TokenMissing)?;

    let value = value.to_str().map_err(|_| {
        tracing::debug!("Authorization header is not visible ASCII");
        AuthError::TokenInvalid
    })?;

    let (scheme, token) = value.trim().split_once(' ').ok_or_else(|| {
        tracing::debug!("Authorization header has no scheme");
        AuthError::TokenInvalid
    })?;

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        tracing::debug!(scheme, "Unsupported authorization scheme");
        return Err(AuthError::TokenInvalid);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::TokenInvalid);
    }

    let claims = authenticator.validate_token(token).map_err(|e| {
        tracing::debug!(error = %e, "Bearer token rejected");
        AuthError::TokenInvalid
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a user ID");
        AuthError::TokenInvalid
    })?;

    Ok(AuthenticatedIdentity {
        user_id,
        token: token.to_string(),
    })
}
