use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::sign_in::SessionResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::AuthenticatedIdentity;
use crate::inbound::http::router::AppState;

/// Return the current user for a token already verified by the middleware.
pub async fn sign_in_by_token(
    State(state): State<AppState>,
    identity: Option<Extension<AuthenticatedIdentity>>,
) -> Result<ApiSuccess<SessionResponseData>, ApiError> {
    let Extension(identity) = identity.ok_or(AuthError::TokenMissing)?;

    state
        .auth_service
        .sign_in_by_token(&identity)
        .await
        .map_err(ApiError::from)
        .map(|ref session| ApiSuccess::new(StatusCode::OK, session.into()))
}
