use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use serde::{Deserialize, Serialize};

use crate::{error::auth::AuthError, model::app::AppState, service::auth::decode_token};

/// Claims embedded in a login token.
///
/// Tokens are deliberately unbounded in time: there is no `exp` claim and
/// verification does not require one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// ID of the authenticated user.
    pub sub: i32,
    /// Issued at timestamp.
    pub iat: i64,
}

/// Request body for registration, login, and user creation.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CredentialsDto {
    pub email: String,
    pub password: String,
}

/// The response to a successful login.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct TokenDto {
    pub token: String,
}

/// Extractor for the authenticated user on protected routes.
///
/// Reads the `Authorization: Bearer <token>` header and verifies the token
/// signature before the handler runs. Missing or invalid tokens are rejected
/// with 401.
pub struct CurrentUser(pub i32);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MissingToken)?;

        let claims = decode_token(&state.auth, token)?;

        Ok(CurrentUser(claims.sub))
    }
}
