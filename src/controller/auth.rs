use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::Error,
    model::{
        api::{ErrorDto, MessageDto},
        app::AppState,
        auth::{CredentialsDto, TokenDto},
    },
    service::auth::AuthService,
};

pub static AUTH_TAG: &str = "auth";

/// Register a new user with email and password
#[utoipa::path(
    post,
    path = "/register",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "User created", body = MessageDto),
        (status = 401, description = "User already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(credentials): Json<CredentialsDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db);

    let user = auth_service
        .register(&credentials.email, &credentials.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!("User {} created", user.email))),
    )
        .into_response())
}

/// Log in with email and password, receiving a bearer token
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "Login successful", body = TokenDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<CredentialsDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db);

    let token = auth_service
        .login(&state.auth, &credentials.email, &credentials.password)
        .await?;

    Ok((StatusCode::OK, Json(TokenDto { token })).into_response())
}
