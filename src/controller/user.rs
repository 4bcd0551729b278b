use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    data::user::UserRepository,
    error::Error,
    model::{api::ErrorDto, app::AppState, auth::CredentialsDto, user::UserDto},
    service::auth::AuthService,
};

pub static USER_TAG: &str = "user";

/// Create a new user, returning the created record
#[utoipa::path(
    post,
    path = "/user",
    tag = USER_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "User created", body = UserDto),
        (status = 401, description = "User already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(credentials): Json<CredentialsDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db);

    let user = auth_service
        .register(&credentials.email, &credentials.password)
        .await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))).into_response())
}

/// Get all registered users
#[utoipa::path(
    get,
    path = "/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when retrieving users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let user_repository = UserRepository::new(&state.db);

    let users = user_repository.all().await?;

    let user_dtos: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();

    Ok((StatusCode::OK, Json(user_dtos)).into_response())
}
