use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::character::CharacterRepository,
    error::{resource::ResourceError, Error},
    model::{api::ErrorDto, app::AppState, auth::CurrentUser, galaxy::CharacterDto},
};

pub static CHARACTER_TAG: &str = "character";

/// Get all characters
#[utoipa::path(
    get,
    path = "/character",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Success when retrieving characters", body = Vec<CharacterDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Result<impl IntoResponse, Error> {
    let character_repository = CharacterRepository::new(&state.db);

    let characters = character_repository.all().await?;

    let character_dtos: Vec<CharacterDto> =
        characters.into_iter().map(CharacterDto::from).collect();

    Ok((StatusCode::OK, Json(character_dtos)).into_response())
}

/// Get a single character by id
#[utoipa::path(
    get,
    path = "/character/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Success when retrieving character", body = CharacterDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(character_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let character_repository = CharacterRepository::new(&state.db);

    let character = character_repository
        .get(character_id)
        .await?
        .ok_or(ResourceError::CharacterNotFound(character_id))?;

    Ok((StatusCode::OK, Json(CharacterDto::from(character))).into_response())
}
