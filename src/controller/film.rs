use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::film::FilmRepository,
    error::{resource::ResourceError, Error},
    model::{api::ErrorDto, app::AppState, auth::CurrentUser, galaxy::FilmDto},
};

pub static FILM_TAG: &str = "film";

/// Get all films
#[utoipa::path(
    get,
    path = "/film",
    tag = FILM_TAG,
    responses(
        (status = 200, description = "Success when retrieving films", body = Vec<FilmDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_films(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Result<impl IntoResponse, Error> {
    let film_repository = FilmRepository::new(&state.db);

    let films = film_repository.all().await?;

    let film_dtos: Vec<FilmDto> = films.into_iter().map(FilmDto::from).collect();

    Ok((StatusCode::OK, Json(film_dtos)).into_response())
}

/// Get a single film by id
#[utoipa::path(
    get,
    path = "/film/{id}",
    tag = FILM_TAG,
    params(("id" = i32, Path, description = "Film ID")),
    responses(
        (status = 200, description = "Success when retrieving film", body = FilmDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Film not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_film(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(film_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let film_repository = FilmRepository::new(&state.db);

    let film = film_repository
        .get(film_id)
        .await?
        .ok_or(ResourceError::FilmNotFound(film_id))?;

    Ok((StatusCode::OK, Json(FilmDto::from(film))).into_response())
}
