use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::planet::PlanetRepository,
    error::{resource::ResourceError, Error},
    model::{api::ErrorDto, app::AppState, auth::CurrentUser, galaxy::PlanetDto},
};

pub static PLANET_TAG: &str = "planet";

/// Get all planets, each with its abbreviated character list
#[utoipa::path(
    get,
    path = "/planet",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Success when retrieving planets", body = Vec<PlanetDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Result<impl IntoResponse, Error> {
    let planet_repository = PlanetRepository::new(&state.db);

    let planets = planet_repository.all_with_characters().await?;

    let planet_dtos: Vec<PlanetDto> = planets.into_iter().map(PlanetDto::from).collect();

    Ok((StatusCode::OK, Json(planet_dtos)).into_response())
}

/// Get a single planet by id
#[utoipa::path(
    get,
    path = "/planet/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Success when retrieving planet", body = PlanetDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet_repository = PlanetRepository::new(&state.db);

    let planet = planet_repository
        .get_with_characters(planet_id)
        .await?
        .ok_or(ResourceError::PlanetNotFound(planet_id))?;

    Ok((StatusCode::OK, Json(PlanetDto::from(planet))).into_response())
}
