use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::specie::SpecieRepository,
    error::{resource::ResourceError, Error},
    model::{api::ErrorDto, app::AppState, auth::CurrentUser, galaxy::SpecieDto},
};

pub static SPECIE_TAG: &str = "specie";

/// Get all species, each with its abbreviated character list
#[utoipa::path(
    get,
    path = "/specie",
    tag = SPECIE_TAG,
    responses(
        (status = 200, description = "Success when retrieving species", body = Vec<SpecieDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_species(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Result<impl IntoResponse, Error> {
    let specie_repository = SpecieRepository::new(&state.db);

    let species = specie_repository.all_with_characters().await?;

    let specie_dtos: Vec<SpecieDto> = species.into_iter().map(SpecieDto::from).collect();

    Ok((StatusCode::OK, Json(specie_dtos)).into_response())
}

/// Get a single specie by id
#[utoipa::path(
    get,
    path = "/specie/{id}",
    tag = SPECIE_TAG,
    params(("id" = i32, Path, description = "Specie ID")),
    responses(
        (status = 200, description = "Success when retrieving specie", body = SpecieDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Specie not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_specie(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(specie_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let specie_repository = SpecieRepository::new(&state.db);

    let specie = specie_repository
        .get_with_characters(specie_id)
        .await?
        .ok_or(ResourceError::SpecieNotFound(specie_id))?;

    Ok((StatusCode::OK, Json(SpecieDto::from(specie))).into_response())
}
