use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::favorite::FavoriteRepository,
    error::Error,
    model::{
        api::{ErrorDto, MessageDto},
        app::AppState,
        auth::CurrentUser,
        favorite::{FavoriteDto, FavoriteQueryDto, NewFavoriteDto},
    },
    service::favorite::FavoriteService,
};

pub static FAVORITE_TAG: &str = "favorite";

/// Get all favorites belonging to a user
#[utoipa::path(
    get,
    path = "/user/{id}/favorites",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Success when retrieving favorites", body = Vec<FavoriteDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    let favorites = favorite_service.list_for_user(user_id).await?;

    let favorite_dtos: Vec<FavoriteDto> = favorites.into_iter().map(FavoriteDto::from).collect();

    Ok((StatusCode::OK, Json(favorite_dtos)).into_response())
}

/// Add a favorite to a user
#[utoipa::path(
    post,
    path = "/user/{id}/favorites",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = NewFavoriteDto,
    responses(
        (status = 200, description = "Favorite created", body = FavoriteDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_user_favorite(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(user_id): Path<i32>,
    Json(new_favorite): Json<NewFavoriteDto>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    let favorite = favorite_service.add_for_user(user_id, new_favorite).await?;

    Ok((StatusCode::OK, Json(FavoriteDto::from(favorite))).into_response())
}

/// Delete a favorite by id
#[utoipa::path(
    delete,
    path = "/favorite/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Favorite ID")),
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(favorite_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service.remove(favorite_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Favorite deleted")),
    )
        .into_response())
}

/// Get every favorite across all users
#[utoipa::path(
    get,
    path = "/favorite",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "Success when retrieving favorites", body = Vec<FavoriteDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Result<impl IntoResponse, Error> {
    let favorite_repository = FavoriteRepository::new(&state.db);

    let favorites = favorite_repository.all().await?;

    let favorite_dtos: Vec<FavoriteDto> = favorites.into_iter().map(FavoriteDto::from).collect();

    Ok((StatusCode::OK, Json(favorite_dtos)).into_response())
}

/// Look up a single favorite by composite filter
#[utoipa::path(
    post,
    path = "/favorite",
    tag = FAVORITE_TAG,
    request_body = FavoriteQueryDto,
    responses(
        (status = 200, description = "Matching favorite", body = FavoriteDto),
        (status = 401, description = "Missing or invalid token, or no match", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_favorite(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(query): Json<FavoriteQueryDto>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    let favorite = favorite_service.find_match(query).await?;

    Ok((StatusCode::OK, Json(FavoriteDto::from(favorite))).into_response())
}
