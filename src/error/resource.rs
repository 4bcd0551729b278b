use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("User not found")]
    UserNotFound(i32),
    #[error("Planet not found")]
    PlanetNotFound(i32),
    #[error("Character not found")]
    CharacterNotFound(i32),
    #[error("Specie not found")]
    SpecieNotFound(i32),
    #[error("Film not found")]
    FilmNotFound(i32),
    #[error("Favorite not found")]
    FavoriteNotFound(i32),
    /// No favorite row matched the composite lookup filter.
    #[error("Favorite not found")]
    FavoriteNoMatch,
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        // The composite favorite lookup reports a failed match as 401 rather
        // than 404, matching the original service's behavior.
        let status = match self {
            Self::FavoriteNoMatch => StatusCode::UNAUTHORIZED,
            _ => StatusCode::NOT_FOUND,
        };

        tracing::debug!("{:?}", self);

        (status, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
